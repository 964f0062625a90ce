//! Optimal solver for the knapsack with pairwise conflicts.
//!
//! Items are visited in ratio order by a depth-first include/exclude search.
//! A node is cut when its value plus an upper bound on the rest cannot beat
//! the incumbent. Two bounds are used and the smaller one wins:
//!
//! * a 0/1 knapsack table over the unvisited suffix of the order, which
//!   respects capacity but ignores conflicts;
//! * a greedy clique cover of the still selectable items, which respects
//!   conflicts but ignores capacity: at most one item per clique can be taken.
//!
//! The ratio-greedy selection is the starting incumbent. The table has one
//! column per unit of capacity up to `min(W, total weight)`; the search is
//! exponential in the worst case.

use crate::ratio_greedy;
use crate::ratio_order;
use anyhow::{anyhow, Result};
use ckp_challenges::conflict_knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let order = ratio_order(challenge);
    let table = CapacityTable::build(challenge, &order)?;
    let incumbent = ratio_greedy::solve_challenge(challenge)?;

    let mut search = Search {
        challenge,
        table,
        blocked: vec![0; challenge.num_items],
        chosen: Vec::with_capacity(challenge.num_items),
        best_value: challenge.total_value(&incumbent.items),
        best_items: incumbent.items,
        nodes: 0,
        order,
        candidates: Vec::with_capacity(challenge.num_items),
        cliques: Vec::new(),
    };
    search.branch(0, challenge.max_weight, 0);
    log::debug!(
        "exact_dp explored {} nodes, best value {}",
        search.nodes,
        search.best_value
    );

    let mut items = search.best_items;
    items.sort_unstable();
    Ok(Solution { items })
}

/// `best[k][w]`: optimal value of `order[k..]` under capacity `w`, conflicts ignored.
///
/// Columns stop at the total item weight, past which every row is constant.
struct CapacityTable {
    cap: u32,
    width: usize,
    best: Vec<u32>,
}

impl CapacityTable {
    fn build(challenge: &Challenge, order: &[usize]) -> Result<Self> {
        let total_weight: u64 = challenge.weights.iter().map(|&w| w as u64).sum();
        let cap = total_weight.min(challenge.max_weight as u64) as u32;
        let width = cap as usize + 1;
        let size = (order.len() + 1)
            .checked_mul(width)
            .ok_or_else(|| anyhow!("Table of {} x {} cells is too large", order.len() + 1, width))?;
        let mut best = vec![0u32; size];

        for (k, &item) in order.iter().enumerate().rev() {
            let weight = challenge.weights[item] as usize;
            let value = challenge.values[item];
            let (row, next) = best[k * width..(k + 2) * width].split_at_mut(width);
            for w in 0..width {
                row[w] = if weight <= w {
                    next[w].max(value + next[w - weight])
                } else {
                    next[w]
                };
            }
        }

        Ok(Self { cap, width, best })
    }

    fn get(&self, k: usize, remaining: u32) -> u32 {
        self.best[k * self.width + remaining.min(self.cap) as usize]
    }
}

struct Search<'a> {
    challenge: &'a Challenge,
    order: Vec<usize>,
    table: CapacityTable,
    /// Number of chosen items each item conflicts with
    blocked: Vec<u32>,
    chosen: Vec<usize>,
    best_value: u32,
    best_items: Vec<usize>,
    nodes: u64,
    /// Scratch space reused by `clique_bound`
    candidates: Vec<usize>,
    cliques: Vec<Vec<usize>>,
}

impl<'a> Search<'a> {
    fn branch(&mut self, mut k: usize, remaining: u32, value: u32) {
        self.nodes += 1;
        if value > self.best_value {
            self.best_value = value;
            self.best_items = self.chosen.clone();
        }

        // Skip to the next item that can still be taken
        let item = loop {
            let Some(&item) = self.order.get(k) else {
                return;
            };
            if self.is_selectable(item, remaining) {
                break item;
            }
            k += 1;
        };

        if value + self.table.get(k, remaining) <= self.best_value {
            return;
        }
        if value + self.clique_bound(k, remaining) <= self.best_value {
            return;
        }

        let weight = self.challenge.weights[item];
        let gain = self.challenge.values[item];
        self.take(item);
        self.branch(k + 1, remaining - weight, value + gain);
        self.release(item);

        self.branch(k + 1, remaining, value);
    }

    fn is_selectable(&self, item: usize, remaining: u32) -> bool {
        self.blocked[item] == 0 && self.challenge.weights[item] <= remaining
    }

    fn take(&mut self, item: usize) {
        for &j in self.challenge.conflicts.neighbours(item) {
            self.blocked[j] += 1;
        }
        self.chosen.push(item);
    }

    fn release(&mut self, item: usize) {
        for &j in self.challenge.conflicts.neighbours(item) {
            self.blocked[j] -= 1;
        }
        self.chosen.pop();
    }

    fn clique_bound(&mut self, k: usize, remaining: u32) -> u32 {
        let challenge = self.challenge;
        let values = &challenge.values;

        let mut candidates = std::mem::take(&mut self.candidates);
        candidates.clear();
        candidates.extend(
            self.order[k..]
                .iter()
                .copied()
                .filter(|&i| self.is_selectable(i, remaining)),
        );
        candidates.sort_by(|&a, &b| values[b].cmp(&values[a]));

        // Cliques are seeded in descending value order, so the seed is each clique's maximum
        let mut cliques = std::mem::take(&mut self.cliques);
        let mut num_cliques = 0;
        let mut bound = 0;
        for &item in &candidates {
            let home = cliques[..num_cliques].iter_mut().find(|clique| {
                clique
                    .iter()
                    .all(|&member| challenge.conflicts.are_conflicting(item, member))
            });
            match home {
                Some(clique) => clique.push(item),
                None => {
                    bound += values[item];
                    if num_cliques == cliques.len() {
                        cliques.push(Vec::new());
                    }
                    cliques[num_cliques].clear();
                    cliques[num_cliques].push(item);
                    num_cliques += 1;
                }
            }
        }

        self.candidates = candidates;
        self.cliques = cliques;
        bound
    }
}
