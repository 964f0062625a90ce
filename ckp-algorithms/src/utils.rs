use ckp_challenges::conflict_knapsack::{Challenge, Solution};

/// Item indices by descending value/weight ratio. Ratios are compared by
/// cross-multiplication, and the sort is stable, so ties keep index order.
pub fn ratio_order(challenge: &Challenge) -> Vec<usize> {
    let mut order: Vec<usize> = (0..challenge.num_items).collect();
    order.sort_by(|&a, &b| {
        let lhs = challenge.values[b] as u64 * challenge.weights[a] as u64;
        let rhs = challenge.values[a] as u64 * challenge.weights[b] as u64;
        lhs.cmp(&rhs)
    });
    order
}

/// Selection state owned by a single greedy pass.
pub(crate) struct Knapsack<'a> {
    challenge: &'a Challenge,
    selected: Vec<bool>,
    items: Vec<usize>,
    remaining: u32,
}

impl<'a> Knapsack<'a> {
    pub(crate) fn new(challenge: &'a Challenge) -> Self {
        Self {
            challenge,
            selected: vec![false; challenge.num_items],
            items: Vec::new(),
            remaining: challenge.max_weight,
        }
    }

    pub(crate) fn fits(&self, item: usize) -> bool {
        self.challenge.weights[item] <= self.remaining
    }

    pub(crate) fn is_blocked(&self, item: usize) -> bool {
        self.challenge
            .conflicts
            .neighbours(item)
            .iter()
            .any(|&j| self.selected[j])
    }

    pub(crate) fn try_add(&mut self, item: usize) -> bool {
        if self.selected[item] || !self.fits(item) || self.is_blocked(item) {
            return false;
        }
        self.selected[item] = true;
        self.remaining -= self.challenge.weights[item];
        self.items.push(item);
        true
    }

    pub(crate) fn into_solution(self) -> Solution {
        let mut items = self.items;
        items.sort_unstable();
        Solution { items }
    }
}

/// Single pass over `order`, keeping every item that fits and conflicts with
/// nothing kept so far.
pub fn greedy_fill<I>(challenge: &Challenge, order: I) -> Solution
where
    I: IntoIterator<Item = usize>,
{
    let mut knapsack = Knapsack::new(challenge);
    for item in order {
        knapsack.try_add(item);
    }
    knapsack.into_solution()
}
