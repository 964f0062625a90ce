use crate::{greedy_fill, ratio_order};
use anyhow::Result;
use ckp_challenges::conflict_knapsack::{Challenge, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let order = ratio_order(challenge);
    let solution = greedy_fill(challenge, order);
    log::debug!(
        "ratio_greedy selected {} of {} items",
        solution.items.len(),
        challenge.num_items
    );
    Ok(solution)
}
