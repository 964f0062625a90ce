use crate::greedy_fill;
use anyhow::Result;
use ckp_challenges::conflict_knapsack::{Challenge, Solution};
use rand::{seq::SliceRandom, Rng};

/// Greedy pass over a uniformly shuffled item order.
pub fn solve_challenge<R>(challenge: &Challenge, rng: &mut R) -> Result<Solution>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..challenge.num_items).collect();
    order.shuffle(rng);
    Ok(greedy_fill(challenge, order))
}
