//! The first table recurrence used by this benchmark, kept so old reports can be reproduced.
//!
//! Item `i` (1-based row) is skipped at capacity `w` whenever any of its
//! conflicting indices `j` has a positive entry at row `j`, column `w`. Row `j`
//! summarises items `0..j`, so this is not a test of whether item `j` was
//! chosen: the value returned can exceed the best feasible value (mutually
//! conflicting items both counted) or fall short of it. Use `exact_dp` for
//! real answers.

use anyhow::{anyhow, Result};
use ckp_challenges::conflict_knapsack::Challenge;

pub fn solve_challenge(challenge: &Challenge) -> Result<u32> {
    let num_items = challenge.num_items;
    let capacity = challenge.max_weight as usize;
    let width = capacity + 1;
    let size = (num_items + 1)
        .checked_mul(width)
        .ok_or_else(|| anyhow!("Table of {} x {} cells is too large", num_items + 1, width))?;
    let mut dp = vec![0u32; size];

    for i in 1..=num_items {
        let item = i - 1;
        let weight = challenge.weights[item] as usize;
        let value = challenge.values[item];
        for w in 1..=capacity {
            let conflict = challenge
                .conflicts
                .neighbours(item)
                .iter()
                .any(|&j| dp[j * width + w] > 0);

            let exclude = dp[(i - 1) * width + w];
            dp[i * width + w] = if !conflict && weight <= w {
                exclude.max(value + dp[(i - 1) * width + w - weight])
            } else {
                exclude
            };
        }
    }

    Ok(dp[num_items * width + capacity])
}
