use anyhow::{anyhow, Result};
use ckp_challenges::conflict_knapsack::{Challenge, Solution};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod exact_dp;
pub mod legacy_dp;
pub mod random_greedy;
pub mod ratio_greedy;
mod utils;
pub use utils::{greedy_fill, ratio_order};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ExactDp,
    LegacyDp,
    RandomGreedy,
    RatioGreedy,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::ExactDp,
        Strategy::LegacyDp,
        Strategy::RandomGreedy,
        Strategy::RatioGreedy,
    ];

    /// The three interchangeable solvers; `LegacyDp` is kept for regression runs only.
    pub const CORE: [Strategy; 3] = [
        Strategy::ExactDp,
        Strategy::RandomGreedy,
        Strategy::RatioGreedy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ExactDp => "exact_dp",
            Strategy::LegacyDp => "legacy_dp",
            Strategy::RandomGreedy => "random_greedy",
            Strategy::RatioGreedy => "ratio_greedy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::ExactDp => "Dynamic programming",
            Strategy::LegacyDp => "Legacy dynamic programming",
            Strategy::RandomGreedy => "Greedy random",
            Strategy::RatioGreedy => "Greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown algorithm '{}'. Expected one of: {}",
                    s,
                    Strategy::ALL.map(|x| x.name()).join(", ")
                )
            })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Outcome {
    pub strategy: Strategy,
    pub total_value: u32,
    /// The chosen items, for strategies that can report them
    pub solution: Option<Solution>,
}

/// Runs one strategy on `challenge`. `seed` feeds the strategies that use randomness.
pub fn solve(strategy: Strategy, challenge: &Challenge, seed: &[u8; 32]) -> Result<Outcome> {
    let solution = match strategy {
        Strategy::ExactDp => exact_dp::solve_challenge(challenge)?,
        Strategy::RandomGreedy => {
            let mut rng = SmallRng::from_seed(seed.clone());
            random_greedy::solve_challenge(challenge, &mut rng)?
        }
        Strategy::RatioGreedy => ratio_greedy::solve_challenge(challenge)?,
        Strategy::LegacyDp => {
            return Ok(Outcome {
                strategy,
                total_value: legacy_dp::solve_challenge(challenge)?,
                solution: None,
            })
        }
    };
    Ok(Outcome {
        strategy,
        total_value: challenge.total_value(&solution.items),
        solution: Some(solution),
    })
}
