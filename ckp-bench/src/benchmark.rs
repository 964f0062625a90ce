use crate::settings::BenchmarkSettings;
use anyhow::{anyhow, Result};
use ckp_algorithms::{solve, Outcome, Strategy};
use ckp_challenges::conflict_knapsack::{Challenge, Difficulty};
use ckp_utils::{average, derive_seed, duration_ms, u8s_from_str};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Above this many items the exact search rarely finishes on random instances.
const EXACT_DP_ITEM_WARNING: usize = 150;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StrategyStats {
    pub strategy: Strategy,
    pub average_ms: f64,
    pub average_value: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub num_items: usize,
    pub max_weight: u32,
    pub trials: u32,
    pub stats: Vec<StrategyStats>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub settings: BenchmarkSettings,
    pub sizes: Vec<SizeReport>,
}

pub fn time_solve(
    strategy: Strategy,
    challenge: &Challenge,
    seed: &[u8; 32],
) -> Result<(Outcome, Duration)> {
    let start = Instant::now();
    let outcome = solve(strategy, challenge, seed)?;
    Ok((outcome, start.elapsed()))
}

/// Generates `trials` instances per size and records each strategy's mean
/// solve time and mean best value. `on_size` sees every size as it completes.
pub fn run_benchmark<F>(settings: &BenchmarkSettings, mut on_size: F) -> Result<BenchmarkReport>
where
    F: FnMut(&SizeReport),
{
    settings.validate()?;
    let base_seed = u8s_from_str(&settings.seed);

    if settings.algorithms.contains(&Strategy::ExactDp) {
        if let Some(&largest) = settings
            .num_items
            .iter()
            .filter(|&&n| n > EXACT_DP_ITEM_WARNING)
            .max()
        {
            log::warn!(
                "exact_dp is exponential in the worst case; {} items may not finish",
                largest
            );
        }
    }

    let mut sizes = Vec::with_capacity(settings.num_items.len());
    for &num_items in &settings.num_items {
        let difficulty = Difficulty {
            num_items,
            max_weight: settings.max_weight(num_items)?,
        };
        log::info!(
            "Benchmarking {} items, capacity {}, {} trials",
            difficulty.num_items,
            difficulty.max_weight,
            settings.trials
        );

        let mut times = vec![Vec::with_capacity(settings.trials as usize); settings.algorithms.len()];
        let mut values = times.clone();
        for trial in 0..settings.trials as u64 {
            let label = format!("n={}", num_items);
            let instance_seed = derive_seed(&base_seed, &format!("{} instance", label), trial);
            let solve_seed = derive_seed(&base_seed, &format!("{} solve", label), trial);

            let challenge = Challenge::generate_instance(&instance_seed, &difficulty)?;
            for (k, &strategy) in settings.algorithms.iter().enumerate() {
                let (outcome, elapsed) = time_solve(strategy, &challenge, &solve_seed)
                    .map_err(|e| anyhow!("{} on trial {}: {}", strategy, trial, e))?;
                log::debug!(
                    "trial {} {}: value {} in {:?}",
                    trial,
                    strategy,
                    outcome.total_value,
                    elapsed
                );
                times[k].push(duration_ms(elapsed));
                values[k].push(outcome.total_value as f64);
            }
        }

        let report = SizeReport {
            num_items: difficulty.num_items,
            max_weight: difficulty.max_weight,
            trials: settings.trials,
            stats: settings
                .algorithms
                .iter()
                .enumerate()
                .map(|(k, &strategy)| StrategyStats {
                    strategy,
                    average_ms: average(&times[k]),
                    average_value: average(&values[k]),
                })
                .collect(),
        };
        on_size(&report);
        sizes.push(report);
    }

    Ok(BenchmarkReport {
        settings: settings.clone(),
        sizes,
    })
}
