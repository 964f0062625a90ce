use anyhow::{anyhow, Result};
use ckp_algorithms::{solve, Outcome, Strategy};
use ckp_challenges::conflict_knapsack::{Challenge, Difficulty, InstanceRecord};
use ckp_utils::{derive_seed, u8s_from_str};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InstanceReport {
    pub challenge: Challenge,
    pub outcomes: Vec<Outcome>,
}

/// Validates every record, then runs `algorithms` on each instance in order.
/// A single invalid record fails the whole batch before anything is solved.
pub fn solve_records(
    records: &[InstanceRecord],
    default_capacity: i64,
    algorithms: &[Strategy],
    seed: &str,
) -> Result<Vec<InstanceReport>> {
    if algorithms.is_empty() {
        return Err(anyhow!("No algorithms selected"));
    }
    let challenges = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Challenge::from_record(record, default_capacity)
                .map_err(|e| anyhow!("Instance {}: {}", i, e))
        })
        .collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} instances", challenges.len());

    let base_seed = u8s_from_str(seed);
    challenges
        .into_iter()
        .enumerate()
        .map(|(i, challenge)| -> Result<InstanceReport> {
            let solve_seed = derive_seed(&base_seed, "record", i as u64);
            let outcomes = algorithms
                .iter()
                .map(|&strategy| solve(strategy, &challenge, &solve_seed))
                .collect::<Result<Vec<_>>>()
                .map_err(|e| anyhow!("Instance {}: {}", i, e))?;
            Ok(InstanceReport {
                challenge,
                outcomes,
            })
        })
        .collect()
}

/// Random instances in the json record format, for replay with `solve_records`.
pub fn generate_records(
    num_items: usize,
    count: usize,
    capacity_per_item: u32,
    seed: &str,
) -> Result<Vec<InstanceRecord>> {
    let max_weight = u32::try_from(num_items)
        .ok()
        .and_then(|n| n.checked_mul(capacity_per_item))
        .ok_or_else(|| anyhow!("Capacity does not fit in 32 bits"))?;
    let difficulty = Difficulty {
        num_items,
        max_weight,
    };
    let base_seed = u8s_from_str(seed);
    (0..count as u64)
        .map(|i| -> Result<InstanceRecord> {
            let challenge =
                Challenge::generate_instance(&derive_seed(&base_seed, "generate", i), &difficulty)?;
            Ok(InstanceRecord::from(&challenge))
        })
        .collect()
}
