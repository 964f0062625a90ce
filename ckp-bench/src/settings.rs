use anyhow::{anyhow, Result};
use ckp_algorithms::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_NUM_ITEMS: [usize; 15] = [
    100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1200, 1400, 1600, 1800, 2000,
];
pub const DEFAULT_TRIALS: u32 = 100;
pub const DEFAULT_CAPACITY_PER_ITEM: u32 = 10;
pub const DEFAULT_SEED: &str = "ckp";
/// Capacity for json instances that do not carry one.
pub const DEFAULT_JSON_CAPACITY: i64 = 50;

/// Settings of a batch run over random instances. Missing fields take defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkSettings {
    pub num_items: Vec<usize>,
    pub trials: u32,
    pub capacity_per_item: u32,
    pub seed: String,
    pub algorithms: Vec<Strategy>,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            num_items: DEFAULT_NUM_ITEMS.to_vec(),
            trials: DEFAULT_TRIALS,
            capacity_per_item: DEFAULT_CAPACITY_PER_ITEM,
            seed: DEFAULT_SEED.to_string(),
            algorithms: vec![
                Strategy::LegacyDp,
                Strategy::RandomGreedy,
                Strategy::RatioGreedy,
            ],
        }
    }
}

impl BenchmarkSettings {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(anyhow!("trials must be at least 1"));
        }
        if self.algorithms.is_empty() {
            return Err(anyhow!("No algorithms selected"));
        }
        let unique: HashSet<&Strategy> = self.algorithms.iter().collect();
        if unique.len() != self.algorithms.len() {
            return Err(anyhow!("Duplicate algorithms selected"));
        }
        for &num_items in &self.num_items {
            self.max_weight(num_items)?;
        }
        Ok(())
    }

    pub fn max_weight(&self, num_items: usize) -> Result<u32> {
        u32::try_from(num_items)
            .ok()
            .and_then(|n| n.checked_mul(self.capacity_per_item))
            .ok_or_else(|| {
                anyhow!(
                    "Capacity for {} items x {} per item does not fit in 32 bits",
                    num_items,
                    self.capacity_per_item
                )
            })
    }
}

pub fn parse_algorithms(list: &str) -> Result<Vec<Strategy>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse::<Strategy>)
        .collect()
}
