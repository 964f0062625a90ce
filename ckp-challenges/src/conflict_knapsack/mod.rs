mod conflicts;
pub use conflicts::ConflictGraph;
mod records;
pub use records::{load_records, InstanceRecord};

use crate::ChallengeError;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 20;
pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub num_items: usize,
    pub max_weight: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Solution {
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

/// One knapsack instance. Only constructed through validating constructors,
/// so every field satisfies the data model for the lifetime of the value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub num_items: usize,
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
    pub conflicts: ConflictGraph,
    pub max_weight: u32,
}

impl Challenge {
    /// Builds an instance from raw signed inputs.
    pub fn new(
        weights: Vec<i64>,
        values: Vec<i64>,
        conflicts: &[Vec<i64>],
        max_weight: i64,
    ) -> Result<Self, ChallengeError> {
        if weights.len() != values.len() {
            return Err(ChallengeError::instance(format!(
                "{} weights but {} values",
                weights.len(),
                values.len()
            )));
        }
        if conflicts.len() != weights.len() {
            return Err(ChallengeError::instance(format!(
                "{} conflict lists for {} items",
                conflicts.len(),
                weights.len()
            )));
        }
        let weights = to_positive("weight", &weights)?;
        let values = to_positive("value", &values)?;
        let conflicts = ConflictGraph::from_lists(conflicts)?;
        let max_weight =
            u32::try_from(max_weight).map_err(|_| ChallengeError::InvalidCapacity(max_weight))?;
        Self::from_parts(weights, values, conflicts, max_weight)
    }

    pub fn from_parts(
        weights: Vec<u32>,
        values: Vec<u32>,
        conflicts: ConflictGraph,
        max_weight: u32,
    ) -> Result<Self, ChallengeError> {
        let num_items = weights.len();
        if values.len() != num_items || conflicts.num_items() != num_items {
            return Err(ChallengeError::instance(format!(
                "{} weights, {} values and {} conflict lists",
                num_items,
                values.len(),
                conflicts.num_items()
            )));
        }
        if let Some(i) = weights.iter().position(|&w| w == 0) {
            return Err(ChallengeError::instance(format!("Item {} has zero weight", i)));
        }
        if let Some(i) = values.iter().position(|&v| v == 0) {
            return Err(ChallengeError::instance(format!("Item {} has zero value", i)));
        }
        if values.iter().map(|&v| v as u64).sum::<u64>() > u32::MAX as u64 {
            return Err(ChallengeError::instance("Sum of values overflows 32 bits"));
        }
        Ok(Self {
            num_items,
            weights,
            values,
            conflicts,
            max_weight,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let num_items = difficulty.num_items;

        let mut weights = Vec::with_capacity(num_items);
        let mut values = Vec::with_capacity(num_items);
        for _ in 0..num_items {
            weights.push(rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT));
            values.push(rng.gen_range(MIN_VALUE..=MAX_VALUE));
        }

        // Each item draws up to a quarter of the item count as partners
        let max_partners = num_items / 4;
        let mut pairs = Vec::new();
        for i in 0..num_items {
            let num_conflicts = if max_partners > 0 {
                rng.gen_range(0..max_partners)
            } else {
                0
            };
            for _ in 0..num_conflicts {
                let j = rng.gen_range(0..num_items);
                if j != i {
                    pairs.push((i, j));
                }
            }
        }
        let conflicts = ConflictGraph::from_pairs(num_items, pairs)?;

        Ok(Self::from_parts(
            weights,
            values,
            conflicts,
            difficulty.max_weight,
        )?)
    }

    pub fn total_value(&self, items: &[usize]) -> u32 {
        items.iter().map(|&i| self.values[i]).sum()
    }

    pub fn total_weight(&self, items: &[usize]) -> u64 {
        items.iter().map(|&i| self.weights[i] as u64).sum()
    }

    /// Checks that `solution` is a feasible selection and returns its total value.
    pub fn verify_solution(&self, solution: &Solution) -> Result<u32> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }
        if let Some(&item) = solution.items.iter().find(|&&i| i >= self.num_items) {
            return Err(anyhow!("Item ({}) is out of bounds", item));
        }

        let total_weight = self.total_weight(&solution.items);
        if total_weight > self.max_weight as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight,
                self.max_weight
            ));
        }

        for (k, &a) in solution.items.iter().enumerate() {
            for &b in &solution.items[k + 1..] {
                if self.conflicts.are_conflicting(a, b) {
                    return Err(anyhow!("Items ({}) and ({}) are in conflict", a, b));
                }
            }
        }

        Ok(self.total_value(&solution.items))
    }
}

fn to_positive(field: &str, raw: &[i64]) -> Result<Vec<u32>, ChallengeError> {
    raw.iter()
        .enumerate()
        .map(|(i, &x)| match u32::try_from(x) {
            Ok(x) if x > 0 => Ok(x),
            _ => Err(ChallengeError::instance(format!(
                "The {} of item {} must be a positive 32-bit integer, got {}",
                field, i, x
            ))),
        })
        .collect()
}
