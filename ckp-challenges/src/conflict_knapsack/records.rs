use super::Challenge;
use crate::ChallengeError;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// An instance as it appears in a json data file. Numbers are kept signed so
/// that negative entries surface as validation errors rather than parse errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstanceRecord {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<Vec<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

pub fn load_records(json_str: &str) -> Result<Vec<InstanceRecord>> {
    serde_json::from_str::<Vec<InstanceRecord>>(json_str)
        .map_err(|e| anyhow!("Failed to parse instance records: {}", e))
}

impl Challenge {
    /// Validates a record. `default_capacity` applies when the record has none.
    pub fn from_record(
        record: &InstanceRecord,
        default_capacity: i64,
    ) -> Result<Self, ChallengeError> {
        let no_conflicts;
        let conflicts = match &record.conflicts {
            Some(conflicts) => conflicts,
            None => {
                no_conflicts = vec![Vec::new(); record.weights.len()];
                &no_conflicts
            }
        };
        Challenge::new(
            record.weights.clone(),
            record.values.clone(),
            conflicts,
            record.capacity.unwrap_or(default_capacity),
        )
    }
}

impl From<&Challenge> for InstanceRecord {
    fn from(challenge: &Challenge) -> Self {
        Self {
            weights: challenge.weights.iter().map(|&w| w as i64).collect(),
            values: challenge.values.iter().map(|&v| v as i64).collect(),
            conflicts: Some(
                challenge
                    .conflicts
                    .to_lists()
                    .into_iter()
                    .map(|list| list.into_iter().map(|j| j as i64).collect())
                    .collect(),
            ),
            capacity: Some(challenge.max_weight as i64),
        }
    }
}
