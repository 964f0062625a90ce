use crate::ChallengeError;
use serde::Serialize;

/// Symmetric conflict relation over item indices.
///
/// Each neighbour list is sorted and free of duplicates, so membership tests
/// are a binary search. A pair recorded on one side only is mirrored on the
/// other side when the graph is built.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(into = "Vec<Vec<usize>>")]
pub struct ConflictGraph {
    neighbours: Vec<Vec<usize>>,
}

impl ConflictGraph {
    pub fn from_pairs<I>(num_items: usize, pairs: I) -> Result<Self, ChallengeError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut neighbours = vec![Vec::new(); num_items];
        for (a, b) in pairs {
            if a >= num_items || b >= num_items {
                return Err(ChallengeError::instance(format!(
                    "Conflict ({}, {}) is out of range [0, {})",
                    a, b, num_items
                )));
            }
            if a == b {
                return Err(ChallengeError::instance(format!(
                    "Item {} conflicts with itself",
                    a
                )));
            }
            neighbours[a].push(b);
            neighbours[b].push(a);
        }
        for list in neighbours.iter_mut() {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self { neighbours })
    }

    /// Builds the graph from one conflict list per item, as found in instance files.
    pub fn from_lists(lists: &[Vec<i64>]) -> Result<Self, ChallengeError> {
        let num_items = lists.len();
        let mut pairs = Vec::new();
        for (i, list) in lists.iter().enumerate() {
            for &j in list {
                if j < 0 || j as u64 >= num_items as u64 {
                    return Err(ChallengeError::instance(format!(
                        "Conflict index {} of item {} is out of range [0, {})",
                        j, i, num_items
                    )));
                }
                pairs.push((i, j as usize));
            }
        }
        let graph = Self::from_pairs(num_items, pairs)?;
        let one_sided = lists
            .iter()
            .enumerate()
            .filter(|(i, list)| {
                graph.neighbours[*i]
                    .iter()
                    .any(|&j| !list.contains(&(j as i64)))
            })
            .count();
        if one_sided > 0 {
            log::debug!(
                "Mirrored one-sided conflicts for {} of {} items",
                one_sided,
                num_items
            );
        }
        Ok(graph)
    }

    pub fn num_items(&self) -> usize {
        self.neighbours.len()
    }

    pub fn neighbours(&self, item: usize) -> &[usize] {
        &self.neighbours[item]
    }

    pub fn are_conflicting(&self, a: usize, b: usize) -> bool {
        a < self.neighbours.len() && self.neighbours[a].binary_search(&b).is_ok()
    }

    pub fn num_edges(&self) -> usize {
        self.neighbours.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        self.neighbours.clone()
    }
}

impl From<ConflictGraph> for Vec<Vec<usize>> {
    fn from(graph: ConflictGraph) -> Self {
        graph.neighbours
    }
}
