//! Story points per task.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsMap(HashMap<String, f64>);

impl PointsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, phid: impl Into<String>, points: f64) {
        self.0.insert(phid.into(), points);
    }

    /// Points for a task, `None` when unset.
    pub fn get(&self, phid: &str) -> Option<f64> {
        self.0.get(phid).copied().filter(|points| points.is_finite())
    }

    /// Sum of the points set for `phids`; unset entries count as zero.
    pub fn total<'a, I>(&self, phids: I) -> f64
    where
        I: IntoIterator<Item = &'a str>,
    {
        phids
            .into_iter()
            .filter_map(|phid| self.get(phid))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for PointsMap {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
