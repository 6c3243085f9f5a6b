//! Measurement tallies.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Shot counts keyed by basis label, ordered by label.
///
/// Every candidate outcome of a sampling run is present, including those
/// that were never drawn (count 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, usize>,
}

impl Counts {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label` as an outcome with count 0 if it is not present.
    pub fn seed(&mut self, label: impl Into<String>) {
        self.counts.entry(label.into()).or_insert(0);
    }

    /// Add `count` hits to `label`.
    pub fn insert(&mut self, label: impl Into<String>, count: usize) {
        *self.counts.entry(label.into()).or_insert(0) += count;
    }

    /// Hits for `label`; 0 if absent.
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// True if `label` is a recorded outcome (even with count 0).
    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Total number of shots.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no outcome is recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(label, count)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.counts.iter()
    }

    /// Outcome labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// The outcome with the most hits. Ties go to the smallest label.
    pub fn most_frequent(&self) -> Option<(&String, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&String, usize)>, (label, &count)| {
                match best {
                    Some((_, c)) if c >= count => best,
                    _ => Some((label, count)),
                }
            })
    }

    /// Relative frequency of each outcome. Empty when no shots were taken.
    pub fn frequencies(&self) -> BTreeMap<String, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(label, &count)| (label.clone(), count as f64 / total as f64))
            .collect()
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (label, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{label}': {count}")?;
        }
        f.write_str("}")
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a usize);
    type IntoIter = std::collections::btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
