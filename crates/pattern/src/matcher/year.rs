//! Sparse year matcher.

use std::collections::BTreeSet;

/// Explicit year set. The year domain is wide, so members are kept in an
/// ordered set instead of a bitset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMatcher {
    years: BTreeSet<i32>,
}

impl YearMatcher {
    pub fn new(values: &[i32]) -> Self {
        Self {
            years: values.iter().copied().collect(),
        }
    }

    pub fn matches(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    pub fn values(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
