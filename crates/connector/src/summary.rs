//! Execution summary counters.

use std::collections::BTreeMap;

/// Named counters accumulated over a processing run (skips, creations, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    counters: BTreeMap<String, u64>,
}

impl ExecutionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, counter: &str) {
        self.increment_by(counter, 1);
    }

    pub fn increment_by(&mut self, counter: &str, amount: u64) {
        *self.counters.entry(counter.to_string()).or_insert(0) += amount;
    }

    /// Current value of a counter; absent counters read as 0.
    pub fn count(&self, counter: &str) -> u64 {
        self.counters.get(counter).copied().unwrap_or(0)
    }

    pub fn counters(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counters.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_default_to_zero() {
        let mut summary = ExecutionSummary::new();
        summary.increment("product_skipped_no_diff");
        summary.increment("product_skipped_no_diff");
        summary.increment_by("created", 3);

        assert_eq!(summary.count("product_skipped_no_diff"), 2);
        assert_eq!(summary.count("created"), 3);
        assert_eq!(summary.count("never_touched"), 0);
    }
}
