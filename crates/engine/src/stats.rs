use crate::pattern::Pattern;

/// Aggregate line count for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSum {
    pub pattern: Pattern,
    pub sum: usize,
}

/// Per-pattern sums in input order, plus their grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    sums: Vec<PatternSum>,
    total: usize,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the sum for `pattern`.
    ///
    /// A repeated pattern keeps its first position and takes the new sum.
    pub fn record(&mut self, pattern: &Pattern, sum: usize) {
        if let Some(existing) = self.sums.iter_mut().find(|s| &s.pattern == pattern) {
            self.total -= existing.sum;
            existing.sum = sum;
        } else {
            self.sums.push(PatternSum {
                pattern: pattern.clone(),
                sum,
            });
        }
        self.total += sum;
    }

    #[must_use]
    pub fn patterns(&self) -> &[PatternSum] {
        &self.sums
    }

    #[must_use]
    pub fn sum_for(&self, pattern: &Pattern) -> Option<usize> {
        self.sums
            .iter()
            .find(|s| &s.pattern == pattern)
            .map(|s| s.sum)
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}
