// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Operation counters for a single run. They only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: usize,
    pub accesses: usize,
    pub swaps: usize,
}

impl RunStats {
    pub fn add_comparisons(&mut self, count: usize) {
        self.comparisons = self.comparisons.saturating_add(count);
    }

    pub fn add_accesses(&mut self, count: usize) {
        self.accesses = self.accesses.saturating_add(count);
    }

    pub fn add_swaps(&mut self, count: usize) { self.swaps = self.swaps.saturating_add(count); }

    /// Formats the stats line shown in the header and in the final report, eg:
    /// `Bubble sort - 10 comparisons, 6 swaps, 44 array accesses`.
    #[must_use]
    pub fn summary(&self, algorithm_name: &str) -> String {
        format!("{algorithm_name} sort - {self}")
    }
}

impl Display for RunStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} array accesses",
            self.comparisons, self.swaps, self.accesses
        )
    }
}
