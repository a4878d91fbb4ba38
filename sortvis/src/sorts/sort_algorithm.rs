// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{bubble_sort, double_selection_sort, insertion_sort, selection_sort,
            shaker_sort};
use crate::Visualizer;

/// The algorithms that can be visualized. The kebab-case name doubles as the CLI
/// subcommand and, capitalized, as the label in the stats header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
         IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SortAlgorithm {
    Bubble,
    Shaker,
    Selection,
    DoubleSelection,
    Insertion,
}

impl SortAlgorithm {
    /// Eg: `"double-selection"`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// Sort `array` in place, reporting every step to `vis`.
    pub fn run(self, array: &mut [usize], vis: &mut Visualizer) {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Sort started", algorithm = %self, len = array.len());

        match self {
            SortAlgorithm::Bubble => bubble_sort(array, vis),
            SortAlgorithm::Shaker => shaker_sort(array, vis),
            SortAlgorithm::Selection => selection_sort(array, vis),
            SortAlgorithm::DoubleSelection => double_selection_sort(array, vis),
            SortAlgorithm::Insertion => insertion_sort(array, vis),
        }

        tracing::debug!(
            message = "Sort finished",
            algorithm = %self,
            is_cancelled = vis.is_cancelled()
        );
    }
}
