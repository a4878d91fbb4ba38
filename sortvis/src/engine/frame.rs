// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Screen layout of one frame, computed without touching the terminal.
//!
//! ```text
//! row 0   │ Bubble sort - 3 comparisons, 1 swaps, 10 array accesses
//! row 1   │   []   2
//! row 2   │ [][]   1
//! row 3   │ [][][] 0      <- array [1, 2, 0], value 0 is still one cell tall
//!           ^ col 2i
//!                  ^ col 2N+1 (ruler, bold)
//! ```
//!
//! A bar of value `v` spans the rows from `N - v` to `N`, so its top lines up with the
//! ruler label `v`.

use std::ops::{Range, RangeInclusive};

use super::{BarStyle, RunStats, StepHighlights};

pub const HEADER_ROW: usize = 0;
pub const FIRST_CHART_ROW: usize = 1;
/// Each bar is two terminal cells wide.
pub const CELL_WIDTH: usize = 2;
pub const BAR_CELL: &str = "[]";
pub const EMPTY_CELL: &str = "  ";
/// Ruler labels are left aligned and padded to this width.
pub const RULER_LABEL_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Number of bars (and chart rows). Bound at the first frame of a run.
    pub size: usize,
    pub header: String,
    pub ruler: Vec<RulerLabel>,
    pub columns: Vec<BarColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulerLabel {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumn {
    pub index: usize,
    pub value: usize,
    /// `size - value`, saturating.
    pub empty_height: usize,
    /// Last chart row, ie `size`.
    pub bottom_row: usize,
    pub style: BarStyle,
}

impl BarColumn {
    #[must_use]
    pub fn screen_col(&self) -> usize { self.index * CELL_WIDTH }

    /// Rows painted with [`BarStyle::color`]: from `size - value` (never above the
    /// first chart row) down to the bottom row. That is `value + 1` cells, so the top
    /// cell sits on the ruler row labeled `value` and `0` is still one cell tall.
    #[must_use]
    pub fn filled_rows(&self) -> RangeInclusive<usize> {
        self.empty_height.max(FIRST_CHART_ROW)..=self.bottom_row
    }

    /// Rows above the bar, painted blank with the default style.
    #[must_use]
    pub fn empty_rows(&self) -> Range<usize> {
        FIRST_CHART_ROW..self.empty_height.max(FIRST_CHART_ROW)
    }
}

/// Build the drawable model of one step. Only the first `size` elements of `array` are
/// laid out.
#[must_use]
pub fn compose_frame(
    algorithm_name: &str,
    stats: &RunStats,
    array: &[usize],
    highlights: StepHighlights,
    size: usize,
) -> Frame {
    let ruler_col = size * CELL_WIDTH + 1;
    let ruler = (0..size)
        .map(|i| RulerLabel {
            row: i + FIRST_CHART_ROW,
            col: ruler_col,
            text: format!("{:<width$}", size - 1 - i, width = RULER_LABEL_WIDTH),
        })
        .collect();

    let columns = array
        .iter()
        .take(size)
        .enumerate()
        .map(|(index, &value)| BarColumn {
            index,
            value,
            empty_height: size.saturating_sub(value),
            bottom_row: size,
            style: highlights.style_for(index),
        })
        .collect();

    Frame {
        size,
        header: stats.summary(algorithm_name),
        ruler,
        columns,
    }
}
