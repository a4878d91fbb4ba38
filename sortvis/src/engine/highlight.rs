// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Color;
use strum_macros::EnumIter;

/// What an index means in the current step. The declaration order is the precedence
/// order: when one index holds several roles, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum HighlightRole {
    /// Primary "last changed" slot, eg the left element of a compared pair, or the
    /// position the last minimum was swapped into.
    LastChanged,
    /// The pointer the algorithm is driving, eg the pass boundary or running minimum.
    ActivePointer,
    /// The element being compared against, or the shift destination.
    ComparisonPartner,
    /// Running maximum in double selection sort.
    SecondaryPointer,
    /// Position the last maximum was swapped into in double selection sort.
    SecondaryLastChanged,
}

impl HighlightRole {
    pub const COUNT: usize = 5;

    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            HighlightRole::LastChanged => 0,
            HighlightRole::ActivePointer => 1,
            HighlightRole::ComparisonPartner => 2,
            HighlightRole::SecondaryPointer => 3,
            HighlightRole::SecondaryLastChanged => 4,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            HighlightRole::LastChanged => Color::DarkGreen,
            HighlightRole::ActivePointer => Color::DarkBlue,
            HighlightRole::ComparisonPartner => Color::DarkRed,
            HighlightRole::SecondaryPointer => Color::DarkMagenta,
            HighlightRole::SecondaryLastChanged => Color::Yellow,
        }
    }
}

/// How a bar is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    Highlight(HighlightRole),
    Filled,
}

impl BarStyle {
    /// Color of a bar that no role claims.
    pub const FILLED_COLOR: Color = Color::Grey;

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            BarStyle::Highlight(role) => role.color(),
            BarStyle::Filled => Self::FILLED_COLOR,
        }
    }
}

/// The role assignments of one step. Each role points at no index or exactly one.
///
/// ```
/// use sortvis::{BarStyle, HighlightRole, StepHighlights};
///
/// let it = StepHighlights::default().last_changed(2).active_pointer(2).comparison_partner(3);
/// assert_eq!(it.style_for(2), BarStyle::Highlight(HighlightRole::LastChanged));
/// assert_eq!(it.style_for(3), BarStyle::Highlight(HighlightRole::ComparisonPartner));
/// assert_eq!(it.style_for(0), BarStyle::Filled);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepHighlights {
    slots: [Option<usize>; HighlightRole::COUNT],
}

impl StepHighlights {
    /// No index is highlighted.
    #[must_use]
    pub fn none() -> Self { Self::default() }

    #[must_use]
    pub fn with(mut self, role: HighlightRole, maybe_index: Option<usize>) -> Self {
        self.slots[role.slot()] = maybe_index;
        self
    }

    #[must_use]
    pub fn last_changed(self, index: impl Into<Option<usize>>) -> Self {
        self.with(HighlightRole::LastChanged, index.into())
    }

    #[must_use]
    pub fn active_pointer(self, index: impl Into<Option<usize>>) -> Self {
        self.with(HighlightRole::ActivePointer, index.into())
    }

    #[must_use]
    pub fn comparison_partner(self, index: impl Into<Option<usize>>) -> Self {
        self.with(HighlightRole::ComparisonPartner, index.into())
    }

    #[must_use]
    pub fn secondary_pointer(self, index: impl Into<Option<usize>>) -> Self {
        self.with(HighlightRole::SecondaryPointer, index.into())
    }

    #[must_use]
    pub fn secondary_last_changed(self, index: impl Into<Option<usize>>) -> Self {
        self.with(HighlightRole::SecondaryLastChanged, index.into())
    }

    #[must_use]
    pub fn get(&self, role: HighlightRole) -> Option<usize> { self.slots[role.slot()] }

    /// First role (in precedence order) assigned to `index`.
    #[must_use]
    pub fn role_for(&self, index: usize) -> Option<HighlightRole> {
        use strum::IntoEnumIterator;
        HighlightRole::iter().find(|role| self.get(*role) == Some(index))
    }

    #[must_use]
    pub fn style_for(&self, index: usize) -> BarStyle {
        self.role_for(index).map_or(BarStyle::Filled, BarStyle::Highlight)
    }
}
