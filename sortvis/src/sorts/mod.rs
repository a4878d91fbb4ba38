// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Instrumented sort drivers. Each one sorts a `&mut [usize]` in place, reports what it
//! does to the [`crate::Visualizer`], and returns early as soon as
//! [`crate::Visualizer::should_continue`] goes `false`.

// Attach sources.
pub mod bubble;
pub mod double_selection;
pub mod insertion;
pub mod selection;
pub mod shaker;
pub mod shuffle;
pub mod sort_algorithm;

// Re-export.
pub use bubble::*;
pub use double_selection::*;
pub use insertion::*;
pub use selection::*;
pub use shaker::*;
pub use shuffle::*;
pub use sort_algorithm::*;
