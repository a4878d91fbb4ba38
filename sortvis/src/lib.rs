// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # sortvis
//!
//! Terminal visualizer for comparison-based sorting algorithms.
//!
//! The array being sorted is drawn as a vertical bar chart. Every step an algorithm
//! takes (a comparison, a swap, a shift) becomes one frame, with the indices involved
//! painted in the color of their role. A stats header shows the running number of
//! comparisons, swaps, and array accesses, and the same numbers are printed to stdout
//! when the run ends.
//!
//! ```text
//! Bubble sort - 41 comparisons, 17 swaps, 150 array accesses
//!                         []    19
//!                     []  []    18
//!             []      []  []    17
//!             []  []  []  [] .. ..
//! ```
//!
//! # Architecture
//!
//! - [`sorts`] holds the instrumented drivers. They own the array, mutate it, and hand a
//!   [`StepHighlights`] to the engine at every checkpoint.
//! - [`engine`] holds the [`Visualizer`]: counters, cancellation, pacing and painting.
//!   Drivers never draw and never sleep, they only describe steps.
//! - [`cli`] and [`launcher`] turn argv into a [`RunConfig`] and run it.
//! - [`core`] has the crate-wide result type, error diagnostics, macros and logging.
//!
//! # Cancellation
//!
//! Pressing `q` (or `Ctrl-c`, which raw mode delivers as a key) or sending `SIGINT`
//! latches cancellation. The active driver stops at its next checkpoint, the terminal is
//! restored, and the final report is still printed.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cli;
pub mod core;
pub mod engine;
pub mod launcher;
pub mod sorts;

// Re-export.
pub use cli::*;
pub use core::*;
pub use engine::*;
pub use launcher::*;
pub use sorts::*;
