// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The rendering and animation engine. See [`Visualizer`] for the contract between the
//! sort drivers and the engine.

// Attach sources.
pub mod frame;
pub mod highlight;
pub mod interrupt_flag;
pub mod painter;
pub mod run_stats;
pub mod test_fixtures;
pub mod visualizer;

// Re-export.
pub use frame::*;
pub use highlight::*;
pub use interrupt_flag::*;
pub use painter::*;
pub use run_stats::*;
pub use test_fixtures::*;
pub use visualizer::*;
