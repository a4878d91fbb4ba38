// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

// Attach sources.
pub mod clap_config;
pub mod run_config;

// Re-export.
pub use clap_config::*;
pub use run_config::*;
