// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use miette::Diagnostic;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`SortVisError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Everything that can go wrong outside of a sort. The sorts themselves can't fail, and
/// user cancellation is not an error.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SortVisError {
    #[error("Failed to prepare the terminal for drawing")]
    #[diagnostic(
        code(sortvis::terminal::setup),
        help("Run with `--no-vis` to sort without drawing, eg when stdout is not a TTY")
    )]
    TerminalSetup(#[source] std::io::Error),

    #[error("Failed to restore the terminal")]
    #[diagnostic(
        code(sortvis::terminal::restore),
        help("Type `reset` in your shell if the cursor is hidden or echo is off")
    )]
    TerminalRestore(#[source] std::io::Error),

    #[error("Failed to paint frame")]
    #[diagnostic(code(sortvis::terminal::paint))]
    Paint(#[source] std::io::Error),

    #[error("Failed to install SIGINT handler")]
    #[diagnostic(
        code(sortvis::signal::registration),
        help("Signal handler registration failed - check system signal limits")
    )]
    SignalRegistration(#[source] std::io::Error),
}
