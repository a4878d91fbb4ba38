// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicBool, Ordering}};

use crate::CommonResult;

/// The one piece of state that crosses a thread boundary: a bit that an asynchronous
/// interrupt (`SIGINT`) can set at any time. The [`crate::Visualizer`] reads it at the
/// start of every frame and turns it into latched cancellation.
///
/// Clones share the same bit.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    inner: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// A flag that is only ever set by [`InterruptFlag::raise`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A flag that is also set when the process receives `SIGINT`. Registering replaces
    /// the default action (terminate), so teardown and the final report always run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SortVisError::SignalRegistration`] if the handler can't be
    /// installed.
    #[cfg(unix)]
    pub fn try_new_with_sigint() -> CommonResult<Self> {
        let it = Self::new();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&it.inner))
            .map_err(crate::SortVisError::SignalRegistration)?;
        tracing::debug!(message = "SIGINT handler registered");
        Ok(it)
    }

    /// There is no `SIGINT` to hook on this platform; `Ctrl-c` still arrives as a key
    /// press while the chart is drawn.
    ///
    /// # Errors
    ///
    /// Never fails on this platform.
    #[cfg(not(unix))]
    pub fn try_new_with_sigint() -> CommonResult<Self> { Ok(Self::new()) }

    pub fn raise(&self) { self.inner.store(true, Ordering::SeqCst); }

    #[must_use]
    pub fn is_raised(&self) -> bool { self.inner.load(Ordering::SeqCst) }
}
