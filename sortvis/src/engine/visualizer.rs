// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crossterm::style::Stylize;

use super::{CrosstermPainter, FramePainter, InterruptFlag, RunStats, StepHighlights,
            compose_frame};
use crate::CommonResult;

/// Label used until (or if) a real algorithm name is set.
pub const UNNAMED_ALGORITHM: &str = "[Unnamed]";
pub const CANCELLED_NOTICE: &str = "Sort canceled by user.";
pub const DEFAULT_FRAME_DELAY_MS: u64 = 20;

/// Immutable for the lifetime of a [`Visualizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// When `false` nothing is drawn, the terminal is left alone, and only the final
    /// report is printed.
    pub visual_enabled: bool,
    /// Fixed sleep after every painted frame.
    pub frame_delay: Duration,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            visual_enabled: true,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }
}

impl VisualizerConfig {
    #[must_use]
    pub fn new(visual_enabled: bool, frame_delay_ms: u64) -> Self {
        Self {
            visual_enabled,
            frame_delay: Duration::from_millis(frame_delay_ms),
        }
    }
}

/// The rendering and animation engine. Sort drivers own the array and call into this
/// once per step:
///
/// 1. `record_*` to count what they did,
/// 2. [`Visualizer::render_frame`] with the array and the roles of the indices involved,
/// 3. [`Visualizer::should_continue`], returning right away if it is `false`.
///
/// Dropping the engine restores the terminal and prints the final report to stdout.
///
/// ```
/// use sortvis::{InterruptFlag, StepHighlights, Visualizer, VisualizerConfig};
///
/// let mut vis =
///     Visualizer::try_new(VisualizerConfig::new(false, 0), InterruptFlag::new()).unwrap();
/// vis.set_algorithm_name("bubble");
/// vis.record_comparison();
/// vis.record_accesses(2);
/// vis.render_frame(&[1, 0], StepHighlights::none().last_changed(0));
/// assert!(vis.should_continue());
/// assert_eq!(
///     vis.report_lines(),
///     vec!["Bubble sort - 1 comparisons, 0 swaps, 2 array accesses".to_string()]
/// );
/// ```
#[derive(Debug)]
pub struct Visualizer {
    config: VisualizerConfig,
    interrupt: InterruptFlag,
    algorithm_name: String,
    stats: RunStats,
    is_cancelled: bool,
    maybe_bound_size: Option<usize>,
    maybe_painter: Option<Box<dyn FramePainter>>,
}

impl Visualizer {
    /// Takes over the terminal (only if visualization is enabled).
    ///
    /// # Errors
    ///
    /// Returns [`crate::SortVisError::TerminalSetup`] if the terminal can't be put into
    /// raw mode.
    pub fn try_new(config: VisualizerConfig, interrupt: InterruptFlag) -> CommonResult<Self> {
        Self::try_new_with_painter(config, interrupt, Box::new(CrosstermPainter::default()))
    }

    /// Same as [`Visualizer::try_new`], painting with `painter`. The painter is dropped
    /// unused when visualization is disabled.
    ///
    /// # Errors
    ///
    /// Returns whatever [`FramePainter::enter`] returns. The painter is asked to
    /// [`FramePainter::exit`] before the error is returned.
    pub fn try_new_with_painter(
        config: VisualizerConfig,
        interrupt: InterruptFlag,
        painter: Box<dyn FramePainter>,
    ) -> CommonResult<Self> {
        let maybe_painter = if config.visual_enabled {
            let mut painter = painter;
            if let Err(err) = painter.enter() {
                painter.exit().ok();
                return Err(err);
            }
            Some(painter)
        } else {
            None
        };

        // % is Display, ? is Debug.
        tracing::debug!(message = "Visualizer created", config = ?config);

        Ok(Self {
            config,
            interrupt,
            algorithm_name: UNNAMED_ALGORITHM.to_string(),
            stats: RunStats::default(),
            is_cancelled: false,
            maybe_bound_size: None,
            maybe_painter,
        })
    }

    /// Stores the display label, with its first character upper cased. An empty name
    /// falls back to [`UNNAMED_ALGORITHM`].
    pub fn set_algorithm_name(&mut self, name: &str) {
        let mut chars = name.chars();
        self.algorithm_name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => UNNAMED_ALGORITHM.to_string(),
        };
    }

    pub fn record_comparison(&mut self) { self.record_comparisons(1); }

    pub fn record_comparisons(&mut self, count: usize) { self.stats.add_comparisons(count); }

    pub fn record_access(&mut self) { self.record_accesses(1); }

    pub fn record_accesses(&mut self, count: usize) { self.stats.add_accesses(count); }

    pub fn record_swap(&mut self) { self.record_swaps(1); }

    pub fn record_swaps(&mut self, count: usize) { self.stats.add_swaps(count); }

    /// Draw one step. In order:
    /// 1. Check the interrupt flag and the keyboard, latching cancellation if either
    ///    fired.
    /// 2. Once cancelled, do nothing at all (no polling, no drawing, no sleeping).
    /// 3. With visualization disabled, do nothing else.
    /// 4. Paint the header, ruler and bars, then sleep for the frame delay.
    ///
    /// The array length seen on the first painted frame is the chart size for the rest
    /// of the run.
    pub fn render_frame(&mut self, array: &[usize], highlights: StepHighlights) {
        self.update_cancellation_status();
        if self.is_cancelled {
            return;
        }

        let Some(painter) = self.maybe_painter.as_mut() else {
            return;
        };

        let size = *self.maybe_bound_size.get_or_insert(array.len());
        let frame = compose_frame(&self.algorithm_name, &self.stats, array, highlights, size);
        if let Err(err) = painter.paint(&frame) {
            tracing::error!(message = "Failed to paint frame", error = ?err);
        }

        if !self.config.frame_delay.is_zero() {
            std::thread::sleep(self.config.frame_delay);
        }
    }

    #[must_use]
    pub fn should_continue(&self) -> bool { !self.is_cancelled }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.is_cancelled }

    #[must_use]
    pub fn stats(&self) -> RunStats { self.stats }

    #[must_use]
    pub fn algorithm_name(&self) -> &str { &self.algorithm_name }

    #[must_use]
    pub fn config(&self) -> VisualizerConfig { self.config }

    /// `None` until the first frame is painted.
    #[must_use]
    pub fn bound_size(&self) -> Option<usize> { self.maybe_bound_size }

    /// The lines printed on drop: the cancellation notice (if the run was cancelled, or
    /// an interrupt arrived after the last frame) and the stats summary.
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![];
        if self.was_interrupted() {
            lines.push(CANCELLED_NOTICE.to_string());
        }
        lines.push(self.stats.summary(&self.algorithm_name));
        lines
    }

    fn was_interrupted(&self) -> bool { self.is_cancelled || self.interrupt.is_raised() }

    fn update_cancellation_status(&mut self) {
        if self.is_cancelled {
            return;
        }

        if self.interrupt.is_raised() {
            self.latch_cancellation("interrupt signal");
            return;
        }

        if let Some(painter) = self.maybe_painter.as_mut() {
            if painter.poll_quit_key() {
                self.latch_cancellation("quit key");
            }
        }
    }

    fn latch_cancellation(&mut self, reason: &str) {
        self.is_cancelled = true;
        // % is Display, ? is Debug.
        tracing::info!(
            message = "Run cancelled",
            reason = %reason,
            stats = %self.stats
        );
    }
}

impl Drop for Visualizer {
    fn drop(&mut self) {
        if let Some(mut painter) = self.maybe_painter.take() {
            if let Err(err) = painter.exit() {
                tracing::error!(message = "Failed to restore terminal", error = ?err);
            }
        }

        if self.was_interrupted() {
            println!("{}", CANCELLED_NOTICE.dark_yellow().bold());
        }
        println!("{}", self.stats.summary(&self.algorithm_name));

        tracing::debug!(
            message = "Visualizer dropped",
            algorithm = %self.algorithm_name,
            stats = %self.stats
        );
    }
}
