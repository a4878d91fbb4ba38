// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory [`FramePainter`] used by the unit and integration tests. It never touches
//! the terminal.

use std::{cell::RefCell, rc::Rc};

use super::{BarStyle, Frame, FramePainter};
use crate::{CommonResult, ok};

/// Everything a [`RecordingPainter`] has been asked to do.
#[derive(Debug, Default)]
pub struct PainterLog {
    pub enter_count: usize,
    pub exit_count: usize,
    pub poll_count: usize,
    pub frames: Vec<Frame>,
}

/// Records frames instead of painting them. Clones share the same [`PainterLog`], so a
/// test can keep one clone and hand the other to the [`crate::Visualizer`].
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    pub log: Rc<RefCell<PainterLog>>,
    /// Report the quit key from this poll onwards (1 based).
    pub maybe_quit_on_poll: Option<usize>,
}

impl RecordingPainter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Simulates the user pressing `q` right before frame `poll_number` is drawn.
    #[must_use]
    pub fn quit_on_poll(poll_number: usize) -> Self {
        Self {
            maybe_quit_on_poll: Some(poll_number),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize { self.log.borrow().frames.len() }

    #[must_use]
    pub fn poll_count(&self) -> usize { self.log.borrow().poll_count }

    #[must_use]
    pub fn last_frame(&self) -> Option<Frame> { self.log.borrow().frames.last().cloned() }

    /// The style of every column, one row per painted frame.
    #[must_use]
    pub fn frame_styles(&self) -> Vec<Vec<BarStyle>> {
        self.log
            .borrow()
            .frames
            .iter()
            .map(|frame| frame.columns.iter().map(|it| it.style).collect())
            .collect()
    }
}

impl FramePainter for RecordingPainter {
    fn enter(&mut self) -> CommonResult<()> {
        self.log.borrow_mut().enter_count += 1;
        ok!()
    }

    fn exit(&mut self) -> CommonResult<()> {
        self.log.borrow_mut().exit_count += 1;
        ok!()
    }

    fn poll_quit_key(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        log.poll_count += 1;
        matches!(self.maybe_quit_on_poll, Some(it) if log.poll_count >= it)
    }

    fn paint(&mut self, frame: &Frame) -> CommonResult<()> {
        self.log.borrow_mut().frames.push(frame.clone());
        ok!()
    }
}
