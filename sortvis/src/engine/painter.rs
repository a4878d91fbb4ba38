// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          io::{Write, stdout},
          time::Duration};

use crossterm::{cursor::{Hide, MoveTo, Show},
                event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                queue,
                style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor,
                        SetForegroundColor},
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};

use super::frame::{BAR_CELL, CELL_WIDTH, EMPTY_CELL, Frame, HEADER_ROW,
                   RULER_LABEL_WIDTH};
use crate::{CommonResult, SortVisError, ok};

/// The key that cancels a run.
pub const QUIT_KEY: char = 'q';

/// Everything the [`crate::Visualizer`] needs from a terminal. [`CrosstermPainter`] is
/// the real one; tests swap in a recording painter.
pub trait FramePainter: Debug {
    /// Take over the terminal. Called once, before the first frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put into drawing mode.
    fn enter(&mut self) -> CommonResult<()>;

    /// Give the terminal back. Must be safe to call even if [`FramePainter::enter`]
    /// failed half way, or was never called.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be restored.
    fn exit(&mut self) -> CommonResult<()>;

    /// Non blocking. Drains pending input and reports whether a quit key was among it.
    fn poll_quit_key(&mut self) -> bool;

    /// # Errors
    ///
    /// Returns an error if the frame can't be written out.
    fn paint(&mut self, frame: &Frame) -> CommonResult<()>;
}

/// Paints to stdout using crossterm: raw mode (no echo, no line buffering), alternate
/// screen, hidden cursor.
#[derive(Debug, Default)]
pub struct CrosstermPainter {
    is_raw_mode: bool,
    is_size_checked: bool,
}

impl FramePainter for CrosstermPainter {
    fn enter(&mut self) -> CommonResult<()> {
        terminal::enable_raw_mode().map_err(SortVisError::TerminalSetup)?;
        self.is_raw_mode = true;

        let mut out = stdout();
        queue!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .map_err(SortVisError::TerminalSetup)?;
        out.flush().map_err(SortVisError::TerminalSetup)?;

        tracing::debug!(message = "Terminal entered raw mode");
        ok!()
    }

    fn exit(&mut self) -> CommonResult<()> {
        if !self.is_raw_mode {
            return ok!();
        }
        self.is_raw_mode = false;

        let mut out = stdout();
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            LeaveAlternateScreen
        )
        .map_err(SortVisError::TerminalRestore)?;
        out.flush().map_err(SortVisError::TerminalRestore)?;
        terminal::disable_raw_mode().map_err(SortVisError::TerminalRestore)?;

        tracing::debug!(message = "Terminal restored");
        ok!()
    }

    fn poll_quit_key(&mut self) -> bool {
        let mut is_quit = false;
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key_event)) => is_quit |= is_quit_key(&key_event),
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(message = "Failed to read terminal event", error = ?err);
                        break;
                    }
                },
                Ok(false) => break,
                Err(err) => {
                    tracing::warn!(message = "Failed to poll terminal events", error = ?err);
                    break;
                }
            }
        }
        is_quit
    }

    fn paint(&mut self, frame: &Frame) -> CommonResult<()> {
        if !self.is_size_checked {
            self.is_size_checked = true;
            warn_if_terminal_too_small(frame.size);
        }
        let mut out = stdout().lock();
        paint_frame(&mut out, frame).map_err(SortVisError::Paint)?;
        ok!()
    }
}

/// `q`, or `Ctrl+c` which raw mode delivers as a key instead of `SIGINT`.
#[must_use]
pub fn is_quit_key(key_event: &KeyEvent) -> bool {
    if key_event.kind == KeyEventKind::Release {
        return false;
    }
    match key_event.code {
        KeyCode::Char(QUIT_KEY) => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Queue all the commands for one frame into `out` and flush it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint_frame(out: &mut impl Write, frame: &Frame) -> std::io::Result<()> {
    queue!(
        out,
        MoveTo(0, to_cell(HEADER_ROW)),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print(&frame.header),
        Clear(ClearType::UntilNewLine),
    )?;

    queue!(out, SetAttribute(Attribute::Bold))?;
    for label in &frame.ruler {
        queue!(
            out,
            MoveTo(to_cell(label.col), to_cell(label.row)),
            Print(&label.text)
        )?;
    }
    queue!(out, SetAttribute(Attribute::NormalIntensity))?;

    for column in &frame.columns {
        let col = to_cell(column.screen_col());
        let color = column.style.color();

        queue!(out, SetForegroundColor(color), SetBackgroundColor(color))?;
        for row in column.filled_rows() {
            queue!(out, MoveTo(col, to_cell(row)), Print(BAR_CELL))?;
        }

        queue!(out, ResetColor)?;
        for row in column.empty_rows() {
            queue!(out, MoveTo(col, to_cell(row)), Print(EMPTY_CELL))?;
        }
    }

    out.flush()
}

/// Terminal coordinates are `u16`; anything beyond is clamped (and off screen anyway).
fn to_cell(it: usize) -> u16 { u16::try_from(it).unwrap_or(u16::MAX) }

fn warn_if_terminal_too_small(size: usize) {
    let needed_cols = size * CELL_WIDTH + 1 + RULER_LABEL_WIDTH;
    let needed_rows = size + 1;
    let Ok((cols, rows)) = terminal::size() else {
        return;
    };
    if usize::from(cols) < needed_cols || usize::from(rows) < needed_rows {
        // % is Display, ? is Debug.
        tracing::warn!(
            message = "Terminal is smaller than the chart, it will be clipped",
            cols = %cols,
            rows = %rows,
            needed_cols = %needed_cols,
            needed_rows = %needed_rows
        );
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{RunStats, StepHighlights, compose_frame};

    #[test_case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), true ; "q quits")]
    #[test_case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), true ; "ctrl c quits")]
    #[test_case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), false ; "plain c does not")]
    #[test_case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), false ; "other keys do not")]
    #[test_case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), false ; "escape does not")]
    fn test_is_quit_key(key_event: KeyEvent, expected: bool) {
        assert_eq!(is_quit_key(&key_event), expected);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key_event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key_event.kind = KeyEventKind::Release;
        assert!(!is_quit_key(&key_event));
    }

    #[test]
    fn test_paint_frame_writes_header_bars_and_ruler() {
        let frame = compose_frame(
            "Selection",
            &RunStats::default(),
            &[2, 0, 1],
            StepHighlights::none().active_pointer(1),
            3,
        );

        let mut out: Vec<u8> = vec![];
        paint_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("Selection sort - 0 comparisons, 0 swaps, 0 array accesses"));
        // One cell per filled row: values 2, 0, 1 are 3, 1 and 2 cells tall.
        assert_eq!(text.matches(BAR_CELL).count(), 6);
        for label in ["2  ", "1  ", "0  "] {
            assert!(text.contains(label));
        }
    }
}
