// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configures how a [`miette::Report`] returned from `main()` is printed. This only
//! matters for errors that escape the run, eg the terminal couldn't be put into raw mode.
//!
//! The [`miette::ErrorHook`] is lazily evaluated, so the terminal width is only queried
//! if an error is actually displayed.

use miette::MietteHandlerOpts;

/// Fallback used when the terminal size can't be queried (stdout redirected, etc).
pub const DEFAULT_REPORT_WIDTH: u16 = 80;

/// `footer` is printed under every report.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| columns);
            tracing::debug!(message = "miette::set_hook", terminal_width = %it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
