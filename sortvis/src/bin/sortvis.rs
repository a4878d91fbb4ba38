// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use sortvis::{CLIArg, CommonResult, RunConfig, run,
              setup_default_miette_global_report_handler, throws,
              try_initialize_logging_global};

const REPORT_FOOTER: &str = "If the terminal looks broken, run `reset`. To sort without drawing, pass `--no-vis`.";

#[allow(clippy::needless_return)]
fn main() -> CommonResult<()> {
    throws!({
        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();
        let run_config = RunConfig::from(cli_arg);

        let enable_logging = run_config.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", run_config = ?run_config);
        });

        setup_default_miette_global_report_handler(REPORT_FOOTER);

        run(run_config)?;

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
