// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, InterruptFlag, RunConfig, Visualizer, VisualizerConfig,
            generate_shuffled_vec, ok};

/// Shuffle, sort, and report. Cancellation (`q`, `Ctrl-c` or `SIGINT`) ends the run
/// early but is not an error.
///
/// The [`Visualizer`] is dropped before this returns, which restores the terminal and
/// prints the final report to stdout.
///
/// # Errors
///
/// Returns an error if the `SIGINT` handler can't be installed, or if the terminal can't
/// be prepared for drawing.
pub fn run(run_config: RunConfig) -> CommonResult<()> {
    // % is Display, ? is Debug.
    tracing::debug!(message = "Run started", run_config = ?run_config);

    let interrupt = InterruptFlag::try_new_with_sigint()?;
    let mut array = generate_shuffled_vec(run_config.size, run_config.maybe_seed);

    {
        let mut vis = Visualizer::try_new(VisualizerConfig::from(&run_config), interrupt)?;
        vis.set_algorithm_name(run_config.algorithm.name());
        run_config.algorithm.run(&mut array, &mut vis);
    }

    tracing::debug!(message = "Run stopped", array = ?array);
    ok!()
}
