// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CLIArg;
use crate::{SortAlgorithm, VisualizerConfig};

/// Everything a run needs, already validated by clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: SortAlgorithm,
    /// Always at least 1.
    pub size: usize,
    pub delay_ms: u64,
    pub maybe_seed: Option<u64>,
    pub visual_enabled: bool,
    pub enable_logging: bool,
}

impl From<CLIArg> for RunConfig {
    fn from(cli_arg: CLIArg) -> Self {
        let options = cli_arg.global_options;
        Self {
            algorithm: cli_arg.command.into(),
            size: options.size.get(),
            delay_ms: options.delay,
            maybe_seed: options.seed.map(seed_bits),
            visual_enabled: !options.no_vis,
            enable_logging: options.enable_logging,
        }
    }
}

/// Signed seeds keep their bit pattern, so every `i64` maps to a distinct `u64` and
/// non negative seeds are unchanged.
#[must_use]
pub fn seed_bits(seed: i64) -> u64 { u64::from_ne_bytes(seed.to_ne_bytes()) }

impl From<&RunConfig> for VisualizerConfig {
    fn from(run_config: &RunConfig) -> Self {
        VisualizerConfig::new(run_config.visual_enabled, run_config.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_from_cli_arg() {
        let cli_arg = CLIArg::try_parse_from([
            "sortvis",
            "insertion",
            "-s",
            "7",
            "-d",
            "15",
            "--seed",
            "3",
            "--no-vis",
        ])
        .unwrap();

        let run_config = RunConfig::from(cli_arg);
        assert_eq2!(
            run_config,
            RunConfig {
                algorithm: SortAlgorithm::Insertion,
                size: 7,
                delay_ms: 15,
                maybe_seed: Some(3),
                visual_enabled: false,
                enable_logging: false,
            }
        );

        let vis_config = VisualizerConfig::from(&run_config);
        assert!(!vis_config.visual_enabled);
        assert_eq2!(vis_config.frame_delay, Duration::from_millis(15));
    }

    #[test]
    fn test_negative_seed_is_accepted_and_deterministic() {
        let parse = |args: &[&str]| RunConfig::from(CLIArg::try_parse_from(args).unwrap());

        let negative = parse(&["sortvis", "bubble", "--seed", "-3"]);
        assert_eq2!(negative.maybe_seed, Some(u64::MAX - 2));
        assert_eq2!(negative, parse(&["sortvis", "--seed", "-3", "bubble"]));

        let positive = parse(&["sortvis", "bubble", "--seed", "3"]);
        assert_eq2!(positive.maybe_seed, Some(3));
        assert_ne!(negative.maybe_seed, positive.maybe_seed);
    }
}
