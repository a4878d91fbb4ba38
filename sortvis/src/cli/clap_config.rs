// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand};

use crate::SortAlgorithm;

#[derive(Debug, Parser)]
#[command(bin_name = "sortvis")]
#[command(about = "📊 A command-line sorting algorithm visualizer")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  sortvis [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n{after-help}\n",
    subcommand_help_heading("Command")
)]
#[command(
    after_help = "Example: sortvis bubble --size 50 --delay 10\nPress `q` or `Ctrl-c` to cancel a sort, the final report is still printed"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: SortCommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 's',
        value_name = "N",
        default_value = "20",
        help = "The number of elements to sort (a shuffled permutation of 0..N)"
    )]
    pub size: NonZeroUsize,

    #[arg(
        global = true,
        long,
        short = 'd',
        value_name = "MS",
        default_value_t = 0,
        help = "Animation delay in milliseconds after each frame, controls the animation speed"
    )]
    pub delay: u64,

    #[arg(
        global = true,
        long,
        value_name = "SEED",
        allow_negative_numbers = true,
        help = "Seed for the shuffle (any integer, negative too), the same seed always produces the same array"
    )]
    pub seed: Option<i64>,

    #[arg(
        global = true,
        long,
        help = "Disable the terminal visualization, only print the final report"
    )]
    pub no_vis: bool,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum SortCommand {
    #[clap(about = "🫧 Use the bubble sort algorithm")]
    Bubble,

    #[clap(about = "🍸 Use the cocktail shaker sort algorithm")]
    Shaker,

    #[clap(about = "👉 Use the selection sort algorithm")]
    Selection,

    #[clap(about = "👐 Use the double selection sort algorithm (min and max per pass)")]
    DoubleSelection,

    #[clap(about = "📥 Use the insertion sort algorithm")]
    Insertion,
}

impl From<SortCommand> for SortAlgorithm {
    fn from(command: SortCommand) -> Self {
        match command {
            SortCommand::Bubble => SortAlgorithm::Bubble,
            SortCommand::Shaker => SortAlgorithm::Shaker,
            SortCommand::Selection => SortAlgorithm::Selection,
            SortCommand::DoubleSelection => SortAlgorithm::DoubleSelection,
            SortCommand::Insertion => SortAlgorithm::Insertion,
        }
    }
}
