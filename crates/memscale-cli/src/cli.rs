use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "memscale - Estimate per-core memory of B3LYP/6-31G** calculations for coronene-family molecules by extrapolating a per-carbon scaling coefficient.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extrapolate memory requirements and plot verified and estimated values.
    Estimate(EstimateArgs),
    /// Print the built-in study configuration in TOML format.
    Defaults,
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Path to a study configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the rendered chart (SVG).
    #[arg(short, long, value_name = "PATH", default_value = "memory_estimate.svg")]
    pub output: PathBuf,

    /// Override the target carbon counts, in processing order (e.g. 150,216,294).
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub targets: Option<Vec<u32>>,

    /// Override how many leading verified samples seed the extrapolation.
    #[arg(short = 'n', long, value_name = "INT")]
    pub seed_count: Option<usize>,

    /// Skip rendering the chart and only print the table.
    #[arg(long)]
    pub no_chart: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S chart.title="My run"
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
