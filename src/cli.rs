use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cruise two-stage PPS inventory simulator.
#[derive(Parser)]
#[command(
    name = "cruise",
    version,
    about = "Two-stage PPS timber cruise simulator with Horvitz-Thompson estimation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run one cruise and report the population estimate.
    Estimate(EstimateArgs),
    /// Run repeated cruises and report bias and coverage diagnostics.
    Simulate(SimulateArgs),
    /// Report Monte Carlo and analytic inclusion probabilities per stand.
    Inclusion(InclusionArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cruise.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the JSON report to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cruise.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override trial count from config.
    #[arg(short = 't', long)]
    pub trials: Option<usize>,

    /// Write the JSON report to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inclusion` subcommand.
#[derive(clap::Args)]
pub struct InclusionArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cruise.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the JSON report to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
