//! `cruise` — command-line front end for the forest-inventory
//! estimator: single estimates, repeated-trial simulations, and
//! inclusion-probability diagnostics over a synthetic stand frame.

mod cli;
mod config;
mod convert;
mod estimate_cmd;
mod inclusion_cmd;
mod logging;
mod report;
mod simulate_cmd;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Estimate(args) => estimate_cmd::run(&args),
        Command::Simulate(args) => simulate_cmd::run(&args),
        Command::Inclusion(args) => inclusion_cmd::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
