//! `feature-paths` entry point: load configuration, resolve feature paths
//! and print the features behind them.

use clap::Parser as _;
use feature_path_cli::{Cli, logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    run(&cli).map_err(color_eyre::eyre::Report::from)
}
