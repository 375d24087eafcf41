mod cli;
mod commands;

use clap::Parser;
use color_eyre::eyre::eyre;

use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    // panic hook
    color_eyre::install()?;

    // parse command line arguments
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // validate CLI arguments
    cli.validate().map_err(|message| eyre!(message))?;

    commands::run(&cli)
}
