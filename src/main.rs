use std::io;

use clap::Parser;
use hexcolor::cli::{self, Cli, CliError};
use tracing::Level;

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let mut stdout = io::stdout().lock();
    cli::run(cli.command, &mut stdout)
}
