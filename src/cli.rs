//! Command tree and dispatcher for the `hexcolor` binary.

use std::io::Write;

use clap::{Args, Parser, Subcommand};

use crate::color::Color;

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "hexcolor", version, about = "Display color information")]
pub struct Cli {
    /// Log pipeline steps to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shows a color
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Hex color such as `#a1f`, `a1f`, or `#aa11ff`. Extra values are ignored.
    #[arg(num_args = 0..)]
    pub hex_color: Vec<String>,

    /// Print the color as JSON instead of the text report.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Run a parsed command, writing its output to `out`.
///
/// Invalid colors are reported on `out` and are not an error here.
///
/// # Errors
///
/// Returns [`CliError`] when writing to `out` or JSON rendering fails.
pub fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Show(args) => run_show(args, out),
    }
}

fn run_show(args: ShowArgs, out: &mut impl Write) -> Result<(), CliError> {
    let input = args.hex_color.into_iter().next().unwrap_or_default();
    let color = match Color::from_hex_code(&input) {
        Ok(color) => color,
        Err(error) => {
            tracing::debug!(%error, input = %input, "show rejected input");
            writeln!(out, "{error}")?;
            return Ok(());
        }
    };

    if args.json {
        let rendered = serde_json::to_string_pretty(&color)?;
        writeln!(out, "{rendered}")?;
    } else {
        write!(out, "{color}")?;
    }
    Ok(())
}
