//! some -- more than less, but less than more.
//!
//! Reads standard input (or a file).  If it fits on the screen it is printed
//! directly; otherwise it is handed to `$PAGER` (default `less`).

mod app;
mod config;
mod core;
mod pager;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::run::{self, Outcome};
use crate::config::RunConfig;
use crate::core::geometry::DEFAULT_RESERVED_LINES;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "some -- more than less, but less than more.",
    long_about = "Prints the input directly if it fits on the screen, otherwise pages it."
)]
struct Cli {
    /// Optionally, a file to page (`-` or nothing reads stdin).
    #[arg(value_name = "filename")]
    file: Option<PathBuf>,

    /// Rows to keep free for the shell prompt (0 = use the whole screen).
    #[arg(short, long, default_value_t = DEFAULT_RESERVED_LINES)]
    reserved_lines: usize,

    /// Pager to use instead of `$PAGER`.
    #[arg(short, long, value_name = "PROGRAM")]
    pager: Option<String>,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let config = RunConfig::from_cli(cli.file, cli.reserved_lines, cli.pager.as_deref());

    let mut stdout = io::stdout().lock();
    match run::run(&config, &mut stdout)? {
        Outcome::Direct { lines } => tracing::debug!("printed {lines} lines directly"),
        Outcome::Paged(result) => tracing::debug!("paged: {result:?}"),
    }
    Ok(())
}
