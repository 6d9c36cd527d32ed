//! CLI for `tinyalign`, the edit and Hamming distance tool.

mod commands;
mod symbols;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the log file. If None, then warnings and errors go to stderr.
    #[arg(short('l'), long)]
    log_path: Option<PathBuf>,

    /// How input strings are split into symbols.
    #[arg(short('y'), long, default_value = "bytes")]
    symbols: symbols::Symbols,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let _guard = utils::configure_logger(args.log_path.as_deref())?;
    ftlog::info!("Args: {args:?}");

    let mut out = std::io::stdout().lock();
    args.command.run(args.symbols, &mut out).inspect_err(|e| {
        ftlog::error!("{e}");
    })
}
