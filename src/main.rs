#![forbid(unsafe_code)]
mod cli;
mod filter;
mod tree;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use tree::render_tree;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("siftree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    let filter = args.filter()?;

    if args.verbose {
        eprintln!("siftree: rendering {} ({})", args.path.display(), filter);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_tree(&args.path, &filter, &mut out).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
