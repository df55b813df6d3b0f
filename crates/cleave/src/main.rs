//! `cleave` — split element-structured files into equal pieces.
//!
//! Divides a file into N pieces of near-equal size without ever cutting an
//! element (a FASTA record) across two pieces. Memory use is bounded by
//! twice the configured chunk size regardless of input size.
//!
//! # Usage
//!
//! ```text
//! cleave -n 8 big.fasta                     # eight pieces next to the input
//! cleave -n 4 --out-dir parts big.fasta     # pieces under ./parts
//! cleave -n 4 --chunk-size 16M big.fasta    # bigger window for long records
//! ```
//!
//! Piece `i` is written to `<out-dir>/<base>.<i>` with the index zero-padded
//! to the width of the piece count, so shell globs list them in order.

mod size;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cleave_engine::{SplitConfig, Splitter};
use cleave_format::FastaFormat;
use cleave_io::{FileSinkFactory, FileSource};

use size::{human_size, parse_size};

#[derive(Parser)]
#[command(
    name = "cleave",
    version,
    about = "Split FASTA files into equal pieces without breaking records"
)]
struct Cli {
    /// Input file to split.
    input: PathBuf,

    /// Number of output pieces (at least 2).
    #[arg(short = 'n', long = "pieces", value_name = "N")]
    pieces: u64,

    /// Directory the pieces are written into; created if missing.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Base name for the pieces; piece i becomes `<base>.<i>`.
    /// Defaults to the input file name.
    #[arg(long, value_name = "NAME")]
    out_base: Option<String>,

    /// Bytes per read, with an optional B/K/M/G suffix.
    ///
    /// The splitter buffers at most twice this, and cannot place a cut
    /// if a record never fits in the buffered window.
    #[arg(short = 'c', long, value_name = "SIZE", default_value = "4M", value_parser = parse_size)]
    chunk_size: u64,

    /// Skip the per-piece fsync before a piece is reported written.
    #[arg(long)]
    no_sync: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the piece report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let base = match &cli.out_base {
        Some(base) => base.clone(),
        None => cli
            .input
            .file_name()
            .context("input path has no file name to derive the piece base name from")?
            .to_string_lossy()
            .into_owned(),
    };

    let mut source = FileSource::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;
    let mut sinks = FileSinkFactory::new(&cli.out_dir, &base, cli.pieces, !cli.no_sync)
        .with_context(|| format!("cannot prepare output directory {}", cli.out_dir.display()))?;

    let splitter = Splitter::new(
        SplitConfig {
            pieces: cli.pieces,
            chunk_size: cli.chunk_size as usize,
        },
        FastaFormat,
    )?;

    info!(
        input = %cli.input.display(),
        pieces = cli.pieces,
        chunk_size = cli.chunk_size,
        "splitting"
    );
    let report = splitter
        .split(&mut source, &mut sinks)
        .with_context(|| format!("splitting {} failed", cli.input.display()))?;

    for piece in &report.pieces {
        println!(
            "piece {}/{} written: {} ({} bytes)",
            piece.index + 1,
            report.pieces.len(),
            human_size(piece.bytes),
            piece.bytes
        );
    }

    Ok(())
}
