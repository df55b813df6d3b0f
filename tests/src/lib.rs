//! Shared harness for end-to-end split tests.
//!
//! Provides [`SplitFixture`] — a temp-dir fixture with a generated FASTA
//! input file — plus record generation and verification helpers used by
//! the integration test targets.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use cleave_engine::{SplitConfig, SplitError, SplitReport, Splitter};
use cleave_format::FastaFormat;
use cleave_io::{FileSinkFactory, FileSource};

/// Deterministic sequence line of `len` bases.
pub fn sequence(seed: u32, len: usize) -> String {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];
    let mut state = seed ^ 0xDEAD_BEEF;
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        out.push(BASES[(state >> 16) as usize % 4]);
    }
    out
}

/// Deterministic FASTA input with `n` records of varying lengths.
pub fn fasta_input(n: usize) -> Vec<u8> {
    let mut input = String::new();
    for i in 0..n {
        let len = 30 + (i * 41) % 90;
        input.push_str(&format!(">record_{i}\n{}\n", sequence(i as u32, len)));
    }
    input.into_bytes()
}

/// An input file and an output directory, both under one temp dir.
pub struct SplitFixture {
    pub dir: TempDir,
    pub input: PathBuf,
    pub input_bytes: Vec<u8>,
}

impl SplitFixture {
    /// Write `data` as `input.fasta` under a fresh temp dir.
    pub fn new(data: Vec<u8>) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let input = dir.path().join("input.fasta");
        fs::write(&input, &data).expect("write fixture input");
        Self {
            dir,
            input,
            input_bytes: data,
        }
    }

    /// Directory the pieces land in.
    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Split the fixture input into `pieces` pieces, fsync included.
    pub fn split(&self, pieces: u64, chunk_size: usize) -> Result<SplitReport, SplitError> {
        let mut source = FileSource::open(&self.input)?;
        let mut sinks = FileSinkFactory::new(self.out_dir(), "input.fasta", pieces, true)?;
        let splitter = Splitter::new(SplitConfig { pieces, chunk_size }, FastaFormat)?;
        splitter.split(&mut source, &mut sinks)
    }

    /// Read back the written pieces in piece order.
    pub fn read_pieces(&self, pieces: u64) -> Vec<Vec<u8>> {
        let width = decimal_width(pieces.saturating_sub(1));
        (0..pieces)
            .map(|i| {
                let name = format!("input.fasta.{i:0width$}");
                fs::read(self.out_dir().join(&name)).expect("read piece")
            })
            .collect()
    }
}

fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/// Assert `piece` holds only whole records: it starts a record, ends a
/// line, and alternates header and sequence lines throughout.
pub fn assert_whole_records(piece: &[u8]) {
    assert_eq!(piece.first(), Some(&b'>'), "piece does not start a record");
    assert_eq!(piece.last(), Some(&b'\n'), "piece does not end a line");
    let text = std::str::from_utf8(piece).expect("test pieces are ascii");
    for (i, line) in text.lines().enumerate() {
        if i % 2 == 0 {
            assert!(line.starts_with('>'), "expected header at line {i}");
        } else {
            assert!(!line.starts_with('>'), "expected sequence at line {i}");
        }
    }
}
