//! Pluggable element-format recognition for the split engine.
//!
//! This crate provides:
//! - [`RecordFormat`] — the capability a file format implements so the
//!   engine can find element boundaries near a projected cut point.
//! - [`BoundarySearch`] — the outcome of one boundary search.
//! - [`FastaFormat`] — the reference implementation for minimal two-line
//!   FASTA records.

mod boundary;
mod fasta;

pub use boundary::{BoundarySearch, RecordFormat};
pub use fasta::FastaFormat;
