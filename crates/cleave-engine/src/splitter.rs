//! The split orchestrator.

use cleave_format::RecordFormat;
use cleave_io::{ByteSource, PieceSink, SinkFactory};
use tracing::{debug, info};

use crate::error::SplitError;
use crate::planner::next_piece_target;
use crate::transfer::transfer_len;
use crate::window::SlidingWindow;

/// Hard ceiling on the chunk size. Keeps byte counts addressable as
/// signed 64-bit values even with the doubled window buffer.
pub const MAX_CHUNK_SIZE: u64 = i64::MAX as u64 / 2;

/// Tuning for one split run.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    /// Number of output pieces. At least 2.
    pub pieces: u64,
    /// Bytes per read; the window buffers at most twice this.
    pub chunk_size: usize,
}

/// Size record for one finished piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSummary {
    /// Zero-based piece index.
    pub index: u64,
    /// Final piece size in bytes.
    pub bytes: u64,
}

/// What a completed split produced.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Total input size in bytes.
    pub input_bytes: u64,
    /// One entry per piece, in piece order.
    pub pieces: Vec<PieceSummary>,
}

/// Splits a sized byte stream into element-aligned pieces of near-equal
/// size.
///
/// The splitter never buffers more than twice its configured chunk size.
/// Every piece except the last ends exactly at an element boundary chosen
/// by the [`RecordFormat`]; the last piece takes the remainder.
pub struct Splitter<F: RecordFormat> {
    config: SplitConfig,
    format: F,
}

impl<F: RecordFormat> Splitter<F> {
    /// Validate `config` and build a splitter that recognizes element
    /// boundaries with `format`.
    pub fn new(config: SplitConfig, format: F) -> Result<Self, SplitError> {
        if config.pieces < 2 {
            return Err(SplitError::TooFewPieces { got: config.pieces });
        }
        if config.chunk_size == 0 {
            return Err(SplitError::ChunkSizeZero);
        }
        // The doubled window must stay allocatable, so the cap tightens
        // on targets where usize is narrower than 64 bits.
        let max = MAX_CHUNK_SIZE.min(usize::MAX as u64 / 2);
        if config.chunk_size as u64 > max {
            return Err(SplitError::ChunkSizeTooLarge {
                got: config.chunk_size as u64,
                max,
            });
        }
        Ok(Self { config, format })
    }

    /// Run the split, draining `source` into sinks from `sinks`.
    ///
    /// Pieces are planned, written and finalized strictly in order: piece
    /// `i` is complete before the sink for piece `i + 1` is created. Each
    /// piece's target size is replanned from what is actually left, so
    /// boundary adjustments never pile up in the final piece.
    pub fn split<S, O>(&self, source: &mut S, sinks: &mut O) -> Result<SplitReport, SplitError>
    where
        S: ByteSource,
        O: SinkFactory,
    {
        let total = source.total_size();
        let mut window = SlidingWindow::new(self.config.chunk_size, total);
        let mut remaining = total;
        let mut summaries = Vec::new();

        debug!(
            total,
            pieces = self.config.pieces,
            chunk_size = self.config.chunk_size,
            format = self.format.name(),
            "starting split"
        );

        for index in 0..self.config.pieces {
            let target = next_piece_target(remaining, self.config.pieces - index);
            if target == 0 {
                return Err(SplitError::PiecesExhausted {
                    produced: index,
                    requested: self.config.pieces,
                });
            }

            let mut sink = sinks.create(index)?;
            let last_piece = index == self.config.pieces - 1;
            let mut to_write = target;
            let mut first_block = true;

            while to_write > 0 {
                if window.needs_refill() {
                    window.refill(source)?;
                }

                let emit = transfer_len(
                    &self.format,
                    window.active(),
                    to_write,
                    self.config.chunk_size,
                    last_piece,
                    first_block,
                    window.exhausted(),
                )?;

                if emit > 0 {
                    sink.write(&window.active()[..emit])?;
                }

                if emit == 0 || emit as u64 >= to_write {
                    to_write = 0;
                } else {
                    to_write -= emit as u64;
                }
                remaining -= emit as u64;
                window.consume(emit);
                window.slide();
                first_block = false;
            }

            let bytes = sink.finalize()?;
            info!(
                piece = index + 1,
                pieces = self.config.pieces,
                bytes,
                "piece written"
            );
            summaries.push(PieceSummary { index, bytes });
        }

        debug_assert_eq!(remaining, 0);
        debug_assert!(window.active().is_empty() && window.exhausted());

        info!(
            input_bytes = total,
            pieces = self.config.pieces,
            "split complete"
        );

        Ok(SplitReport {
            input_bytes: total,
            pieces: summaries,
        })
    }
}
