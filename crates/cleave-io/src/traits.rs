//! Capabilities the split engine requires from its surroundings.

use crate::error::IoError;

/// A finite input whose total size is known before reading starts.
pub trait ByteSource {
    /// Total number of bytes the source will yield.
    fn total_size(&self) -> u64;

    /// Read bytes into `buf`, returning how many were read.
    ///
    /// One call issues at most one request to the backend; the caller
    /// decides whether the returned count is acceptable. Zero means the
    /// source is exhausted.
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, IoError>;
}

/// One output piece being written, front to back.
pub trait PieceSink {
    /// Append `bytes` to the piece.
    fn write(&mut self, bytes: &[u8]) -> Result<(), IoError>;

    /// Close the piece and return its final size in bytes.
    ///
    /// For durable sinks this is the point where data reaches stable
    /// storage.
    fn finalize(self) -> Result<u64, IoError>;
}

/// Produces the sink for each output piece, called in piece order.
pub trait SinkFactory {
    type Sink: PieceSink;

    /// Open the sink for the zero-based piece `index`.
    fn create(&mut self, index: u64) -> Result<Self::Sink, IoError>;
}
