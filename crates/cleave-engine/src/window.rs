//! The sliding window the input streams through.

use cleave_io::{ByteSource, IoError};
use tracing::debug;

/// A bounded window over the unwritten part of the input.
///
/// The window owns a buffer of twice the chunk size. Bytes enter in
/// chunk-sized reads and leave from the front as pieces are written;
/// between the two, the unwritten remainder stays contiguous so boundary
/// searches can treat it as a single slice.
///
/// Reads always land in the upper half of the buffer. Before each read the
/// leftover bytes are slid down to end exactly at the midpoint, making the
/// freshly read chunk their contiguous continuation:
///
/// ```text
/// |----------------+----------------|
/// 0            chunk_size       2 * chunk_size
///      [ leftover ][ next read )
/// ```
///
/// The active range never exceeds twice the chunk size, so a split runs in
/// constant memory no matter how large the input is.
pub struct SlidingWindow {
    buf: Box<[u8]>,
    chunk_size: usize,
    /// Active range is `buf[start..end]`.
    start: usize,
    end: usize,
    /// Input bytes not yet read into the buffer.
    unread: u64,
}

impl SlidingWindow {
    /// Create a window over an input of `total` bytes, reading `chunk_size`
    /// bytes at a time.
    pub fn new(chunk_size: usize, total: u64) -> Self {
        debug_assert!(chunk_size > 0);
        Self {
            buf: vec![0u8; chunk_size * 2].into_boxed_slice(),
            chunk_size,
            start: chunk_size,
            end: chunk_size,
            unread: total,
        }
    }

    /// Bytes read from the input but not yet written out.
    pub fn active(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// True once every input byte has been read into the window.
    pub fn exhausted(&self) -> bool {
        self.unread == 0
    }

    /// True when the upper half is free and the input has bytes left.
    pub fn needs_refill(&self) -> bool {
        self.end == self.chunk_size && self.unread > 0
    }

    /// Read the next chunk into the upper half of the buffer.
    ///
    /// Asks for `chunk_size` bytes, or whatever the input still holds if
    /// that is less. A read that comes back short of the sized input's
    /// promise is an error, not retried.
    pub fn refill<S: ByteSource>(&mut self, source: &mut S) -> Result<(), IoError> {
        debug_assert!(self.needs_refill());
        let want = self.unread.min(self.chunk_size as u64) as usize;
        let got = source.read_chunk(&mut self.buf[self.chunk_size..self.chunk_size + want])?;
        if got != want {
            return Err(IoError::ShortRead {
                expected: want,
                got,
            });
        }
        self.end = self.chunk_size + got;
        self.unread -= got as u64;
        debug!(got, unread = self.unread, "window refilled");
        Ok(())
    }

    /// Drop `n` bytes from the front of the active range.
    pub fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.end - self.start);
        self.start += n;
    }

    /// Restore the layout after a consume.
    ///
    /// A drained window is re-anchored at the midpoint; a remainder living
    /// entirely in the upper half is moved down to end there. Either way
    /// the next refill lands right after the leftover bytes.
    pub fn slide(&mut self) {
        if self.start == self.end {
            self.start = self.chunk_size;
            self.end = self.chunk_size;
        } else if self.start >= self.chunk_size {
            let len = self.end - self.start;
            self.buf
                .copy_within(self.start..self.end, self.chunk_size - len);
            self.start = self.chunk_size - len;
            self.end = self.chunk_size;
        }
        debug_assert!(self.start <= self.chunk_size && self.chunk_size <= self.end);
    }
}
