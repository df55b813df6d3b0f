//! In-memory source and sinks, for tests and benchmarks.

use std::sync::{Arc, Mutex};

use crate::error::IoError;
use crate::traits::{ByteSource, PieceSink, SinkFactory};

/// Serves input bytes from a buffer.
#[derive(Debug)]
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }
}

impl ByteSource for MemorySource {
    fn total_size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, IoError> {
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Collects finished pieces into a shared vector, in piece order.
#[derive(Debug, Default)]
pub struct MemorySinkFactory {
    pieces: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySinkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the finished pieces. Index `i` holds piece `i` once that
    /// piece has been finalized.
    pub fn pieces(&self) -> Arc<Mutex<Vec<Vec<u8>>>> {
        Arc::clone(&self.pieces)
    }
}

impl SinkFactory for MemorySinkFactory {
    type Sink = MemorySink;

    fn create(&mut self, index: u64) -> Result<MemorySink, IoError> {
        // Pieces are created and finalized strictly in order.
        debug_assert_eq!(index as usize, self.pieces.lock().expect("lock poisoned").len());
        Ok(MemorySink {
            buf: Vec::new(),
            pieces: Arc::clone(&self.pieces),
        })
    }
}

/// An in-memory piece being written.
#[derive(Debug)]
pub struct MemorySink {
    buf: Vec<u8>,
    pieces: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl PieceSink for MemorySink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), IoError> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn finalize(self) -> Result<u64, IoError> {
        let size = self.buf.len() as u64;
        self.pieces.lock().expect("lock poisoned").push(self.buf);
        Ok(size)
    }
}
