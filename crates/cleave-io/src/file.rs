//! File-backed source and sinks.
//!
//! Pieces are written as numbered siblings of each other:
//! `{out_dir}/{base}.{index}`, with the index zero-padded just wide
//! enough for the requested piece count so names sort in piece order.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::IoError;
use crate::traits::{ByteSource, PieceSink, SinkFactory};

/// Reads input bytes from a regular file.
#[derive(Debug)]
pub struct FileSource {
    file: File,
    size: u64,
}

impl FileSource {
    /// Open `path` for reading and record its current size.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

impl ByteSource for FileSource {
    fn total_size(&self) -> u64 {
        self.size
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, IoError> {
        Ok(self.file.read(buf)?)
    }
}

/// A piece file being written.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    written: u64,
    sync: bool,
}

impl PieceSink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), IoError> {
        let got = self.file.write(bytes)?;
        if got != bytes.len() {
            return Err(IoError::ShortWrite {
                expected: bytes.len(),
                got,
            });
        }
        self.written += bytes.len() as u64;
        Ok(())
    }

    fn finalize(self) -> Result<u64, IoError> {
        if self.sync {
            self.file.sync_all()?;
        }
        debug!(path = %self.path.display(), size = self.written, "piece file closed");
        Ok(self.written)
    }
}

/// Creates numbered piece files under an output directory.
///
/// Refuses to overwrite: creating a piece whose file already exists is an
/// error, so a rerun never clobbers earlier output.
#[derive(Debug)]
pub struct FileSinkFactory {
    dir: PathBuf,
    base: String,
    width: usize,
    sync: bool,
}

impl FileSinkFactory {
    /// Create a factory that writes `pieces` files named `{base}.{index}`
    /// under `dir`, creating the directory if needed.
    ///
    /// With `sync` set, every piece is fsynced before it is reported
    /// written.
    pub fn new(
        dir: impl AsRef<Path>,
        base: impl Into<String>,
        pieces: u64,
        sync: bool,
    ) -> Result<Self, IoError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            base: base.into(),
            width: decimal_width(pieces.saturating_sub(1)),
            sync,
        })
    }
}

impl SinkFactory for FileSinkFactory {
    type Sink = FileSink;

    fn create(&mut self, index: u64) -> Result<FileSink, IoError> {
        let width = self.width;
        let path = self.dir.join(format!("{}.{:0width$}", self.base, index));
        let file = File::create_new(&path).map_err(|source| IoError::Create {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "piece file created");
        Ok(FileSink {
            file,
            path,
            written: 0,
            sync: self.sync,
        })
    }
}

/// Number of decimal digits needed to print `n`.
fn decimal_width(mut n: u64) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
