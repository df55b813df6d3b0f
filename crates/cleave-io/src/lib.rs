//! Byte sources and piece sinks for the split engine.
//!
//! The engine reads from a [`ByteSource`] and writes each output piece to
//! a [`PieceSink`] obtained from a [`SinkFactory`]. File-backed
//! implementations serve the CLI; in-memory ones serve tests and
//! benchmarks.

mod error;
mod file;
mod memory;
mod traits;

pub use error::IoError;
pub use file::{FileSink, FileSinkFactory, FileSource};
pub use memory::{MemorySink, MemorySinkFactory, MemorySource};
pub use traits::{ByteSource, PieceSink, SinkFactory};
