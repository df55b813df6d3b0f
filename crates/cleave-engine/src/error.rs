//! Error types for the split engine.

/// Errors that can occur while planning or performing a split.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    /// Source or sink failure.
    #[error("io error: {0}")]
    Io(#[from] cleave_io::IoError),

    /// A piece boundary was needed but no element boundary was visible
    /// anywhere in the buffered window.
    #[error("no element boundary within a {chunk_size} byte window (is the chunk size too small?)")]
    NoBoundary {
        /// The configured chunk size; the window shows at most twice this.
        chunk_size: usize,
    },

    /// The input ran out of elements before the requested piece count was
    /// reached.
    #[error("input exhausted after {produced} of {requested} pieces")]
    PiecesExhausted {
        /// Pieces fully written before the input ran dry.
        produced: u64,
        /// Pieces asked for.
        requested: u64,
    },

    /// Fewer than two pieces were requested.
    #[error("at least 2 pieces required, got {got}")]
    TooFewPieces { got: u64 },

    /// A zero chunk size was requested.
    #[error("chunk size must be at least 1 byte")]
    ChunkSizeZero,

    /// The requested chunk size cannot be buffered.
    #[error("chunk size {got} exceeds the maximum of {max} bytes")]
    ChunkSizeTooLarge {
        /// Requested chunk size.
        got: u64,
        /// Largest supported chunk size.
        max: u64,
    },
}
