//! Element-aware streaming splitter.
//!
//! Divides a sized byte stream into a requested number of near-equal
//! pieces without ever cutting an element in half. The input streams
//! through a bounded window, so memory use is independent of input size.
//!
//! - [`Splitter`] — plans and drives a whole split run.
//! - [`SlidingWindow`] — the bounded buffer the input streams through.
//! - [`next_piece_target`] — the even-share size plan for the next piece.

pub mod error;
pub mod planner;
pub mod splitter;
pub mod window;

mod transfer;

pub use error::SplitError;
pub use planner::next_piece_target;
pub use splitter::{MAX_CHUNK_SIZE, PieceSummary, SplitConfig, SplitReport, Splitter};
pub use window::SlidingWindow;

#[cfg(test)]
mod tests;
