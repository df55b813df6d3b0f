//! The per-iteration transfer decision.

use cleave_format::{BoundarySearch, RecordFormat};

use crate::error::SplitError;

/// How many active bytes to move into the current piece right now.
///
/// `target` is how many more bytes the piece wants and `active` what the
/// window holds. Four cases:
///
/// 1. The piece wants more than the window holds: move up to one chunk and
///    let the caller refill. No boundary decision is due yet.
/// 2. The last piece takes everything that is left, including whatever
///    trails the final element.
/// 3. Otherwise the piece can finish inside the window, so the format is
///    asked for the element boundary nearest the target byte.
/// 4. A missing boundary is survivable only when the window already holds
///    the entire rest of the input, in which case the piece takes it all.
///    Mid-stream it means the chunk size cannot show a whole element.
pub(crate) fn transfer_len<F: RecordFormat>(
    format: &F,
    active: &[u8],
    target: u64,
    chunk_size: usize,
    last_piece: bool,
    first_block: bool,
    end_of_input: bool,
) -> Result<usize, SplitError> {
    debug_assert!(target >= 1);
    let len = active.len();

    if target > len as u64 {
        return Ok(len.min(chunk_size));
    }

    if last_piece {
        // Exact byte accounting: the final target is the final remainder.
        debug_assert_eq!(target, len as u64);
        return Ok(len);
    }

    match format.find_boundary(active, (target - 1) as usize, first_block) {
        BoundarySearch::Found(offset) => Ok(offset + 1),
        BoundarySearch::WindowStart => {
            debug_assert!(!first_block);
            Ok(0)
        }
        BoundarySearch::NotFound if end_of_input => Ok(len),
        BoundarySearch::NotFound => Err(SplitError::NoBoundary { chunk_size }),
    }
}
