//! Piece size planning.

/// Target size for the next piece: an even share of what is left.
///
/// Recomputed before every piece from the bytes and pieces still to go, so
/// the boundary adjustments of earlier pieces are spread across the later
/// ones instead of accumulating into the last.
pub fn next_piece_target(remaining_bytes: u64, remaining_pieces: u64) -> u64 {
    debug_assert!(remaining_pieces > 0);
    remaining_bytes.div_ceil(remaining_pieces)
}
