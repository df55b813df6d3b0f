//! The seam between the split engine and file formats.

/// Outcome of a boundary search inside a window of buffered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySearch {
    /// The last byte of an element sits at this window offset. Cutting
    /// after it leaves whole elements on both sides.
    Found(usize),
    /// The window begins exactly on an element boundary: the piece being
    /// written already ends on a whole element and can be finished without
    /// taking any bytes from the window.
    ///
    /// Never produced for a search with `first_block` set, since a
    /// brand-new piece must not be finished empty.
    WindowStart,
    /// No element boundary is visible anywhere in the window.
    NotFound,
}

/// A file format made of contiguous elements that must never be split
/// across output pieces.
///
/// The engine is format-agnostic: everything it knows about the shape of
/// the input goes through [`find_boundary`]. Supporting a new element
/// format means implementing this trait, nothing else.
///
/// [`find_boundary`]: RecordFormat::find_boundary
pub trait RecordFormat {
    /// Short format name for diagnostics and logs.
    fn name(&self) -> &'static str;

    /// Find the element boundary nearest to `projected` inside `window`.
    ///
    /// `window` holds every buffered byte not yet written out, and
    /// `projected` is the offset of the byte the caller would like to be
    /// the last byte of the current piece. `first_block` is true while the
    /// current piece is still empty.
    ///
    /// Implementations must be pure: no allocation, no I/O, and the same
    /// arguments always produce the same answer. When two boundaries are
    /// equally near, which one wins is the implementation's policy, not
    /// part of this contract.
    fn find_boundary(&self, window: &[u8], projected: usize, first_block: bool) -> BoundarySearch;
}
