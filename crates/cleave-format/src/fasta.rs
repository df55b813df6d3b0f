//! Boundary recognition for minimal two-line FASTA records.

use crate::boundary::{BoundarySearch, RecordFormat};

/// Byte that opens every record header line.
const RECORD_MARKER: u8 = b'>';

/// Line separator; every record contains exactly two.
const SEPARATOR: u8 = b'\n';

/// The minimal FASTA format:
///
/// ```text
/// >IDENTIFIER
/// SEQUENCE
/// ```
///
/// One record is one element: a header line opened by `>` and a single
/// sequence line, each terminated by a newline. A record boundary is the
/// newline right before the next `>` (or before end of input).
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaFormat;

impl RecordFormat for FastaFormat {
    fn name(&self) -> &'static str {
        "FASTA"
    }

    /// Scans outward from `projected` one byte per step in both directions,
    /// examining the left candidate before the right one at each distance.
    /// The first record marker encountered is the nearest boundary.
    ///
    /// Checking left first biases ties toward smaller pieces. The final
    /// piece receives whatever is left over and tends to run small, so
    /// keeping earlier pieces lean moves it toward the mean size rather
    /// than away from it.
    fn find_boundary(&self, window: &[u8], projected: usize, first_block: bool) -> BoundarySearch {
        debug_assert!(projected < window.len());

        let len = window.len();
        // Steps available before each scan direction runs off the window.
        let left_reach = projected + 1;
        let right_reach = len - projected;
        let mut separators = 0u32;

        for i in 0..left_reach.max(right_reach) {
            let left = (i < left_reach).then(|| window[projected - i]);
            let right = (i < right_reach).then(|| window[projected + i]);

            if left == Some(RECORD_MARKER) {
                let marker = projected - i;
                if marker > 0 {
                    // Cut just before the marker: it opens the next element.
                    return BoundarySearch::Found(marker - 1);
                }
                if !first_block {
                    return BoundarySearch::WindowStart;
                }
                // A marker at offset zero would finish the piece empty. A
                // brand-new piece must take at least one whole element, so
                // keep scanning to the right.
            }

            // At distance zero the byte under `projected` was already
            // examined as the left candidate.
            if right == Some(RECORD_MARKER) && i != 0 {
                return BoundarySearch::Found(projected + i - 1);
            }

            if left == Some(SEPARATOR) {
                separators += 1;
            }
            if right == Some(SEPARATOR) && i != 0 {
                separators += 1;
            }

            // Two separators make one whole record. Once the scan has
            // reached the window's upper edge and that edge is itself a
            // separator, everything up to it is whole records.
            if separators == 2 && i + 1 >= right_reach && window[len - 1] == SEPARATOR {
                return BoundarySearch::Found(len - 1);
            }

            debug_assert!(separators <= 2, "malformed record around {projected}");
        }

        BoundarySearch::NotFound
    }
}
