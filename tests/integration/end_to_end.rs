//! Whole-pipeline splits against real files.

use cleave_engine::SplitError;
use cleave_io::IoError;

use cleave_integration_tests::{SplitFixture, assert_whole_records, fasta_input};

#[test]
fn test_split_file_and_reassemble() {
    let fixture = SplitFixture::new(fasta_input(64));
    let report = fixture.split(5, 4096).unwrap();

    let pieces = fixture.read_pieces(5);
    assert_eq!(report.pieces.len(), 5);
    assert_eq!(pieces.concat(), fixture.input_bytes);
    for (summary, piece) in report.pieces.iter().zip(&pieces) {
        assert_eq!(summary.bytes, piece.len() as u64);
        assert!(!piece.is_empty());
    }
}

#[test]
fn test_pieces_hold_whole_records() {
    let fixture = SplitFixture::new(fasta_input(32));
    fixture.split(4, 1024).unwrap();
    for piece in fixture.read_pieces(4) {
        assert_whole_records(&piece);
    }
}

#[test]
fn test_cuts_stay_within_one_record_of_plan() {
    let fixture = SplitFixture::new(fasta_input(200));
    let report = fixture.split(8, 8192).unwrap();

    // Every cut lands at the element boundary nearest its replanned
    // target, so no piece deviates from its plan by more than one record.
    let longest_record = (">record_199\n".len() + 30 + 89 + 1) as u64;
    let mut remaining = fixture.input_bytes.len() as u64;
    for (i, summary) in report.pieces.iter().enumerate() {
        let target = remaining.div_ceil(8 - i as u64);
        if i + 1 < report.pieces.len() {
            assert!(
                summary.bytes.abs_diff(target) <= longest_record,
                "piece {i} strayed from its target"
            );
        }
        remaining -= summary.bytes;
    }
    assert_eq!(remaining, 0);
}

#[test]
fn test_piece_files_sort_in_order() {
    // Twelve pieces pad to two digits.
    let fixture = SplitFixture::new(fasta_input(100));
    fixture.split(12, 4096).unwrap();

    let mut names: Vec<String> = std::fs::read_dir(fixture.out_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names.len(), 12);
    assert_eq!(names.first().map(String::as_str), Some("input.fasta.00"));
    assert_eq!(names.last().map(String::as_str), Some("input.fasta.11"));
}

#[test]
fn test_rerun_does_not_clobber() {
    let fixture = SplitFixture::new(fasta_input(20));
    fixture.split(3, 4096).unwrap();

    // Piece files exist now; a second run must refuse to overwrite them.
    let result = fixture.split(3, 4096);
    assert!(matches!(
        result,
        Err(SplitError::Io(IoError::Create { .. }))
    ));
}
