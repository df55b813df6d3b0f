//! Splits that must fail, and what they leave behind.

use cleave_engine::SplitError;

use cleave_integration_tests::SplitFixture;

#[test]
fn test_too_many_pieces_for_input() {
    let fixture = SplitFixture::new(b">a\nACGT\n>b\nACGT\n".to_vec());
    let result = fixture.split(5, 4096);
    assert!(matches!(
        result,
        Err(SplitError::PiecesExhausted {
            produced: 2,
            requested: 5
        })
    ));

    // The pieces written before the failure stay on disk.
    assert!(fixture.out_dir().join("input.fasta.0").exists());
    assert!(fixture.out_dir().join("input.fasta.1").exists());
    assert!(!fixture.out_dir().join("input.fasta.2").exists());
}

#[test]
fn test_empty_file_produces_nothing() {
    let fixture = SplitFixture::new(Vec::new());
    let result = fixture.split(2, 4096);
    assert!(matches!(
        result,
        Err(SplitError::PiecesExhausted {
            produced: 0,
            requested: 2
        })
    ));
}

#[test]
fn test_record_larger_than_window_mid_stream() {
    let mut input = Vec::from(&b">giant\n"[..]);
    input.extend_from_slice(&vec![b'A'; 8192]);
    input.extend_from_slice(b"\n>tail\nTT\n");

    let fixture = SplitFixture::new(input);
    let result = fixture.split(2, 256);
    assert!(matches!(
        result,
        Err(SplitError::NoBoundary { chunk_size: 256 })
    ));
}
