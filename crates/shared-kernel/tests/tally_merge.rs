// crates/shared-kernel/tests/tally_merge.rs
use classify_lines_shared_kernel::{Classification, LineTally};

#[test]
fn merge_sums_every_field() {
    let mut total = LineTally::single_file(5, 2, 1, 3);
    total.merge(&LineTally::single_file(1, 1, 0, 4));
    assert_eq!(total.code, 6);
    assert_eq!(total.comment, 3);
    assert_eq!(total.blank, 1);
    assert_eq!(total.string_content, 7);
    assert_eq!(total.files, 2);
}

#[test]
fn record_matches_classification() {
    let mut tally = LineTally::new();
    for c in [
        Classification::Code,
        Classification::Comment,
        Classification::Comment,
        Classification::Blank,
        Classification::StringContent,
    ] {
        tally.record(c);
    }
    assert_eq!(tally.comment, 2);
    assert_eq!(tally.total(), 5);
}

#[test]
fn empty_tally() {
    let tally = LineTally::new();
    assert!(tally.is_empty());
    assert!(!LineTally::single_file(1, 0, 0, 0).is_empty());
}
