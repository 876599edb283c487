// crates/shared-kernel/tests/serde_roundtrip.rs
use classify_lines_shared_kernel::{Classification, LineTally, ScanDiagnostic};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    classification: Classification,
    tally: LineTally,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        classification: Classification::StringContent,
        tally: LineTally::single_file(12, 4, 2, 7),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn classification_uses_snake_case_tags() {
    let json = serde_json::to_string(&Classification::StringContent).expect("serializes");
    assert_eq!(json, "\"string_content\"");
}

#[test]
fn diagnostic_roundtrip() {
    let original = ScanDiagnostic::UnterminatedHeredoc {
        delimiter: "SQL".to_string(),
        opened_at: 37,
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert!(json.contains("unterminated_heredoc"));
    let decoded: ScanDiagnostic = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
