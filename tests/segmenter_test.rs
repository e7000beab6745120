//! Segmentation cases and properties.

use mmnames_rs::segmenter::segment;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TestCase {
    id: usize,
    input: String,
    description: String,
    expected: Vec<String>,
}

fn load_cases() -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/segmentation_cases.json");
    let json = std::fs::read_to_string(&path).expect("Failed to read test cases");
    serde_json::from_str(&json).expect("Failed to parse test cases")
}

#[test]
fn test_all_cases_match_expected() {
    let test_cases = load_cases();
    let mut failures = Vec::new();

    for tc in &test_cases {
        let result = segment(&tc.input);
        if result != tc.expected {
            failures.push(format!(
                "[{}] {}\n  Input: {}\n  Expected: {:?}\n  Actual: {:?}",
                tc.id, tc.description, tc.input, tc.expected, result
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{}/{} test cases failed:\n{}",
            failures.len(),
            test_cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_resegmenting_is_idempotent() {
    for tc in load_cases() {
        let first = segment(&tc.input);
        let second = segment(&first.concat());
        assert_eq!(first, second, "[{}] {}", tc.id, tc.description);
    }
}

#[test]
fn test_whitespace_insensitive() {
    assert_eq!(segment("နိုင် ဝင်း\tထွန်း\n"), segment("နိုင်ဝင်းထွန်း"));
    assert_eq!(segment(" သင် ္ဘော "), vec!["သင်္ဘော"]);
}

#[test]
fn test_stacked_cluster_is_one_syllable() {
    assert_eq!(segment("သင်္ဘော"), vec!["သင်္ဘော"]);
}

#[test]
fn test_no_empty_syllables() {
    for tc in load_cases() {
        assert!(segment(&tc.input).iter().all(|s| !s.is_empty()));
    }
    assert!(segment("").is_empty());
}
