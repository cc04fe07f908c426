// unmask-core/tests/matcher_tests.rs
use test_log::test;

use unmask_core::{cure, CuredText, Match, Options, UnmaskError};

const SAMPLE: &str = "vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣";

fn sample() -> CuredText {
    cure(SAMPLE, Options::default()).unwrap()
}

#[test]
fn test_find_reports_original_offsets() {
    let cured = sample();
    let matches = cured.find("funny");
    assert_eq!(matches, vec![Match::new(12, 28)]);
    assert_eq!(matches[0].slice(SAMPLE), Some("𝔽𝕌Ňℕｙ"));
}

#[test]
fn test_find_absorbs_trailing_invisible_characters() {
    let cured = cure("bad\u{200B} word", Options::default()).unwrap();
    assert_eq!(cured.find("bad"), vec![Match::new(0, 6)]);
}

#[test]
fn test_find_multiple_orders_by_position() {
    let cured = sample();
    let matches = cured.find_multiple(["text", "very"]).unwrap();
    assert_eq!(matches, vec![Match::new(0, 11), Match::new(29, 42)]);
}

#[test]
fn test_find_multiple_over_mixed_forms() {
    let cured = cure("ｓｐａｍ and ｓｃａｍ and spam", Options::default()).unwrap();
    let matches = cured.find_multiple(vec!["spam".to_string(), "scam".to_string()]).unwrap();
    assert_eq!(
        matches,
        vec![Match::new(0, 12), Match::new(17, 29), Match::new(34, 38)]
    );
}

#[test]
fn test_find_multiple_rejects_empty_needles() {
    let cured = sample();
    assert_eq!(cured.find_multiple([""]), Err(UnmaskError::InvalidNeedleSet));
    assert_eq!(cured.find_multiple(Vec::<String>::new()), Err(UnmaskError::InvalidNeedleSet));
}

#[test]
fn test_predicates() {
    let cured = sample();
    assert!(cured.equals("very funny text"));
    assert!(cured.starts_with("very"));
    assert!(cured.ends_with("text"));
    assert!(cured.contains("funny"));
    assert!(!cured.contains("sad"));
}

#[test]
fn test_empty_needles_are_vacuously_true() {
    let cured = sample();
    assert!(cured.starts_with(""));
    assert!(cured.ends_with(""));
    assert!(cured.contains(""));
    assert!(cured.find("").is_empty());
}

#[test]
fn test_needles_are_compared_in_canonical_form() {
    let cured = sample();
    // Needles are not cured, so a decorated needle does not match.
    assert!(!cured.contains("ｆｕｎｎｙ"));
    assert!(cured.find("FUNNY").is_empty());
}
