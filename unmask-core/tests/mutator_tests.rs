// unmask-core/tests/mutator_tests.rs
use test_log::test;

use unmask_core::{cure, headless_censor_string, Match, Options, UnmaskError};

#[test]
fn test_censor_then_recure() {
    let cured = cure("vＥⓡ𝔂 𝔽𝕌Ňℕｙ ţ乇𝕏𝓣", Options::default()).unwrap();
    let matches = cured.find("funny");
    let censored = cured.censor(&matches, '*').unwrap();
    assert_eq!(censored, "vＥⓡ𝔂 * ţ乇𝕏𝓣");
    assert_eq!(cure(&censored, Options::default()).unwrap(), "very * text");
}

#[test]
fn test_censor_leetspeak_word() {
    let cured = cure("h3ll0 w0rld", Options::default()).unwrap();
    let censored = cured.censor(&cured.find("world"), '*').unwrap();
    assert_eq!(censored, "h3ll0 *");
    assert_eq!(cure(&censored, Options::default()).unwrap(), "hello *");
}

#[test]
fn test_replace_multiple_keeps_surroundings() {
    let cured = cure("ｓｐａｍ and ｓｃａｍ and spam", Options::default()).unwrap();
    let replaced = cured.replace_multiple(["spam", "scam"], "[removed]").unwrap();
    assert_eq!(replaced, "[removed] and [removed] and [removed]");
}

#[test]
fn test_censor_multiple() {
    let cured = cure("ｂａｄ and w0rse", Options::default()).unwrap();
    assert_eq!(cured, "bad and worse");
    let censored = cured.censor_multiple(["bad", "worse"], '#').unwrap();
    assert_eq!(censored, "# and #");
}

#[test]
fn test_replace_removes_attached_invisibles() {
    let cured = cure("bad\u{200B}\u{200D} word", Options::default()).unwrap();
    let replaced = cured.replace(&cured.find("bad"), "").unwrap();
    assert_eq!(replaced, " word");
}

#[test]
fn test_mutation_leaves_handle_untouched() {
    let cured = cure("ｂａｄ", Options::default()).unwrap();
    let censored = cured.censor(&cured.find("bad"), '*').unwrap();
    assert_eq!(censored, "*");
    assert_eq!(cured.original(), "ｂａｄ");
    assert_eq!(cured, "bad");
}

#[test]
fn test_invalid_matches_are_rejected() {
    let cured = cure("ｂａｄ", Options::default()).unwrap();
    assert!(matches!(
        cured.censor(&[Match::new(0, 100)], '*'),
        Err(UnmaskError::MalformedEncoding(_))
    ));
    assert!(matches!(
        cured.replace(&[Match::new(1, 3)], "x"),
        Err(UnmaskError::MalformedEncoding(_))
    ));
}

#[test]
fn test_headless_censor() {
    let out = headless_censor_string("ｂａｄ and ｂａｄ", ["bad"], '\u{2588}', Options::default()).unwrap();
    assert_eq!(out, "\u{2588} and \u{2588}");
}
