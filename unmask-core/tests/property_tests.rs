// unmask-core/tests/property_tests.rs
//
// Properties that must hold for any input. Leetspeak reads its neighbours,
// so the round-trip and censor checks run with it disabled, where every
// character cures on its own.
use proptest::prelude::*;
use proptest::sample::Index;

use unmask_core::{cure, cure_char, cure_char_string, CuredText, Options};

/// Characters that exercise every kind of translation step.
const POOL: &[char] = &[
    'a', 'b', 'e', 's', 'x', 'A', ' ', '\t', '3', '0', '@', '|', '-', '*', 'ｓ', 'Ａ', 'ß', 'æ', 'ﬃ', 'é',
    '\u{0301}', '\u{064B}', '\u{200B}', '\u{202E}', '𝔰', 'ⓢ', 'Σ', 'ж', '🄰', '🎉', '中', 'ꓢ', '੦',
];

fn decorated_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(POOL), 1..48).prop_map(|chars| chars.into_iter().collect())
}

fn any_options() -> impl Strategy<Value = Options> {
    (0u32..(1 << 26)).prop_map(|bits| Options::from_bits(bits).unwrap())
}

fn context_free_options() -> impl Strategy<Value = Options> {
    any_options().prop_map(Options::disable_leetspeak)
}

/// Picks a needle of one to three characters out of the cured text.
fn needle_from(cured: &CuredText, at: Index, len: usize) -> Option<String> {
    let chars: Vec<char> = cured.as_str().chars().collect();
    if chars.is_empty() {
        return None;
    }
    let start = at.index(chars.len());
    Some(chars[start..].iter().take(len).collect())
}

fn assert_partition(input: &str, cured: &CuredText) -> Result<(), TestCaseError> {
    let mut original_cursor = 0;
    let mut cured_cursor = 0;
    for span in cured.offset_map().spans() {
        prop_assert_eq!(span.original.start, original_cursor);
        prop_assert_eq!(span.cured.start, cured_cursor);
        prop_assert!(span.original.end > span.original.start);
        prop_assert!(input.is_char_boundary(span.original.end));
        original_cursor = span.original.end;
        cured_cursor = span.cured.end;
    }
    prop_assert_eq!(original_cursor, input.len());
    prop_assert_eq!(cured_cursor, cured.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn cure_char_handles_any_character(c in any::<char>(), options in any_options()) {
        let cured = cure_char(c, options);
        if options.contains(Options::ASCII_ONLY) {
            prop_assert!(cured.to_string().is_ascii());
        }
    }

    #[test]
    fn spans_partition_printable_input(input in "\\PC+", options in any_options()) {
        let cured = cure(&input, options).unwrap();
        assert_partition(&input, &cured)?;
    }

    #[test]
    fn spans_partition_decorated_input(input in decorated_text(), options in any_options()) {
        let cured = cure(&input, options).unwrap();
        assert_partition(&input, &cured)?;
    }

    #[test]
    fn find_multiple_is_ascending_and_disjoint(
        input in decorated_text(),
        options in any_options(),
        needles in prop::collection::vec("[abesx ]{1,3}", 1..4),
    ) {
        let cured = cure(&input, options).unwrap();
        let matches = cured.find_multiple(&needles).unwrap();
        for m in &matches {
            prop_assert!(m.start < m.end);
            prop_assert!(m.slice(&input).is_some());
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn matched_original_cures_to_the_needle(
        input in decorated_text(),
        options in context_free_options(),
        at in any::<Index>(),
        len in 1usize..4,
    ) {
        let cured = cure(&input, options).unwrap();
        let Some(needle) = needle_from(&cured, at, len) else {
            return Ok(());
        };
        let matches = cured.find(&needle);
        prop_assert!(!matches.is_empty());
        for m in matches {
            let slice = m.slice(&input).unwrap();
            let recured = cure(slice, options).unwrap();
            prop_assert!(recured.contains(&needle), "{:?} cured to {:?}, not containing {:?}", slice, recured, needle);
        }
    }

    #[test]
    fn censored_original_cures_to_censored_text(
        input in decorated_text(),
        options in context_free_options(),
        at in any::<Index>(),
        len in 1usize..4,
    ) {
        let cured = cure(&input, options).unwrap();
        let Some(needle) = needle_from(&cured, at, len) else {
            return Ok(());
        };
        let matches = cured.find(&needle);
        let censored = cured.censor(&matches, '*').unwrap();

        let star = cure_char_string('*', options);
        let mut expected = String::new();
        for span in cured.offset_map().spans() {
            match matches.iter().find(|m| m.start <= span.original.start && span.original.end <= m.end) {
                Some(m) if m.start == span.original.start => expected.push_str(&star),
                Some(_) => {}
                None => expected.push_str(&cured.as_str()[span.cured.clone()]),
            }
        }

        let recured = cure(&censored, options).unwrap();
        prop_assert_eq!(recured.as_str(), expected.as_str());
    }
}

#[test]
fn censoring_whole_leetspeak_words_is_stable() {
    let cured = cure("h3ll0 w0rld", Options::default()).unwrap();
    let censored = cured.censor_multiple(["world"], '*').unwrap();
    assert_eq!(censored, "h3ll0 *");
    assert_eq!(cure(&censored, Options::default()).unwrap(), "hello *");
}

#[test]
fn censoring_part_of_a_leetspeak_word_changes_its_neighbours() {
    // `3` only reads as `e` next to a letter. Once `h` is censored it has
    // no letter beside it and cures as a digit again.
    let cured = cure("h3", Options::default()).unwrap();
    assert_eq!(cured, "he");
    let censored = cured.censor(&cured.find("h"), '*').unwrap();
    assert_eq!(censored, "*3");
    assert_eq!(cure(&censored, Options::default()).unwrap(), "*3");
}
