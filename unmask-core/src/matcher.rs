//! matcher.rs - Finds needles in cured text and reports them against the original.
//!
//! Needles are expected in canonical form (the form curing produces).
//! Single-needle search is a plain substring scan. Multi-needle search
//! builds a double-array Aho-Corasick automaton over the staged needles,
//! then resolves overlaps left to right, preferring the needle listed first
//! when several start at the same offset.
//!
//! Every reported [`Match`] is a byte range of the original input, never
//! of the cured text.
//!
//! License: MIT OR APACHE 2.0

use daachorse::DoubleArrayAhoCorasick;
use log::debug;
use std::collections::HashSet;
use std::ops::Range;

use crate::cured_text::CuredText;
use crate::errors::UnmaskError;
use crate::text_match::{log_match_debug, loggable, Match};

/// Finds every non-overlapping occurrence of `needle`, left to right.
///
/// An empty needle matches nothing.
pub fn find(cured: &CuredText, needle: &str) -> Vec<Match> {
    if needle.is_empty() {
        return Vec::new();
    }
    let canonical = cured
        .as_str()
        .match_indices(needle)
        .map(|(start, found)| start..start + found.len());
    let matches = to_original(cured, canonical);
    for m in &matches {
        log_match_debug(module_path!(), needle, m, &cured.original()[m.range()]);
    }
    matches
}

/// Finds occurrences of any of `needles`.
///
/// Scanning left to right, the first needle (in the given order) that
/// starts at the earliest unclaimed position wins, and scanning resumes
/// after it. Empty and duplicate needles are ignored.
///
/// # Errors
///
/// Returns [`UnmaskError::InvalidNeedleSet`] when no non-empty needle is
/// given, and [`UnmaskError::OutOfMemory`] when staging fails.
pub fn find_multiple<I, S>(cured: &CuredText, needles: I) -> Result<Vec<Match>, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let staged = stage_needles(needles)?;
    let patterns: Vec<&str> = staged.iter().map(AsRef::as_ref).collect();

    let automaton = DoubleArrayAhoCorasick::<usize>::new(patterns.iter().copied())
        .map_err(|e| UnmaskError::OutOfMemory(format!("failed to build needle automaton: {}", e)))?;

    let mut candidates: Vec<(usize, usize, usize)> = automaton
        .find_overlapping_iter(cured.as_str())
        .map(|m| (m.start(), m.value(), m.end()))
        .collect();
    candidates.sort_unstable();

    let mut resume = 0;
    let mut canonical = Vec::new();
    for (start, _, end) in candidates {
        if start < resume {
            continue;
        }
        canonical.push(start..end);
        resume = end;
    }

    let matches = to_original(cured, canonical);
    debug!(
        "find_multiple: {} needle(s) produced {} match(es) in '{}'",
        patterns.len(),
        matches.len(),
        loggable(cured.original())
    );
    Ok(matches)
}

/// Copies needles into a deduplicated list, keeping first occurrences.
fn stage_needles<I, S>(needles: I) -> Result<Vec<S>, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needles = needles.into_iter();
    let (hint, _) = needles.size_hint();

    let mut staged: Vec<S> = Vec::new();
    staged
        .try_reserve(hint)
        .map_err(|e| UnmaskError::out_of_memory("needles", e))?;
    let mut seen: HashSet<String> = HashSet::new();
    seen.try_reserve(hint)
        .map_err(|e| UnmaskError::out_of_memory("needle index", e))?;

    for needle in needles {
        let text = needle.as_ref();
        if text.is_empty() || seen.contains(text) {
            continue;
        }
        seen.insert(text.to_owned());
        staged
            .try_reserve(1)
            .map_err(|e| UnmaskError::out_of_memory("needles", e))?;
        staged.push(needle);
    }

    if staged.is_empty() {
        return Err(UnmaskError::InvalidNeedleSet);
    }
    Ok(staged)
}

/// Maps ordered cured ranges to original ranges, coalescing any that
/// overlap once mapped.
fn to_original<I>(cured: &CuredText, canonical: I) -> Vec<Match>
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut matches: Vec<Match> = Vec::new();
    for range in canonical {
        let Some(original) = cured.offset_map().original_range(range) else {
            continue;
        };
        match matches.last_mut() {
            Some(last) if original.start < last.end => last.end = last.end.max(original.end),
            _ => matches.push(Match::from(original)),
        }
    }
    matches
}

/// `true` when the whole cured text equals `other`.
pub fn equals(cured: &CuredText, other: &str) -> bool {
    cured.as_str() == other
}

/// `true` when the cured text starts with `prefix`. An empty prefix always matches.
pub fn starts_with(cured: &CuredText, prefix: &str) -> bool {
    cured.as_str().starts_with(prefix)
}

/// `true` when the cured text ends with `suffix`. An empty suffix always matches.
pub fn ends_with(cured: &CuredText, suffix: &str) -> bool {
    cured.as_str().ends_with(suffix)
}

/// `true` when `needle` occurs in the cured text. An empty needle always matches.
pub fn contains(cured: &CuredText, needle: &str) -> bool {
    cured.as_str().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curer::cure;
    use crate::options::Options;

    fn cured(text: &str) -> CuredText {
        cure(text, Options::default()).unwrap()
    }

    #[test]
    fn test_find_maps_to_original() {
        let text = cured("ｈｅｌｌｏ ｗｏｒｌｄ");
        assert_eq!(find(&text, "world"), vec![Match::new(16, 31)]);
        assert!(find(&text, "").is_empty());
        assert!(find(&text, "xyz").is_empty());
    }

    #[test]
    fn test_find_multiple_prefers_first_listed_needle() {
        let text = cured("abcd");
        assert_eq!(find_multiple(&text, ["ab", "abc"]).unwrap(), vec![Match::new(0, 2)]);
        assert_eq!(find_multiple(&text, ["abc", "ab"]).unwrap(), vec![Match::new(0, 3)]);
    }

    #[test]
    fn test_find_multiple_resumes_after_each_match() {
        let text = cured("abcde");
        let matches = find_multiple(&text, ["bc", "cd", "de"]).unwrap();
        assert_eq!(matches, vec![Match::new(1, 3), Match::new(3, 5)]);
    }

    #[test]
    fn test_find_multiple_rejects_empty_sets() {
        let text = cured("abc");
        let none: [&str; 0] = [];
        assert_eq!(find_multiple(&text, none), Err(UnmaskError::InvalidNeedleSet));
        assert_eq!(find_multiple(&text, ["", ""]), Err(UnmaskError::InvalidNeedleSet));
        assert_eq!(find_multiple(&text, ["", "b"]).unwrap(), vec![Match::new(1, 2)]);
    }

    #[test]
    fn test_duplicate_needles_are_ignored() {
        let text = cured("aXa");
        let needles = vec!["a".to_string(), "a".to_string()];
        assert_eq!(find_multiple(&text, &needles).unwrap(), vec![Match::new(0, 1), Match::new(2, 3)]);
    }

    #[test]
    fn test_matches_inside_one_source_character_coalesce() {
        // "ß" cures to "ss"; both halves map to the same two bytes.
        let text = cured("aßb");
        assert_eq!(text, "assb");
        assert_eq!(find(&text, "s"), vec![Match::new(1, 3)]);
    }

    #[test]
    fn test_predicates() {
        let text = cured("Ｈｅｌｌｏ");
        assert!(equals(&text, "hello"));
        assert!(starts_with(&text, "he"));
        assert!(ends_with(&text, "llo"));
        assert!(contains(&text, "ell"));
        assert!(starts_with(&text, "") && ends_with(&text, "") && contains(&text, ""));
        assert!(!equals(&text, ""));
    }
}
