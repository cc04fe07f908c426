//! mutator.rs - Rewrites the original input at matched ranges.
//!
//! Matches are validated against the original before anything is built:
//! they must lie inside it, start and end on character boundaries and not
//! overlap. The output is assembled in one left-to-right pass, so later
//! matches are never shifted by earlier replacements.
//!
//! License: MIT OR APACHE 2.0

use crate::cured_text::CuredText;
use crate::errors::UnmaskError;
use crate::matcher::find_multiple;
use crate::text_match::{log_mutation_debug, Match};

/// Replaces each match with a single `with`, however many bytes or
/// characters the match spans.
///
/// # Errors
///
/// Returns [`UnmaskError::MalformedEncoding`] for a match that is out of
/// bounds, splits a character or overlaps another match, and
/// [`UnmaskError::OutOfMemory`] when the output cannot be reserved.
pub fn censor(original: &str, matches: &[Match], with: char) -> Result<String, UnmaskError> {
    let mut buffer = [0u8; 4];
    replace(original, matches, with.encode_utf8(&mut buffer))
}

/// Replaces each match with `with`. An empty `with` deletes the match.
///
/// # Errors
///
/// Same as [`censor`].
pub fn replace(original: &str, matches: &[Match], with: &str) -> Result<String, UnmaskError> {
    let ordered = validate(original, matches)?;
    let mut out = reserve_output(original, &ordered, with.len())?;

    let mut cursor = 0;
    for m in &ordered {
        out.push_str(&original[cursor..m.start]);
        out.push_str(with);
        cursor = m.end;
    }
    out.push_str(&original[cursor..]);

    log_mutation_debug(module_path!(), original, with, ordered.len());
    Ok(out)
}

/// Finds `needles` in `cured` and censors them in its original.
///
/// # Errors
///
/// Propagates [`find_multiple`] and [`censor`] errors.
pub fn censor_multiple<I, S>(cured: &CuredText, needles: I, with: char) -> Result<String, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matches = find_multiple(cured, needles)?;
    censor(cured.original(), &matches, with)
}

/// Finds `needles` in `cured` and replaces them in its original.
///
/// # Errors
///
/// Propagates [`find_multiple`] and [`replace`] errors.
pub fn replace_multiple<I, S>(cured: &CuredText, needles: I, with: &str) -> Result<String, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let matches = find_multiple(cured, needles)?;
    replace(cured.original(), &matches, with)
}

/// Sorts matches and checks them against `original`.
fn validate(original: &str, matches: &[Match]) -> Result<Vec<Match>, UnmaskError> {
    let mut ordered = Vec::new();
    ordered
        .try_reserve(matches.len())
        .map_err(|e| UnmaskError::out_of_memory("matches", e))?;
    ordered.extend_from_slice(matches);
    ordered.sort_unstable();

    let mut previous_end = 0;
    for m in &ordered {
        if m.start > m.end || m.end > original.len() {
            return Err(UnmaskError::MalformedEncoding(format!(
                "match {}..{} lies outside the {}-byte input",
                m.start,
                m.end,
                original.len()
            )));
        }
        if !original.is_char_boundary(m.start) || !original.is_char_boundary(m.end) {
            return Err(UnmaskError::MalformedEncoding(format!(
                "match {}..{} splits a multi-byte character",
                m.start, m.end
            )));
        }
        if m.start < previous_end {
            return Err(UnmaskError::MalformedEncoding(format!(
                "match {}..{} overlaps a match ending at {}",
                m.start, m.end, previous_end
            )));
        }
        previous_end = m.end;
    }
    Ok(ordered)
}

/// Reserves room for the rewritten input up front.
fn reserve_output(original: &str, ordered: &[Match], replacement_len: usize) -> Result<String, UnmaskError> {
    let capacity = ordered.iter().fold(original.len(), |len, m| {
        len.saturating_sub(m.len()).saturating_add(replacement_len)
    });
    let mut out = String::new();
    out.try_reserve(capacity)
        .map_err(|e| UnmaskError::out_of_memory("output", e))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_censor_collapses_each_match() {
        let out = censor("héllo world", &[Match::new(0, 6)], '*').unwrap();
        assert_eq!(out, "* world");
        let out = censor("ｂａｄ and ｂａｄ", &[Match::new(0, 9), Match::new(14, 23)], '\u{2588}').unwrap();
        assert_eq!(out, "\u{2588} and \u{2588}");
    }

    #[test]
    fn test_replace_handles_unsorted_matches() {
        let out = replace("one two three", &[Match::new(8, 13), Match::new(0, 3)], "#").unwrap();
        assert_eq!(out, "# two #");
    }

    #[test]
    fn test_replace_with_empty_deletes() {
        assert_eq!(replace("abcdef", &[Match::new(2, 4)], "").unwrap(), "abef");
    }

    #[test]
    fn test_no_matches_returns_original() {
        assert_eq!(censor("untouched", &[], '*').unwrap(), "untouched");
        assert_eq!(replace("untouched", &[], "x").unwrap(), "untouched");
    }

    #[test]
    fn test_invalid_matches_are_rejected() {
        let out_of_bounds = replace("abc", &[Match::new(1, 9)], "x");
        assert!(matches!(out_of_bounds, Err(UnmaskError::MalformedEncoding(_))));

        let split = censor("é", &[Match::new(0, 1)], '*');
        assert!(matches!(split, Err(UnmaskError::MalformedEncoding(_))));

        let overlapping = replace("abcdef", &[Match::new(0, 3), Match::new(2, 5)], "x");
        assert!(matches!(overlapping, Err(UnmaskError::MalformedEncoding(_))));

        let inverted = replace("abcdef", &[Match::new(4, 2)], "x");
        assert!(matches!(inverted, Err(UnmaskError::MalformedEncoding(_))));
    }

    #[test]
    fn test_adjacent_matches_are_fine() {
        let out = replace("abcdef", &[Match::new(0, 2), Match::new(2, 4)], "-").unwrap();
        assert_eq!(out, "--ef");
    }
}
