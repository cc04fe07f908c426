// File: unmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use.
//! Each helper cures the input, and where needed finds and rewrites the
//! needles, without handing the cured handle back to the caller.

use crate::config::CureProfile;
use crate::curer::cure;
use crate::errors::UnmaskError;
use crate::options::Options;

/// Cures `content` and returns only the canonical text.
pub fn headless_cure_string(content: &str, options: Options) -> Result<String, UnmaskError> {
    let cured = cure(content, options)?;
    Ok(cured.as_str().to_owned())
}

/// Cures `content` with a profile's resolved options.
pub fn headless_cure_with_profile(content: &str, profile: &CureProfile) -> Result<String, UnmaskError> {
    headless_cure_string(content, profile.options())
}

/// Censors every occurrence of `needles` in `content`, one `with` per match.
///
/// # Arguments
///
/// * `content` - The original text.
/// * `needles` - Canonical needles, as [`crate::cure`] would produce them.
/// * `with` - The character that stands in for each match.
/// * `options` - Options used to cure `content` before searching.
///
/// Returns the rewritten original, not its cured form.
pub fn headless_censor_string<I, S>(
    content: &str,
    needles: I,
    with: char,
    options: Options,
) -> Result<String, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cured = cure(content, options)?;
    cured.censor_multiple(needles, with)
}

/// Replaces every occurrence of `needles` in `content` with `with`.
///
/// Same contract as [`headless_censor_string`].
pub fn headless_replace_string<I, S>(
    content: &str,
    needles: I,
    with: &str,
    options: Options,
) -> Result<String, UnmaskError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cured = cure(content, options)?;
    cured.replace_multiple(needles, with)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_profile_by_name;

    #[test]
    fn test_headless_cure() {
        assert_eq!(
            headless_cure_string("Ｓｐａｍ Ｆｒｅｅ", Options::default()).unwrap(),
            "spam free"
        );
        assert_eq!(headless_cure_string("", Options::default()), Err(UnmaskError::EmptyInput));
    }

    #[test]
    fn test_headless_cure_with_profile() {
        let strict = load_profile_by_name("strict").unwrap();
        assert_eq!(headless_cure_with_profile("ｈｉ, ｙｏｕ!", &strict).unwrap(), "hi you");
    }

    #[test]
    fn test_headless_censor_and_replace() {
        let input = "buy ｃｈｅａｐ pills";
        assert_eq!(
            headless_censor_string(input, ["cheap"], '*', Options::default()).unwrap(),
            "buy * pills"
        );
        assert_eq!(
            headless_replace_string(input, ["cheap", "pills"], "[x]", Options::default()).unwrap(),
            "buy [x] [x]"
        );
    }

    #[test]
    fn test_headless_without_matches_returns_input() {
        let out = headless_censor_string("nothing here", ["absent"], '*', Options::default()).unwrap();
        assert_eq!(out, "nothing here");
    }

    #[test]
    fn test_headless_rejects_empty_needle_sets() {
        let out = headless_replace_string("text", [""], "x", Options::default());
        assert_eq!(out, Err(UnmaskError::InvalidNeedleSet));
    }
}
