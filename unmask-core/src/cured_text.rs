//! cured_text.rs - The cured form of an input together with everything
//! needed to act on the original.
//!
//! A [`CuredText`] owns the original input, the options it was cured with,
//! the canonical text and the [`OffsetMap`] tying the two together. The
//! canonical text and its map are only ever built together and are never
//! handed out separately, so they cannot drift apart.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::curer::cure;
use crate::errors::UnmaskError;
use crate::matcher;
use crate::mutator;
use crate::offset_map::OffsetMap;
use crate::options::Options;
use crate::text_match::Match;

/// Cured text plus its provenance. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuredText {
    original: String,
    options: Options,
    text: String,
    offsets: Arc<OffsetMap>,
}

impl CuredText {
    pub(crate) fn from_parts(original: String, options: Options, text: String, offsets: OffsetMap) -> Self {
        CuredText {
            original,
            options,
            text,
            offsets: Arc::new(offsets),
        }
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length of the canonical text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The input this text was cured from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Read-only view of how canonical bytes map back to the original.
    pub fn offset_map(&self) -> &OffsetMap {
        &self.offsets
    }

    /// Maps a canonical byte range to the original byte range it came from.
    pub fn original_range(&self, cured: Range<usize>) -> Option<Range<usize>> {
        self.offsets.original_range(cured)
    }

    pub fn into_original(self) -> String {
        self.original
    }

    /// Cures the same original again under different options.
    pub fn recure(&self, options: Options) -> Result<CuredText, UnmaskError> {
        cure(&self.original, options)
    }

    /// Cures the same original again with leetspeak decoding switched on or off.
    pub fn with_leetspeak_disabled(&self, disabled: bool) -> Result<CuredText, UnmaskError> {
        let options = if disabled {
            self.options.disable_leetspeak()
        } else {
            self.options.difference(Options::DISABLE_LEETSPEAK)
        };
        self.recure(options)
    }

    pub fn find(&self, needle: &str) -> Vec<Match> {
        matcher::find(self, needle)
    }

    pub fn find_multiple<I, S>(&self, needles: I) -> Result<Vec<Match>, UnmaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        matcher::find_multiple(self, needles)
    }

    pub fn equals(&self, other: &str) -> bool {
        matcher::equals(self, other)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        matcher::starts_with(self, prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        matcher::ends_with(self, suffix)
    }

    pub fn contains(&self, needle: &str) -> bool {
        matcher::contains(self, needle)
    }

    /// Censors `matches` in the original. The result must be cured again
    /// before it is searched.
    pub fn censor(&self, matches: &[Match], with: char) -> Result<String, UnmaskError> {
        mutator::censor(&self.original, matches, with)
    }

    pub fn censor_multiple<I, S>(&self, needles: I, with: char) -> Result<String, UnmaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        mutator::censor_multiple(self, needles, with)
    }

    /// Replaces `matches` in the original. The result must be cured again
    /// before it is searched.
    pub fn replace(&self, matches: &[Match], with: &str) -> Result<String, UnmaskError> {
        mutator::replace(&self.original, matches, with)
    }

    pub fn replace_multiple<I, S>(&self, needles: I, with: &str) -> Result<String, UnmaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        mutator::replace_multiple(self, needles, with)
    }
}

impl fmt::Display for CuredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CuredText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for CuredText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for CuredText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for CuredText {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl Serialize for CuredText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for CuredText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        cure(&text, Options::default()).map_err(serde::de::Error::custom)
    }
}
