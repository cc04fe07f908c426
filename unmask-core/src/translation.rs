//! translation.rs - The outcome of curing a single character.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// What one source character (or leetspeak cluster) cures to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Translation {
    /// A single character.
    Character(char),
    /// A multi-character sequence, such as `"ae"` for `æ`.
    Sequence(Cow<'static, str>),
    /// Nothing: the source is dropped.
    None,
}

impl Translation {
    pub(crate) fn sequence(text: &'static str) -> Self {
        Translation::Sequence(Cow::Borrowed(text))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Translation::None)
    }

    /// Length of the translation in UTF-8 bytes.
    pub fn len(&self) -> usize {
        match self {
            Translation::Character(ch) => ch.len_utf8(),
            Translation::Sequence(text) => text.len(),
            Translation::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last character of the translation, if any.
    pub fn last_char(&self) -> Option<char> {
        match self {
            Translation::Character(ch) => Some(*ch),
            Translation::Sequence(text) => text.chars().next_back(),
            Translation::None => None,
        }
    }

    /// Applies a case mapping per character, keeping the first character a
    /// mapping produces so every character maps to exactly one.
    fn map_case(self, map: impl Fn(char) -> char) -> Self {
        match self {
            Translation::Character(ch) => Translation::Character(map(ch)),
            Translation::Sequence(text) => {
                if text.chars().all(|ch| map(ch) == ch) {
                    Translation::Sequence(text)
                } else {
                    Translation::Sequence(Cow::Owned(text.chars().map(map).collect()))
                }
            }
            Translation::None => Translation::None,
        }
    }

    #[must_use]
    pub fn into_lowercase(self) -> Self {
        self.map_case(|ch| ch.to_lowercase().next().unwrap_or(ch))
    }

    #[must_use]
    pub fn into_uppercase(self) -> Self {
        self.map_case(|ch| ch.to_uppercase().next().unwrap_or(ch))
    }

    /// Whether every character satisfies `predicate`. `None` passes trivially.
    pub(crate) fn all(&self, predicate: impl Fn(char) -> bool) -> bool {
        match self {
            Translation::Character(ch) => predicate(*ch),
            Translation::Sequence(text) => text.chars().all(predicate),
            Translation::None => true,
        }
    }

    /// Appends the translation to `out`.
    pub(crate) fn push_into(&self, out: &mut String) {
        match self {
            Translation::Character(ch) => out.push(*ch),
            Translation::Sequence(text) => out.push_str(text),
            Translation::None => {}
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Character(ch) => write!(f, "{}", ch),
            Translation::Sequence(text) => f.write_str(text),
            Translation::None => Ok(()),
        }
    }
}

impl PartialEq<char> for Translation {
    fn eq(&self, other: &char) -> bool {
        matches!(self, Translation::Character(ch) if ch == other)
    }
}

impl PartialEq<str> for Translation {
    fn eq(&self, other: &str) -> bool {
        match self {
            Translation::Character(ch) => {
                let mut chars = other.chars();
                chars.next() == Some(*ch) && chars.next().is_none()
            }
            Translation::Sequence(text) => text == other,
            Translation::None => other.is_empty(),
        }
    }
}

impl PartialEq<&str> for Translation {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<Translation> for String {
    fn from(translation: Translation) -> String {
        translation.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compares_against_text() {
        assert_eq!(Translation::Character('e'), "e");
        assert_eq!(Translation::sequence("ae"), "ae");
        assert_eq!(Translation::None, "");
        assert_ne!(Translation::Character('e'), "ee");
    }

    #[test]
    fn test_case_mapping_keeps_one_char_per_char() {
        assert_eq!(Translation::sequence("ae").into_uppercase(), "AE");
        assert_eq!(Translation::Character('İ').into_lowercase(), 'i');
        assert_eq!(Translation::Character('ß').into_uppercase(), 'S');
        assert_eq!(Translation::None.into_uppercase(), Translation::None);
    }

    #[test]
    fn test_lengths_and_last_char() {
        assert_eq!(Translation::Character('é').len(), 2);
        assert_eq!(Translation::sequence("ffi").len(), 3);
        assert!(Translation::None.is_empty());
        assert_eq!(Translation::sequence("ffl").last_char(), Some('l'));
        assert_eq!(Translation::None.last_char(), None);
    }
}
