//! translator.rs - Cures one character (or one leetspeak cluster) at a time.
//!
//! The translator is stateless apart from its options. Context-sensitive
//! decisions (leetspeak) receive the upcoming characters and the last
//! character emitted so far from the caller. Leetspeak sees characters after
//! the table lookup, so `３` and `𝟑` decode exactly like `3`.
//!
//! License: MIT OR APACHE 2.0

use unicode_normalization::char::is_combining_mark;
use unmask_tables::classes::{is_bidi_control, is_ignorable};
use unmask_tables::confusables::{self, Replacement};
use unmask_tables::leetspeak::{MAX_CLUSTER_LEN, MAX_SUBSTITUTION_RUN};

use crate::leetspeak;
use crate::options::Options;
use crate::scripts::script_of;
use crate::translation::Translation;

/// How many characters past the current one a translation can look at.
pub const LOOKAHEAD: usize = MAX_SUBSTITUTION_RUN;

const _: () = assert!(LOOKAHEAD >= MAX_CLUSTER_LEN - 1);

/// The result of translating at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub translation: Translation,
    /// Source characters consumed, always at least one.
    pub consumed: usize,
}

impl Outcome {
    fn single(translation: Translation) -> Self {
        Outcome { translation, consumed: 1 }
    }
}

/// Applies the curing rules selected by a set of [`Options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    options: Options,
}

impl Translator {
    pub const fn new(options: Options) -> Self {
        Translator { options }
    }

    pub const fn options(&self) -> Options {
        self.options
    }

    /// Translates `ch` in context.
    ///
    /// `lookahead` holds the characters that follow `ch` and `previous` is
    /// the last character emitted into the cured text so far. Only the first
    /// [`LOOKAHEAD`] characters of `lookahead` are read.
    pub fn translate(&self, ch: char, lookahead: &[char], previous: Option<char>) -> Outcome {
        let translation = self.lookup(ch);

        if !self.options.contains(Options::DISABLE_LEETSPEAK) {
            let unit = leet_unit(ch, &translation);
            if unit.is_ascii() && !unit.is_ascii_alphabetic() {
                let mut window = ['\0'; LOOKAHEAD];
                let len = lookahead.len().min(LOOKAHEAD);
                for (slot, &next) in window.iter_mut().zip(lookahead) {
                    *slot = leet_unit(next, &self.lookup(next));
                }
                let window = &window[..len];

                if let Some((letter, consumed)) = leetspeak::match_cluster(unit, window) {
                    return Outcome {
                        translation: self.finish(ch, Translation::Character(letter)),
                        consumed,
                    };
                }
                if let Some(letter) = leetspeak::substitute_in_word(unit, window, previous) {
                    return Outcome::single(self.finish(ch, Translation::Character(letter)));
                }
            }
        }
        Outcome::single(self.finish(ch, translation))
    }

    /// Translates `ch` on its own. Leetspeak needs context and never applies.
    pub fn translate_char(&self, ch: char) -> Translation {
        self.finish(ch, self.lookup(ch))
    }

    fn lookup(&self, ch: char) -> Translation {
        if is_bidi_control(ch) {
            return if self.options.contains(Options::DISABLE_BIDI) {
                Translation::Character(ch)
            } else {
                Translation::None
            };
        }
        if is_ignorable(ch) {
            return Translation::None;
        }
        if script_of(ch).is_some_and(|script| self.options.retains_script(script)) {
            return Translation::Character(ch);
        }
        if let Some(row) = confusables::lookup(ch) {
            if !(row.diacritic && self.options.contains(Options::RETAIN_DIACRITICS)) {
                return match row.replacement(ch) {
                    Replacement::Char(to) => Translation::Character(to),
                    Replacement::Str(to) => Translation::sequence(to),
                };
            }
            return Translation::Character(ch);
        }
        if is_combining_mark(ch) && !self.options.contains(Options::RETAIN_DIACRITICS) {
            return Translation::None;
        }
        Translation::Character(ch)
    }

    /// Restores or folds case, then applies the output filters.
    fn finish(&self, source: char, translation: Translation) -> Translation {
        let translation = if !self.options.contains(Options::RETAIN_CAPITALIZATION) {
            translation.into_lowercase()
        } else if source.is_uppercase() {
            translation.into_uppercase()
        } else {
            translation
        };

        if self.options.contains(Options::ASCII_ONLY) && !translation.all(|c| c.is_ascii()) {
            return if source.is_whitespace() {
                Translation::Character(' ')
            } else {
                Translation::None
            };
        }
        if self.options.contains(Options::ALPHANUMERIC_ONLY) && !translation.all(|c| c.is_alphanumeric() || c == ' ') {
            return Translation::None;
        }
        translation
    }
}

/// The character leetspeak decoding sees for `source`: its single-character
/// translation, or the source itself when it cures to nothing or to a string.
fn leet_unit(source: char, translation: &Translation) -> char {
    match translation {
        Translation::Character(to) => *to,
        _ => source,
    }
}

/// Cures a single character with no surrounding context.
pub fn cure_char(ch: char, options: Options) -> Translation {
    Translator::new(options).translate_char(ch)
}

/// Cures a single character and renders the result as a string.
pub fn cure_char_string(ch: char, options: Options) -> String {
    cure_char(ch, options).to_string()
}
