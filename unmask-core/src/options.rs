//! options.rs - The set of toggles that control how text is cured.
//!
//! `Options` is a compact bit set. Every flag has an associated constant,
//! a chainable builder method and a stable snake_case name, which is the
//! form used when options are serialized into profiles.
//!
//! License: MIT OR APACHE 2.0

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use unmask_tables::scripts::Script;

/// A set of curing toggles. The default set cures as aggressively as
/// possible: lowercase output, no retained scripts, leetspeak and bidi
/// handling enabled.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Options(u32);

macro_rules! options {
    ($($(#[$doc:meta])* $bit:literal => $constant:ident, $method:ident;)*) => {
        impl Options {
            $(
                $(#[$doc])*
                pub const $constant: Self = Self(1 << $bit);

                $(#[$doc])*
                #[must_use]
                pub const fn $method(self) -> Self {
                    Self(self.0 | Self::$constant.0)
                }
            )*

            /// Every flag paired with its serialized name, in bit order.
            const NAMED: &'static [(&'static str, Options)] = &[
                $((stringify!($method), Self::$constant),)*
            ];

            const FLAG_NAMES: &'static [&'static str] = &[$(stringify!($method),)*];
        }
    };
}

options! {
    /// Keep the case of the source character instead of lowercasing.
    0 => RETAIN_CAPITALIZATION, retain_capitalization;
    /// Leave bidirectional controls in place instead of stripping them.
    1 => DISABLE_BIDI, disable_bidi;
    /// Do not decode leetspeak.
    2 => DISABLE_LEETSPEAK, disable_leetspeak;
    /// Keep accented letters and combining marks.
    3 => RETAIN_DIACRITICS, retain_diacritics;
    4 => RETAIN_GREEK, retain_greek;
    5 => RETAIN_CYRILLIC, retain_cyrillic;
    6 => RETAIN_HEBREW, retain_hebrew;
    7 => RETAIN_ARABIC, retain_arabic;
    8 => RETAIN_DEVANAGARI, retain_devanagari;
    9 => RETAIN_BENGALI, retain_bengali;
    10 => RETAIN_ARMENIAN, retain_armenian;
    11 => RETAIN_GUJARATI, retain_gujarati;
    12 => RETAIN_TAMIL, retain_tamil;
    13 => RETAIN_THAI, retain_thai;
    14 => RETAIN_LAO, retain_lao;
    15 => RETAIN_BURMESE, retain_burmese;
    16 => RETAIN_KHMER, retain_khmer;
    17 => RETAIN_MONGOLIAN, retain_mongolian;
    18 => RETAIN_CHINESE, retain_chinese;
    19 => RETAIN_JAPANESE, retain_japanese;
    20 => RETAIN_KOREAN, retain_korean;
    21 => RETAIN_BRAILLE, retain_braille;
    22 => RETAIN_EMOJIS, retain_emojis;
    /// Keep the Turkish-specific Latin letters (`ç ğ ı ö ş ü` and capitals).
    23 => RETAIN_TURKISH, retain_turkish;
    /// Drop anything that does not cure to ASCII. Whitespace becomes a space.
    24 => ASCII_ONLY, ascii_only;
    /// Drop anything that is not a letter, a digit or a space.
    25 => ALPHANUMERIC_ONLY, alphanumeric_only;
}

const fn union_of(flags: &[Options]) -> Options {
    let mut bits = 0;
    let mut idx = 0;
    while idx < flags.len() {
        bits |= flags[idx].0;
        idx += 1;
    }
    Options(bits)
}

impl Options {
    /// The empty set.
    pub const DEFAULT: Self = Self(0);

    /// Every script retention flag.
    pub const RETAIN_SCRIPTS: Self = union_of(&[
        Self::RETAIN_GREEK,
        Self::RETAIN_CYRILLIC,
        Self::RETAIN_HEBREW,
        Self::RETAIN_ARABIC,
        Self::RETAIN_DEVANAGARI,
        Self::RETAIN_BENGALI,
        Self::RETAIN_ARMENIAN,
        Self::RETAIN_GUJARATI,
        Self::RETAIN_TAMIL,
        Self::RETAIN_THAI,
        Self::RETAIN_LAO,
        Self::RETAIN_BURMESE,
        Self::RETAIN_KHMER,
        Self::RETAIN_MONGOLIAN,
        Self::RETAIN_CHINESE,
        Self::RETAIN_JAPANESE,
        Self::RETAIN_KOREAN,
        Self::RETAIN_BRAILLE,
        Self::RETAIN_EMOJIS,
        Self::RETAIN_TURKISH,
    ]);

    /// Every `retain_*` flag.
    pub const ALL: Self = union_of(&[
        Self::RETAIN_CAPITALIZATION,
        Self::RETAIN_DIACRITICS,
        Self::RETAIN_SCRIPTS,
    ]);

    /// Only replace homoglyphs: keep every script and diacritic, leave
    /// leetspeak and bidi controls alone.
    pub const PURE_HOMOGLYPH: Self = union_of(&[
        Self::RETAIN_SCRIPTS,
        Self::RETAIN_DIACRITICS,
        Self::DISABLE_LEETSPEAK,
        Self::DISABLE_BIDI,
    ]);

    /// Mask covering every defined flag.
    const KNOWN: Self = Self((1 << 26) - 1);

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Builds options from raw bits, rejecting undefined flags.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !Self::KNOWN.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether characters of `script` should pass through untouched.
    pub const fn retains_script(self, script: Script) -> bool {
        let flag = match script {
            Script::Greek => Self::RETAIN_GREEK,
            Script::Cyrillic => Self::RETAIN_CYRILLIC,
            Script::Hebrew => Self::RETAIN_HEBREW,
            Script::Arabic => Self::RETAIN_ARABIC,
            Script::Devanagari => Self::RETAIN_DEVANAGARI,
            Script::Bengali => Self::RETAIN_BENGALI,
            Script::Armenian => Self::RETAIN_ARMENIAN,
            Script::Gujarati => Self::RETAIN_GUJARATI,
            Script::Tamil => Self::RETAIN_TAMIL,
            Script::Thai => Self::RETAIN_THAI,
            Script::Lao => Self::RETAIN_LAO,
            Script::Burmese => Self::RETAIN_BURMESE,
            Script::Khmer => Self::RETAIN_KHMER,
            Script::Mongolian => Self::RETAIN_MONGOLIAN,
            Script::Chinese => Self::RETAIN_CHINESE,
            Script::Japanese => Self::RETAIN_JAPANESE,
            Script::Korean => Self::RETAIN_KOREAN,
            Script::Braille => Self::RETAIN_BRAILLE,
            Script::Emoji => Self::RETAIN_EMOJIS,
            Script::Turkish => Self::RETAIN_TURKISH,
        };
        self.contains(flag)
    }

    /// Looks up a single flag by its snake_case name.
    pub fn from_flag_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(flag_name, _)| *flag_name == name)
            .map(|&(_, flag)| flag)
    }

    /// Names of the flags set, in bit order.
    pub fn flag_names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|&(name, _)| name)
    }

    /// Every flag name this version understands.
    pub fn known_flag_names() -> &'static [&'static str] {
        Self::FLAG_NAMES
    }
}

impl BitOr for Options {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Options {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<Options> for u32 {
    fn from(options: Options) -> u32 {
        options.0
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Options(")?;
        for (idx, name) in self.flag_names().enumerate() {
            if idx > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, ")")
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.count_ones() as usize))?;
        for name in self.flag_names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = Options;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of option flag names")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Options, A::Error> {
        let mut options = Options::DEFAULT;
        while let Some(name) = seq.next_element::<String>()? {
            let flag = Options::from_flag_name(&name)
                .ok_or_else(|| de::Error::unknown_variant(&name, Options::FLAG_NAMES))?;
            options |= flag;
        }
        Ok(options)
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(OptionsVisitor)
    }
}
