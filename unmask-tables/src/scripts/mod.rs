//! The writing systems that can be retained.
//!
//! Membership for most of them comes from the Unicode Script property,
//! which the curing engine reads. The ranges here cover the two groups that
//! property cannot express: emoji, and the Latin letters specific to Turkish.

use crate::search;

/// A writing system that curing can be told to leave untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Armenian,
    Gujarati,
    Tamil,
    Thai,
    Lao,
    Burmese,
    Khmer,
    Mongolian,
    Chinese,
    Japanese,
    Korean,
    Braille,
    Emoji,
    /// The handful of Latin letters specific to Turkish.
    Turkish,
}

impl Script {
    pub const ALL: [Script; 20] = [
        Script::Greek,
        Script::Cyrillic,
        Script::Hebrew,
        Script::Arabic,
        Script::Devanagari,
        Script::Bengali,
        Script::Armenian,
        Script::Gujarati,
        Script::Tamil,
        Script::Thai,
        Script::Lao,
        Script::Burmese,
        Script::Khmer,
        Script::Mongolian,
        Script::Chinese,
        Script::Japanese,
        Script::Korean,
        Script::Braille,
        Script::Emoji,
        Script::Turkish,
    ];
}

struct ScriptRange {
    first: u32,
    last: u32,
    script: Script,
}

const fn range(first: u32, last: u32, script: Script) -> ScriptRange {
    ScriptRange { first, last, script }
}

const fn single(code: u32, script: Script) -> ScriptRange {
    range(code, code, script)
}

use Script::*;

static SCRIPT_RANGES: &[ScriptRange] = &[
    single(0x00C7, Turkish), // Ç
    single(0x00D6, Turkish), // Ö
    single(0x00DC, Turkish), // Ü
    single(0x00E7, Turkish), // ç
    single(0x00F6, Turkish), // ö
    single(0x00FC, Turkish), // ü
    range(0x011E, 0x011F, Turkish), // Ğ ğ
    range(0x0130, 0x0131, Turkish), // İ ı
    range(0x015E, 0x015F, Turkish), // Ş ş
    range(0x2600, 0x27BF, Emoji),
    // 0x1F100..=0x1F1FF holds enclosed letters and regional indicators,
    // which cure like any other letter.
    range(0x1F000, 0x1F0FF, Emoji),
    range(0x1F200, 0x1FAFF, Emoji),
];

/// Returns `Emoji` or `Turkish` for code points in those groups.
///
/// Every other script is left to the Unicode Script property.
pub fn special_script_of(ch: char) -> Option<Script> {
    search(SCRIPT_RANGES, ch as u32, |row| (row.first, row.last)).map(|row| row.script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_ordered;

    #[test]
    fn test_ranges_are_ordered() {
        assert!(is_ordered(SCRIPT_RANGES, |row| (row.first, row.last)));
    }

    #[test]
    fn test_special_script_of() {
        assert_eq!(special_script_of('a'), None);
        assert_eq!(special_script_of('λ'), None);
        assert_eq!(special_script_of('⠁'), None);
        assert_eq!(special_script_of('🎉'), Some(Emoji));
        assert_eq!(special_script_of('☕'), Some(Emoji));
        assert_eq!(special_script_of('🃏'), Some(Emoji));
        assert_eq!(special_script_of('ğ'), Some(Turkish));
        assert_eq!(special_script_of('é'), None);
    }

    #[test]
    fn test_enclosed_letters_are_not_emoji() {
        for ch in ['🄰', '🅐', '🅰', '🇦', '🄁'] {
            assert_eq!(special_script_of(ch), None, "{:?} should cure as a letter", ch);
        }
    }
}
