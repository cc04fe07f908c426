//! scripts.rs - Which retainable writing system a character belongs to.
//!
//! License: MIT OR APACHE 2.0

use unicode_script::{Script as UnicodeScriptName, UnicodeScript};
use unmask_tables::scripts::{special_script_of, Script};

/// Resolves the retainable script of `ch`, if any.
///
/// Emoji and the Turkish letters come from the tables crate. Everything else
/// follows the Unicode Script property, so characters of the `Common` and
/// `Inherited` scripts (shared punctuation, combining marks) belong to none.
pub(crate) fn script_of(ch: char) -> Option<Script> {
    if let Some(script) = special_script_of(ch) {
        return Some(script);
    }

    let script = match ch.script() {
        UnicodeScriptName::Greek => Script::Greek,
        UnicodeScriptName::Cyrillic => Script::Cyrillic,
        UnicodeScriptName::Hebrew => Script::Hebrew,
        UnicodeScriptName::Arabic => Script::Arabic,
        UnicodeScriptName::Devanagari => Script::Devanagari,
        UnicodeScriptName::Bengali => Script::Bengali,
        UnicodeScriptName::Armenian => Script::Armenian,
        UnicodeScriptName::Gujarati => Script::Gujarati,
        UnicodeScriptName::Tamil => Script::Tamil,
        UnicodeScriptName::Thai => Script::Thai,
        UnicodeScriptName::Lao => Script::Lao,
        UnicodeScriptName::Myanmar => Script::Burmese,
        UnicodeScriptName::Khmer => Script::Khmer,
        UnicodeScriptName::Mongolian => Script::Mongolian,
        UnicodeScriptName::Han | UnicodeScriptName::Bopomofo => Script::Chinese,
        UnicodeScriptName::Hiragana | UnicodeScriptName::Katakana => Script::Japanese,
        UnicodeScriptName::Hangul => Script::Korean,
        UnicodeScriptName::Braille => Script::Braille,
        _ => return None,
    };
    Some(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_of() {
        assert_eq!(script_of('a'), None);
        assert_eq!(script_of('λ'), Some(Script::Greek));
        assert_eq!(script_of('ж'), Some(Script::Cyrillic));
        assert_eq!(script_of('ש'), Some(Script::Hebrew));
        assert_eq!(script_of('ب'), Some(Script::Arabic));
        assert_eq!(script_of('क'), Some(Script::Devanagari));
        assert_eq!(script_of('ก'), Some(Script::Thai));
        assert_eq!(script_of('က'), Some(Script::Burmese));
        assert_eq!(script_of('中'), Some(Script::Chinese));
        assert_eq!(script_of('ㄅ'), Some(Script::Chinese));
        assert_eq!(script_of('あ'), Some(Script::Japanese));
        assert_eq!(script_of('カ'), Some(Script::Japanese));
        assert_eq!(script_of('한'), Some(Script::Korean));
        assert_eq!(script_of('⠁'), Some(Script::Braille));
        assert_eq!(script_of('🎉'), Some(Script::Emoji));
        assert_eq!(script_of('ğ'), Some(Script::Turkish));
        assert_eq!(script_of('é'), None);
    }

    #[test]
    fn test_shared_characters_belong_to_no_script() {
        assert_eq!(script_of('1'), None);
        assert_eq!(script_of('\u{0301}'), None);
        assert_eq!(script_of('\u{064B}'), None);
        assert_eq!(script_of('\u{0951}'), None);
    }
}
