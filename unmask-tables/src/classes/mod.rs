//! Code point classes that never survive curing as themselves.
//!
//! Two sets live here: bidirectional formatting controls, and invisible or
//! control code points that are always dropped. Combining marks are
//! classified from their general category by the curing engine.

use crate::{search, CodepointRange};

/// Bidirectional formatting controls that can visually reorder or hide text.
const BIDI_CONTROLS: &[CodepointRange] = &[
    (0x061C, 0x061C), // Arabic letter mark
    (0x200E, 0x200F), // LRM, RLM
    (0x202A, 0x202E), // LRE, RLE, PDF, LRO, RLO
    (0x2066, 0x2069), // LRI, RLI, FSI, PDI
];

/// Controls, zero-width and filler characters, selectors and private use.
///
/// `\t`, `\n`, `\v`, `\f` and `\r` are structural and stay out of this set.
const IGNORABLE: &[CodepointRange] = &[
    (0x0000, 0x0008),
    (0x000E, 0x001F),
    (0x007F, 0x009F),
    (0x00AD, 0x00AD),    // soft hyphen
    (0x115F, 0x1160),    // Hangul choseong/jungseong fillers
    (0x17B4, 0x17B5),    // Khmer inherent vowels
    (0x180B, 0x180F),    // Mongolian selectors and vowel separator
    (0x200B, 0x200D),    // zero-width space, ZWNJ, ZWJ
    (0x2060, 0x2064),    // word joiner, invisible operators
    (0x206A, 0x206F),    // deprecated format controls
    (0x3164, 0x3164),    // Hangul filler
    (0xE000, 0xF8FF),    // private use
    (0xFE00, 0xFE0F),    // variation selectors
    (0xFEFF, 0xFEFF),    // byte order mark
    (0xFFA0, 0xFFA0),    // halfwidth Hangul filler
    (0xFFF0, 0xFFFB),    // specials, interlinear annotation
    (0x1BCA0, 0x1BCA3),  // shorthand format controls
    (0x1D173, 0x1D17A),  // musical formatting
    (0xE0000, 0xE007F),  // tags
    (0xE0100, 0xE01EF),  // variation selectors supplement
    (0xF0000, 0x10FFFF), // supplementary private use
];

fn contains(table: &[CodepointRange], ch: char) -> bool {
    search(table, ch as u32, |&range| range).is_some()
}

/// Returns `true` for code points that reorder text direction.
pub fn is_bidi_control(ch: char) -> bool {
    contains(BIDI_CONTROLS, ch)
}

/// Returns `true` for code points that never contribute to cured text.
pub fn is_ignorable(ch: char) -> bool {
    contains(IGNORABLE, ch)
}
