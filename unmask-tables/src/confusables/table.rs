// unmask-tables/src/confusables/table.rs
use super::{Confusable, Mapping};

const fn row(first: u32, last: u32, mapping: Mapping, diacritic: bool) -> Confusable {
    Confusable {
        first,
        last,
        mapping,
        diacritic,
    }
}

const fn ch(code: u32, to: char) -> Confusable {
    row(code, code, Mapping::Char(to), false)
}

const fn chars(first: u32, last: u32, to: char) -> Confusable {
    row(first, last, Mapping::Char(to), false)
}

const fn accent(code: u32, to: char) -> Confusable {
    row(code, code, Mapping::Char(to), true)
}

const fn accents(first: u32, last: u32, to: char) -> Confusable {
    row(first, last, Mapping::Char(to), true)
}

const fn shift(first: u32, last: u32, base: char) -> Confusable {
    row(first, last, Mapping::Shift(base), false)
}

const fn text(code: u32, to: &'static str) -> Confusable {
    row(code, code, Mapping::Str(to), false)
}

const fn texts(first: u32, last: u32, to: &'static str) -> Confusable {
    row(first, last, Mapping::Str(to), false)
}

const fn accent_texts(first: u32, last: u32, to: &'static str) -> Confusable {
    row(first, last, Mapping::Str(to), true)
}

/// Sorted by `first`, with no two rows overlapping.
pub(super) static CONFUSABLES: &[Confusable] = &[
    ch(0x00A0, ' '),
    ch(0x00A2, 'c'),
    ch(0x00A5, 'y'),
    ch(0x00A9, 'c'),
    ch(0x00AA, 'a'),
    ch(0x00AE, 'r'),
    ch(0x00B2, '2'),
    ch(0x00B3, '3'),
    ch(0x00B5, 'u'),
    ch(0x00B7, '.'),
    ch(0x00B9, '1'),
    ch(0x00BA, 'o'),
    accents(0x00C0, 0x00C5, 'a'),
    text(0x00C6, "ae"),
    accent(0x00C7, 'c'),
    accents(0x00C8, 0x00CB, 'e'),
    accents(0x00CC, 0x00CF, 'i'),
    ch(0x00D0, 'd'),
    accent(0x00D1, 'n'),
    accents(0x00D2, 0x00D6, 'o'),
    ch(0x00D7, 'x'),
    accent(0x00D8, 'o'),
    accents(0x00D9, 0x00DC, 'u'),
    accent(0x00DD, 'y'),
    ch(0x00DE, 'p'),
    text(0x00DF, "ss"),
    accents(0x00E0, 0x00E5, 'a'),
    text(0x00E6, "ae"),
    accent(0x00E7, 'c'),
    accents(0x00E8, 0x00EB, 'e'),
    accents(0x00EC, 0x00EF, 'i'),
    ch(0x00F0, 'd'),
    accent(0x00F1, 'n'),
    accents(0x00F2, 0x00F6, 'o'),
    accent(0x00F8, 'o'),
    accents(0x00F9, 0x00FC, 'u'),
    accent(0x00FD, 'y'),
    ch(0x00FE, 'p'),
    accent(0x00FF, 'y'),
    accents(0x0100, 0x0105, 'a'),
    accents(0x0106, 0x010D, 'c'),
    accents(0x010E, 0x0111, 'd'),
    accents(0x0112, 0x011B, 'e'),
    accents(0x011C, 0x0123, 'g'),
    accents(0x0124, 0x0127, 'h'),
    accents(0x0128, 0x0130, 'i'),
    ch(0x0131, 'i'),
    texts(0x0132, 0x0133, "ij"),
    accents(0x0134, 0x0135, 'j'),
    accents(0x0136, 0x0137, 'k'),
    ch(0x0138, 'k'),
    accents(0x0139, 0x0142, 'l'),
    accents(0x0143, 0x0149, 'n'),
    chars(0x014A, 0x014B, 'n'),
    accents(0x014C, 0x0151, 'o'),
    texts(0x0152, 0x0153, "oe"),
    accents(0x0154, 0x0159, 'r'),
    accents(0x015A, 0x0161, 's'),
    accents(0x0162, 0x0167, 't'),
    accents(0x0168, 0x0173, 'u'),
    accents(0x0174, 0x0175, 'w'),
    accents(0x0176, 0x0178, 'y'),
    accents(0x0179, 0x017E, 'z'),
    ch(0x017F, 'f'),
    accents(0x0180, 0x0181, 'b'),
    chars(0x0182, 0x0185, 'b'),
    ch(0x0186, 'c'),
    accents(0x0187, 0x0188, 'c'),
    accents(0x0189, 0x018C, 'd'),
    chars(0x018E, 0x0190, 'e'),
    accents(0x0191, 0x0192, 'f'),
    accent(0x0193, 'g'),
    ch(0x0194, 'y'),
    text(0x0195, "hv"),
    ch(0x0196, 'l'),
    accent(0x0197, 'i'),
    accents(0x0198, 0x0199, 'k'),
    accent(0x019A, 'l'),
    ch(0x019C, 'w'),
    accents(0x019D, 0x019E, 'n'),
    accents(0x019F, 0x01A1, 'o'),
    accents(0x01A4, 0x01A5, 'p'),
    ch(0x01A6, 'r'),
    accents(0x01AB, 0x01AE, 't'),
    accents(0x01AF, 0x01B0, 'u'),
    accent(0x01B2, 'v'),
    accents(0x01B3, 0x01B4, 'y'),
    accents(0x01B5, 0x01B6, 'z'),
    chars(0x01BC, 0x01BD, 's'),
    texts(0x01C4, 0x01C6, "dz"),
    texts(0x01C7, 0x01C9, "lj"),
    texts(0x01CA, 0x01CC, "nj"),
    accents(0x01CD, 0x01CE, 'a'),
    accents(0x01CF, 0x01D0, 'i'),
    accents(0x01D1, 0x01D2, 'o'),
    accents(0x01D3, 0x01DC, 'u'),
    ch(0x01DD, 'e'),
    accents(0x01DE, 0x01E1, 'a'),
    accent_texts(0x01E2, 0x01E3, "ae"),
    accents(0x01E4, 0x01E7, 'g'),
    accents(0x01E8, 0x01E9, 'k'),
    accents(0x01EA, 0x01ED, 'o'),
    accent(0x01F0, 'j'),
    texts(0x01F1, 0x01F3, "dz"),
    accents(0x01F4, 0x01F5, 'g'),
    accents(0x01F8, 0x01F9, 'n'),
    accents(0x01FA, 0x01FB, 'a'),
    accent_texts(0x01FC, 0x01FD, "ae"),
    accents(0x01FE, 0x01FF, 'o'),
    accents(0x0200, 0x0203, 'a'),
    accents(0x0204, 0x0207, 'e'),
    accents(0x0208, 0x020B, 'i'),
    accents(0x020C, 0x020F, 'o'),
    accents(0x0210, 0x0213, 'r'),
    accents(0x0214, 0x0217, 'u'),
    accents(0x0218, 0x0219, 's'),
    accents(0x021A, 0x021B, 't'),
    accents(0x021E, 0x021F, 'h'),
    accent(0x0220, 'n'),
    accent(0x0221, 'd'),
    accents(0x0224, 0x0225, 'z'),
    accents(0x0226, 0x0227, 'a'),
    accents(0x0228, 0x0229, 'e'),
    accents(0x022A, 0x0231, 'o'),
    accents(0x0232, 0x0233, 'y'),
    accent(0x0234, 'l'),
    accent(0x0235, 'n'),
    accent(0x0236, 't'),
    ch(0x0237, 'j'),
    accent(0x023A, 'a'),
    accents(0x023B, 0x023C, 'c'),
    accent(0x023D, 'l'),
    accent(0x023E, 't'),
    accent(0x023F, 's'),
    accent(0x0240, 'z'),
    accent(0x0243, 'b'),
    accent(0x0244, 'u'),
    accents(0x0246, 0x0247, 'e'),
    accents(0x0248, 0x0249, 'j'),
    accents(0x024A, 0x024B, 'q'),
    accents(0x024C, 0x024D, 'r'),
    accents(0x024E, 0x024F, 'y'),
    chars(0x0250, 0x0252, 'a'),
    accent(0x0253, 'b'),
    ch(0x0254, 'c'),
    accent(0x0255, 'c'),
    accents(0x0256, 0x0257, 'd'),
    chars(0x0258, 0x025C, 'e'),
    accent(0x025F, 'j'),
    accent(0x0260, 'g'),
    chars(0x0261, 0x0262, 'g'),
    ch(0x0265, 'h'),
    accents(0x0266, 0x0267, 'h'),
    accent(0x0268, 'i'),
    chars(0x0269, 0x026A, 'i'),
    accents(0x026B, 0x026D, 'l'),
    chars(0x026F, 0x0270, 'w'),
    accent(0x0271, 'm'),
    accents(0x0272, 0x0273, 'n'),
    ch(0x0274, 'n'),
    accent(0x0275, 'o'),
    text(0x0276, "oe"),
    chars(0x0279, 0x027B, 'r'),
    accents(0x027C, 0x027E, 'r'),
    ch(0x0280, 'r'),
    accent(0x0282, 's'),
    accent(0x0284, 'j'),
    ch(0x0287, 't'),
    accent(0x0288, 't'),
    accent(0x0289, 'u'),
    ch(0x028A, 'u'),
    chars(0x028B, 0x028C, 'v'),
    ch(0x028D, 'w'),
    chars(0x028E, 0x028F, 'y'),
    accents(0x0290, 0x0291, 'z'),
    ch(0x0299, 'b'),
    accent(0x029B, 'g'),
    ch(0x029C, 'h'),
    accent(0x029D, 'j'),
    ch(0x029F, 'l'),
    accent(0x02A0, 'q'),
    ch(0x02B0, 'h'),
    accent(0x02B1, 'h'),
    ch(0x02B2, 'j'),
    ch(0x02B3, 'r'),
    ch(0x02B7, 'w'),
    ch(0x02B8, 'y'),
    ch(0x02E1, 'l'),
    ch(0x02E2, 's'),
    ch(0x02E3, 'x'),
    accent(0x037E, ';'),
    ch(0x037F, 'j'),
    accent(0x0386, 'a'),
    accent(0x0388, 'e'),
    accent(0x0389, 'h'),
    accent(0x038A, 'i'),
    accent(0x038C, 'o'),
    accent(0x038E, 'y'),
    ch(0x0391, 'a'),
    ch(0x0392, 'b'),
    ch(0x0395, 'e'),
    ch(0x0396, 'z'),
    ch(0x0397, 'h'),
    ch(0x0398, 'o'),
    ch(0x0399, 'i'),
    ch(0x039A, 'k'),
    ch(0x039C, 'm'),
    ch(0x039D, 'n'),
    ch(0x039F, 'o'),
    ch(0x03A0, 'n'),
    ch(0x03A1, 'p'),
    ch(0x03A3, 'e'),
    ch(0x03A4, 't'),
    ch(0x03A5, 'y'),
    ch(0x03A7, 'x'),
    accent(0x03AA, 'i'),
    accent(0x03AB, 'y'),
    accent(0x03AC, 'a'),
    accent(0x03AD, 'e'),
    accent(0x03AE, 'n'),
    accent(0x03AF, 'i'),
    accent(0x03B0, 'u'),
    ch(0x03B1, 'a'),
    ch(0x03B2, 'b'),
    ch(0x03B3, 'y'),
    ch(0x03B4, 'd'),
    ch(0x03B5, 'e'),
    ch(0x03B7, 'n'),
    ch(0x03B8, 'o'),
    ch(0x03B9, 'i'),
    ch(0x03BA, 'k'),
    ch(0x03BC, 'u'),
    ch(0x03BD, 'v'),
    ch(0x03BF, 'o'),
    ch(0x03C0, 'n'),
    ch(0x03C1, 'p'),
    ch(0x03C2, 'c'),
    ch(0x03C3, 'o'),
    ch(0x03C4, 't'),
    ch(0x03C5, 'u'),
    ch(0x03C7, 'x'),
    ch(0x03C9, 'w'),
    accent(0x03CA, 'i'),
    accent(0x03CB, 'u'),
    accent(0x03CC, 'o'),
    accent(0x03CD, 'u'),
    accent(0x03CE, 'w'),
    ch(0x03D2, 'y'),
    ch(0x03F2, 'c'),
    ch(0x03F3, 'j'),
    ch(0x03F5, 'e'),
    ch(0x03F9, 'c'),
    accents(0x0400, 0x0401, 'e'),
    ch(0x0405, 's'),
    ch(0x0406, 'i'),
    accent(0x0407, 'i'),
    ch(0x0408, 'j'),
    accent(0x040C, 'k'),
    accent(0x040E, 'y'),
    ch(0x0410, 'a'),
    ch(0x0412, 'b'),
    ch(0x0415, 'e'),
    ch(0x041A, 'k'),
    ch(0x041C, 'm'),
    ch(0x041D, 'h'),
    ch(0x041E, 'o'),
    ch(0x0420, 'p'),
    ch(0x0421, 'c'),
    ch(0x0422, 't'),
    ch(0x0423, 'y'),
    ch(0x0425, 'x'),
    ch(0x042C, 'b'),
    ch(0x0430, 'a'),
    ch(0x0432, 'b'),
    ch(0x0433, 'r'),
    ch(0x0435, 'e'),
    ch(0x043A, 'k'),
    ch(0x043C, 'm'),
    ch(0x043D, 'h'),
    ch(0x043E, 'o'),
    ch(0x043F, 'n'),
    ch(0x0440, 'p'),
    ch(0x0441, 'c'),
    ch(0x0442, 't'),
    ch(0x0443, 'y'),
    ch(0x0445, 'x'),
    ch(0x044C, 'b'),
    accents(0x0450, 0x0451, 'e'),
    ch(0x0455, 's'),
    ch(0x0456, 'i'),
    accent(0x0457, 'i'),
    ch(0x0458, 'j'),
    accent(0x045C, 'k'),
    accent(0x045E, 'y'),
    chars(0x0460, 0x0461, 'w'),
    chars(0x0474, 0x0475, 'v'),
    accents(0x0476, 0x0477, 'v'),
    ch(0x0491, 'r'),
    accents(0x049A, 0x04A1, 'k'),
    accents(0x04A2, 0x04A3, 'h'),
    accents(0x04AA, 0x04AB, 'c'),
    chars(0x04AE, 0x04AF, 'y'),
    accents(0x04B0, 0x04B1, 'y'),
    accents(0x04B2, 0x04B3, 'x'),
    chars(0x04BA, 0x04BB, 'h'),
    ch(0x04C0, 'i'),
    accents(0x04C3, 0x04C4, 'k'),
    accents(0x04C7, 0x04CA, 'h'),
    accents(0x04CD, 0x04CE, 'm'),
    ch(0x04CF, 'l'),
    accents(0x04D0, 0x04D3, 'a'),
    texts(0x04D4, 0x04D5, "ae"),
    accents(0x04D6, 0x04D7, 'e'),
    chars(0x04D8, 0x04D9, 'e'),
    accents(0x04DA, 0x04DB, 'e'),
    accents(0x04E6, 0x04E7, 'o'),
    chars(0x04E8, 0x04E9, 'o'),
    accents(0x04EA, 0x04EB, 'o'),
    accents(0x04EE, 0x04F3, 'y'),
    ch(0x0501, 'd'),
    chars(0x050C, 0x050D, 'g'),
    chars(0x0510, 0x0511, 'e'),
    chars(0x051A, 0x051B, 'q'),
    chars(0x051C, 0x051D, 'w'),
    ch(0x054D, 'u'),
    ch(0x0555, 'o'),
    ch(0x0561, 'w'),
    ch(0x0566, 'q'),
    ch(0x0570, 'h'),
    ch(0x0578, 'n'),
    ch(0x057D, 'u'),
    ch(0x0581, 'g'),
    ch(0x0585, 'o'),
    ch(0x05D5, 'i'),
    ch(0x05D7, 'n'),
    ch(0x05E1, 'o'),
    ch(0x0627, 'l'),
    ch(0x0647, 'o'),
    shift(0x0660, 0x0669, '0'),
    shift(0x06F0, 0x06F9, '0'),
    shift(0x07C0, 0x07C9, '0'),
    ch(0x07CB, 'o'),
    shift(0x0966, 0x096F, '0'),
    shift(0x09E6, 0x09EF, '0'),
    shift(0x0A66, 0x0A6F, '0'),
    shift(0x0AE6, 0x0AEF, '0'),
    shift(0x0B66, 0x0B6F, '0'),
    shift(0x0BE6, 0x0BEF, '0'),
    shift(0x0C66, 0x0C6F, '0'),
    shift(0x0CE6, 0x0CEF, '0'),
    shift(0x0D66, 0x0D6F, '0'),
    shift(0x0DE6, 0x0DEF, '0'),
    ch(0x0E17, 'n'),
    ch(0x0E19, 'u'),
    ch(0x0E1A, 'u'),
    ch(0x0E1E, 'w'),
    ch(0x0E23, 's'),
    ch(0x0E2D, 'o'),
    ch(0x0E3F, 'b'),
    shift(0x0E50, 0x0E59, '0'),
    ch(0x0E9A, 'u'),
    ch(0x0EAD, 'o'),
    shift(0x0ED0, 0x0ED9, '0'),
    shift(0x0F20, 0x0F29, '0'),
    ch(0x101D, 'o'),
    shift(0x1040, 0x1049, '0'),
    shift(0x1090, 0x1099, '0'),
    ch(0x13A0, 'd'),
    ch(0x13A1, 'r'),
    ch(0x13A2, 't'),
    ch(0x13A5, 'i'),
    ch(0x13A9, 'y'),
    ch(0x13AA, 'a'),
    ch(0x13AB, 'j'),
    ch(0x13AC, 'e'),
    ch(0x13B3, 'w'),
    ch(0x13B6, 'g'),
    ch(0x13B7, 'm'),
    ch(0x13BB, 'h'),
    ch(0x13BD, 'y'),
    ch(0x13C0, 'g'),
    ch(0x13C2, 'h'),
    ch(0x13C3, 'z'),
    ch(0x13C6, 'i'),
    ch(0x13CB, 'e'),
    ch(0x13CE, '4'),
    ch(0x13CF, 'b'),
    ch(0x13D2, 'r'),
    ch(0x13D4, 'w'),
    ch(0x13D5, 's'),
    ch(0x13D9, 'v'),
    ch(0x13DA, 's'),
    ch(0x13DE, 'l'),
    ch(0x13DF, 'c'),
    ch(0x13E2, 'p'),
    ch(0x13E6, 'k'),
    ch(0x13E7, 'd'),
    ch(0x13EE, '6'),
    ch(0x13EF, 'y'),
    ch(0x13F3, 'g'),
    ch(0x13F4, 'b'),
    ch(0x13FB, 'g'),
    ch(0x13FC, 'b'),
    ch(0x142F, 'v'),
    ch(0x144E, 'n'),
    ch(0x1455, 'c'),
    ch(0x146B, 'q'),
    ch(0x146D, 'p'),
    ch(0x14AA, 'l'),
    ch(0x1515, 's'),
    ch(0x157C, 'h'),
    ch(0x1587, 'r'),
    ch(0x15B4, 'f'),
    ch(0x15E9, 'a'),
    ch(0x15EA, 'd'),
    ch(0x15EF, 'w'),
    ch(0x15F0, 'm'),
    ch(0x15F7, 'b'),
    shift(0x17E0, 0x17E9, '0'),
    shift(0x1810, 0x1819, '0'),
    shift(0x1946, 0x194F, '0'),
    shift(0x19D0, 0x19D9, '0'),
    shift(0x1A80, 0x1A89, '0'),
    shift(0x1A90, 0x1A99, '0'),
    shift(0x1B50, 0x1B59, '0'),
    shift(0x1BB0, 0x1BB9, '0'),
    shift(0x1C40, 0x1C49, '0'),
    shift(0x1C50, 0x1C59, '0'),
    ch(0x1D00, 'a'),
    text(0x1D01, "ae"),
    ch(0x1D03, 'b'),
    ch(0x1D04, 'c'),
    chars(0x1D05, 0x1D06, 'd'),
    ch(0x1D07, 'e'),
    ch(0x1D0A, 'j'),
    ch(0x1D0B, 'k'),
    ch(0x1D0C, 'l'),
    ch(0x1D0D, 'm'),
    ch(0x1D0E, 'n'),
    ch(0x1D0F, 'o'),
    ch(0x1D18, 'p'),
    ch(0x1D1B, 't'),
    ch(0x1D1C, 'u'),
    ch(0x1D20, 'v'),
    ch(0x1D21, 'w'),
    ch(0x1D22, 'z'),
    ch(0x1D26, 'r'),
    ch(0x1D28, 'n'),
    ch(0x1D29, 'p'),
    ch(0x1D2C, 'a'),
    ch(0x1D2E, 'b'),
    ch(0x1D30, 'd'),
    ch(0x1D31, 'e'),
    ch(0x1D33, 'g'),
    ch(0x1D34, 'h'),
    ch(0x1D35, 'i'),
    ch(0x1D36, 'j'),
    ch(0x1D37, 'k'),
    ch(0x1D38, 'l'),
    ch(0x1D39, 'm'),
    ch(0x1D3A, 'n'),
    ch(0x1D3C, 'o'),
    ch(0x1D3E, 'p'),
    ch(0x1D3F, 'r'),
    ch(0x1D40, 't'),
    ch(0x1D41, 'u'),
    ch(0x1D42, 'w'),
    ch(0x1D43, 'a'),
    ch(0x1D47, 'b'),
    ch(0x1D48, 'd'),
    ch(0x1D49, 'e'),
    ch(0x1D4D, 'g'),
    ch(0x1D4F, 'k'),
    ch(0x1D50, 'm'),
    ch(0x1D52, 'o'),
    ch(0x1D56, 'p'),
    ch(0x1D57, 't'),
    ch(0x1D58, 'u'),
    ch(0x1D5B, 'v'),
    ch(0x1D62, 'i'),
    ch(0x1D63, 'r'),
    ch(0x1D64, 'u'),
    ch(0x1D65, 'v'),
    text(0x1D6B, "ue"),
    accent(0x1D6C, 'b'),
    accent(0x1D6D, 'd'),
    accent(0x1D6E, 'f'),
    accent(0x1D6F, 'm'),
    accent(0x1D70, 'n'),
    accent(0x1D71, 'p'),
    accents(0x1D72, 0x1D73, 'r'),
    accent(0x1D74, 's'),
    accent(0x1D75, 't'),
    accent(0x1D76, 'z'),
    ch(0x1D79, 'g'),
    accent(0x1D7D, 'p'),
    accent(0x1D80, 'b'),
    accent(0x1D81, 'd'),
    accent(0x1D82, 'f'),
    accent(0x1D83, 'g'),
    accent(0x1D84, 'k'),
    accent(0x1D85, 'l'),
    accent(0x1D86, 'm'),
    accent(0x1D87, 'n'),
    accent(0x1D88, 'p'),
    accent(0x1D89, 'r'),
    accent(0x1D8A, 's'),
    accent(0x1D8C, 'v'),
    accent(0x1D8D, 'x'),
    accent(0x1D8E, 'z'),
    accent(0x1D8F, 'a'),
    accent(0x1D91, 'd'),
    accent(0x1D92, 'e'),
    accent(0x1D96, 'i'),
    accent(0x1D99, 'u'),
    ch(0x1D9C, 'c'),
    accent(0x1D9D, 'c'),
    ch(0x1DA0, 'f'),
    accent(0x1DA4, 'i'),
    ch(0x1DA6, 'i'),
    accent(0x1DA7, 'i'),
    accent(0x1DA8, 'j'),
    accents(0x1DA9, 0x1DAA, 'l'),
    ch(0x1DAB, 'l'),
    accent(0x1DAC, 'm'),
    accents(0x1DAE, 0x1DAF, 'n'),
    ch(0x1DB0, 'n'),
    accent(0x1DB3, 's'),
    accent(0x1DB5, 't'),
    ch(0x1DB8, 'u'),
    accent(0x1DB9, 'v'),
    ch(0x1DBB, 'z'),
    accents(0x1DBC, 0x1DBD, 'z'),
    accents(0x1E00, 0x1E01, 'a'),
    accents(0x1E02, 0x1E07, 'b'),
    accents(0x1E08, 0x1E09, 'c'),
    accents(0x1E0A, 0x1E13, 'd'),
    accents(0x1E14, 0x1E1D, 'e'),
    accents(0x1E1E, 0x1E1F, 'f'),
    accents(0x1E20, 0x1E21, 'g'),
    accents(0x1E22, 0x1E2B, 'h'),
    accents(0x1E2C, 0x1E2F, 'i'),
    accents(0x1E30, 0x1E35, 'k'),
    accents(0x1E36, 0x1E3D, 'l'),
    accents(0x1E3E, 0x1E43, 'm'),
    accents(0x1E44, 0x1E4B, 'n'),
    accents(0x1E4C, 0x1E53, 'o'),
    accents(0x1E54, 0x1E57, 'p'),
    accents(0x1E58, 0x1E5F, 'r'),
    accents(0x1E60, 0x1E69, 's'),
    accents(0x1E6A, 0x1E71, 't'),
    accents(0x1E72, 0x1E7B, 'u'),
    accents(0x1E7C, 0x1E7F, 'v'),
    accents(0x1E80, 0x1E89, 'w'),
    accents(0x1E8A, 0x1E8D, 'x'),
    accents(0x1E8E, 0x1E8F, 'y'),
    accents(0x1E90, 0x1E95, 'z'),
    accent(0x1E96, 'h'),
    accent(0x1E97, 't'),
    accent(0x1E98, 'w'),
    accent(0x1E99, 'y'),
    accent(0x1E9A, 'a'),
    accent(0x1E9B, 'f'),
    text(0x1E9E, "ss"),
    accents(0x1EA0, 0x1EB7, 'a'),
    accents(0x1EB8, 0x1EC7, 'e'),
    accents(0x1EC8, 0x1ECB, 'i'),
    accents(0x1ECC, 0x1EE3, 'o'),
    accents(0x1EE4, 0x1EF1, 'u'),
    accents(0x1EF2, 0x1EF9, 'y'),
    accents(0x1EFE, 0x1EFF, 'y'),
    accents(0x1F00, 0x1F0F, 'a'),
    accents(0x1F10, 0x1F15, 'e'),
    accents(0x1F18, 0x1F1D, 'e'),
    accents(0x1F20, 0x1F27, 'n'),
    accents(0x1F28, 0x1F2F, 'h'),
    accents(0x1F30, 0x1F3F, 'i'),
    accents(0x1F40, 0x1F45, 'o'),
    accents(0x1F48, 0x1F4D, 'o'),
    accents(0x1F50, 0x1F57, 'u'),
    accents(0x1F59, 0x1F5F, 'y'),
    accents(0x1F60, 0x1F67, 'w'),
    accents(0x1F68, 0x1F6F, 'w'),
    accents(0x1F70, 0x1F71, 'a'),
    accents(0x1F72, 0x1F73, 'e'),
    accents(0x1F74, 0x1F75, 'n'),
    accents(0x1F76, 0x1F77, 'i'),
    accents(0x1F78, 0x1F79, 'o'),
    accents(0x1F7A, 0x1F7B, 'u'),
    accents(0x1F7C, 0x1F7D, 'w'),
    accents(0x1F80, 0x1F8F, 'a'),
    accents(0x1F90, 0x1F97, 'n'),
    accents(0x1F98, 0x1F9F, 'h'),
    accents(0x1FA0, 0x1FAF, 'w'),
    accents(0x1FB0, 0x1FB4, 'a'),
    accents(0x1FB6, 0x1FBC, 'a'),
    accents(0x1FC2, 0x1FC4, 'n'),
    accents(0x1FC6, 0x1FC7, 'n'),
    accents(0x1FC8, 0x1FC9, 'e'),
    accents(0x1FCA, 0x1FCC, 'h'),
    accents(0x1FD0, 0x1FD3, 'i'),
    accents(0x1FD6, 0x1FDB, 'i'),
    accents(0x1FE0, 0x1FE3, 'u'),
    accents(0x1FE4, 0x1FE5, 'p'),
    accents(0x1FE6, 0x1FE7, 'u'),
    accents(0x1FE8, 0x1FEB, 'y'),
    accent(0x1FEC, 'p'),
    accent(0x1FEF, '`'),
    accents(0x1FF2, 0x1FF4, 'w'),
    accents(0x1FF6, 0x1FF7, 'w'),
    // spaces
    chars(0x2000, 0x200A, ' '),
    // dashes
    chars(0x2010, 0x2015, '-'),
    chars(0x2018, 0x2019, '\''),
    ch(0x201A, ','),
    ch(0x201B, '\''),
    chars(0x201C, 0x201E, '"'),
    ch(0x2024, '.'),
    text(0x2025, ".."),
    text(0x2026, "..."),
    // line and paragraph separators
    chars(0x2028, 0x2029, '\n'),
    ch(0x202F, ' '),
    ch(0x2032, '\''),
    ch(0x2033, '"'),
    ch(0x2039, '<'),
    ch(0x203A, '>'),
    ch(0x2044, '/'),
    ch(0x205F, ' '),
    ch(0x2070, '0'),
    ch(0x2071, 'i'),
    shift(0x2074, 0x2079, '4'),
    ch(0x207A, '+'),
    ch(0x207C, '='),
    ch(0x207D, '('),
    ch(0x207E, ')'),
    ch(0x207F, 'n'),
    shift(0x2080, 0x2089, '0'),
    ch(0x208A, '+'),
    ch(0x208C, '='),
    ch(0x208D, '('),
    ch(0x208E, ')'),
    ch(0x2090, 'a'),
    ch(0x2091, 'e'),
    ch(0x2092, 'o'),
    ch(0x2093, 'x'),
    ch(0x2094, 'e'),
    ch(0x2095, 'h'),
    ch(0x2096, 'k'),
    ch(0x2097, 'l'),
    ch(0x2098, 'm'),
    ch(0x2099, 'n'),
    ch(0x209A, 'p'),
    ch(0x209B, 's'),
    ch(0x209C, 't'),
    text(0x20A8, "rs"),
    ch(0x20AC, 'e'),
    ch(0x20B9, 'r'),
    ch(0x2102, 'c'),
    ch(0x2107, 'e'),
    ch(0x210A, 'g'),
    chars(0x210B, 0x210F, 'h'),
    chars(0x2110, 0x2111, 'i'),
    chars(0x2112, 0x2113, 'l'),
    ch(0x2115, 'n'),
    text(0x2116, "no"),
    ch(0x2119, 'p'),
    ch(0x211A, 'q'),
    chars(0x211B, 0x211D, 'r'),
    text(0x2120, "sm"),
    text(0x2121, "tel"),
    text(0x2122, "tm"),
    ch(0x2124, 'z'),
    ch(0x2128, 'z'),
    ch(0x212A, 'k'),
    accent(0x212B, 'a'),
    ch(0x212C, 'b'),
    ch(0x212D, 'c'),
    chars(0x212F, 0x2130, 'e'),
    ch(0x2131, 'f'),
    ch(0x2133, 'm'),
    ch(0x2134, 'o'),
    ch(0x2139, 'i'),
    text(0x213B, "fax"),
    chars(0x2145, 0x2146, 'd'),
    ch(0x2147, 'e'),
    ch(0x2148, 'i'),
    ch(0x2149, 'j'),
    ch(0x2160, 'i'),
    text(0x2161, "ii"),
    text(0x2162, "iii"),
    text(0x2163, "iv"),
    ch(0x2164, 'v'),
    text(0x2165, "vi"),
    text(0x2166, "vii"),
    text(0x2167, "viii"),
    text(0x2168, "ix"),
    ch(0x2169, 'x'),
    text(0x216A, "xi"),
    text(0x216B, "xii"),
    ch(0x216C, 'l'),
    ch(0x216D, 'c'),
    ch(0x216E, 'd'),
    ch(0x216F, 'm'),
    ch(0x2170, 'i'),
    text(0x2171, "ii"),
    text(0x2172, "iii"),
    text(0x2173, "iv"),
    ch(0x2174, 'v'),
    text(0x2175, "vi"),
    text(0x2176, "vii"),
    text(0x2177, "viii"),
    text(0x2178, "ix"),
    ch(0x2179, 'x'),
    text(0x217A, "xi"),
    text(0x217B, "xii"),
    ch(0x217C, 'l'),
    ch(0x217D, 'c'),
    ch(0x217E, 'd'),
    ch(0x217F, 'm'),
    ch(0x2202, 'd'),
    ch(0x2208, 'e'),
    ch(0x220F, 'n'),
    ch(0x2212, '-'),
    ch(0x2215, '/'),
    ch(0x2217, '*'),
    ch(0x2223, '|'),
    ch(0x2228, 'v'),
    ch(0x2229, 'n'),
    ch(0x222A, 'u'),
    ch(0x2236, ':'),
    ch(0x223C, '~'),
    accent(0x2260, '='),
    accent(0x226E, '<'),
    accent(0x226F, '>'),
    ch(0x2295, 'o'),
    ch(0x2297, 'x'),
    ch(0x2299, 'o'),
    ch(0x2373, 'i'),
    ch(0x2374, 'p'),
    ch(0x2375, 'w'),
    ch(0x237A, 'a'),
    shift(0x2460, 0x2468, '1'),
    text(0x2469, "10"),
    text(0x246A, "11"),
    text(0x246B, "12"),
    text(0x246C, "13"),
    text(0x246D, "14"),
    text(0x246E, "15"),
    text(0x246F, "16"),
    text(0x2470, "17"),
    text(0x2471, "18"),
    text(0x2472, "19"),
    text(0x2473, "20"),
    shift(0x2474, 0x247C, '1'),
    text(0x247D, "10"),
    text(0x247E, "11"),
    text(0x247F, "12"),
    text(0x2480, "13"),
    text(0x2481, "14"),
    text(0x2482, "15"),
    text(0x2483, "16"),
    text(0x2484, "17"),
    text(0x2485, "18"),
    text(0x2486, "19"),
    text(0x2487, "20"),
    shift(0x2488, 0x2490, '1'),
    text(0x2491, "10"),
    text(0x2492, "11"),
    text(0x2493, "12"),
    text(0x2494, "13"),
    text(0x2495, "14"),
    text(0x2496, "15"),
    text(0x2497, "16"),
    text(0x2498, "17"),
    text(0x2499, "18"),
    text(0x249A, "19"),
    text(0x249B, "20"),
    // parenthesized
    shift(0x249C, 0x24B5, 'a'),
    // circled capitals
    shift(0x24B6, 0x24CF, 'a'),
    // circled small
    shift(0x24D0, 0x24E9, 'a'),
    ch(0x24EA, '0'),
    text(0x24EB, "11"),
    text(0x24EC, "12"),
    text(0x24ED, "13"),
    text(0x24EE, "14"),
    text(0x24EF, "15"),
    text(0x24F0, "16"),
    text(0x24F1, "17"),
    text(0x24F2, "18"),
    text(0x24F3, "19"),
    text(0x24F4, "20"),
    shift(0x24F5, 0x24FD, '1'),
    text(0x24FE, "10"),
    ch(0x24FF, '0'),
    ch(0x25CB, 'o'),
    ch(0x25EF, 'o'),
    ch(0x2800, ' '),
    ch(0x2801, 'a'),
    ch(0x2803, 'b'),
    ch(0x2805, 'k'),
    ch(0x2807, 'l'),
    ch(0x2809, 'c'),
    ch(0x280A, 'i'),
    ch(0x280B, 'f'),
    ch(0x280D, 'm'),
    ch(0x280E, 's'),
    ch(0x280F, 'p'),
    ch(0x2811, 'e'),
    ch(0x2813, 'h'),
    ch(0x2815, 'o'),
    ch(0x2817, 'r'),
    ch(0x2819, 'd'),
    ch(0x281A, 'j'),
    ch(0x281B, 'g'),
    ch(0x281D, 'n'),
    ch(0x281E, 't'),
    ch(0x281F, 'q'),
    ch(0x2825, 'u'),
    ch(0x2827, 'v'),
    ch(0x282D, 'x'),
    ch(0x2835, 'z'),
    ch(0x283A, 'w'),
    ch(0x283D, 'y'),
    accents(0x2C60, 0x2C62, 'l'),
    accent(0x2C63, 'p'),
    accent(0x2C64, 'r'),
    accent(0x2C65, 'a'),
    accent(0x2C66, 't'),
    accents(0x2C67, 0x2C68, 'h'),
    accents(0x2C69, 0x2C6A, 'k'),
    accents(0x2C6B, 0x2C6C, 'z'),
    ch(0x2C6D, 'a'),
    accent(0x2C6E, 'm'),
    chars(0x2C6F, 0x2C70, 'a'),
    accent(0x2C71, 'v'),
    accents(0x2C72, 0x2C73, 'w'),
    accent(0x2C74, 'v'),
    accent(0x2C78, 'e'),
    accent(0x2C7A, 'o'),
    ch(0x2C7C, 'j'),
    ch(0x2C7D, 'v'),
    accent(0x2C7E, 's'),
    accent(0x2C7F, 'z'),
    ch(0x2C80, 'a'),
    ch(0x2C81, 'a'),
    ch(0x2C82, 'b'),
    ch(0x2C88, 'e'),
    ch(0x2C89, 'e'),
    ch(0x2C8C, 'z'),
    ch(0x2C8E, 'h'),
    ch(0x2C92, 'i'),
    ch(0x2C93, 'i'),
    ch(0x2C94, 'k'),
    ch(0x2C95, 'k'),
    ch(0x2C98, 'm'),
    ch(0x2C9A, 'n'),
    ch(0x2C9E, 'o'),
    ch(0x2C9F, 'o'),
    ch(0x2CA2, 'p'),
    ch(0x2CA3, 'p'),
    ch(0x2CA4, 'c'),
    ch(0x2CA5, 'c'),
    ch(0x2CA6, 't'),
    ch(0x2CA8, 'y'),
    ch(0x2CA9, 'y'),
    ch(0x2CAC, 'x'),
    ch(0x2CAD, 'x'),
    // ideographic space
    ch(0x3000, ' '),
    ch(0x3112, 't'),
    ch(0x3116, 'o'),
    ch(0x311A, 'y'),
    ch(0x3125, 'l'),
    ch(0x3129, 'u'),
    ch(0x3147, 'o'),
    ch(0x3163, 'l'),
    text(0x3250, "pte"),
    text(0x3251, "21"),
    text(0x3252, "22"),
    text(0x3253, "23"),
    text(0x3254, "24"),
    text(0x3255, "25"),
    text(0x3256, "26"),
    text(0x3257, "27"),
    text(0x3258, "28"),
    text(0x3259, "29"),
    text(0x325A, "30"),
    text(0x325B, "31"),
    text(0x325C, "32"),
    text(0x325D, "33"),
    text(0x325E, "34"),
    text(0x325F, "35"),
    text(0x32B1, "36"),
    text(0x32B2, "37"),
    text(0x32B3, "38"),
    text(0x32B4, "39"),
    text(0x32B5, "40"),
    text(0x32B6, "41"),
    text(0x32B7, "42"),
    text(0x32B8, "43"),
    text(0x32B9, "44"),
    text(0x32BA, "45"),
    text(0x32BB, "46"),
    text(0x32BC, "47"),
    text(0x32BD, "48"),
    text(0x32BE, "49"),
    text(0x32BF, "50"),
    text(0x32CC, "hg"),
    text(0x32CD, "erg"),
    text(0x32CE, "ev"),
    text(0x32CF, "ltd"),
    text(0x3371, "hpa"),
    text(0x3372, "da"),
    text(0x3373, "au"),
    text(0x3374, "bar"),
    text(0x3375, "ov"),
    text(0x3376, "pc"),
    text(0x3377, "dm"),
    text(0x3378, "dm2"),
    text(0x3379, "dm3"),
    text(0x337A, "iu"),
    text(0x3380, "pa"),
    text(0x3381, "na"),
    text(0x3383, "ma"),
    text(0x3384, "ka"),
    text(0x3385, "kb"),
    text(0x3386, "mb"),
    text(0x3387, "gb"),
    text(0x3388, "cal"),
    text(0x3389, "kcal"),
    text(0x338A, "pf"),
    text(0x338B, "nf"),
    text(0x338E, "mg"),
    text(0x338F, "kg"),
    text(0x3390, "hz"),
    text(0x3391, "khz"),
    text(0x3392, "mhz"),
    text(0x3393, "ghz"),
    text(0x3394, "thz"),
    text(0x3396, "ml"),
    text(0x3397, "dl"),
    text(0x3398, "kl"),
    text(0x3399, "fm"),
    text(0x339A, "nm"),
    text(0x339C, "mm"),
    text(0x339D, "cm"),
    text(0x339E, "km"),
    text(0x339F, "mm2"),
    text(0x33A0, "cm2"),
    text(0x33A1, "m2"),
    text(0x33A2, "km2"),
    text(0x33A3, "mm3"),
    text(0x33A4, "cm3"),
    text(0x33A5, "m3"),
    text(0x33A6, "km3"),
    text(0x33A9, "pa"),
    text(0x33AA, "kpa"),
    text(0x33AB, "mpa"),
    text(0x33AC, "gpa"),
    text(0x33AD, "rad"),
    text(0x33B0, "ps"),
    text(0x33B1, "ns"),
    text(0x33B3, "ms"),
    text(0x33B4, "pv"),
    text(0x33B5, "nv"),
    text(0x33B7, "mv"),
    text(0x33B8, "kv"),
    text(0x33B9, "mv"),
    text(0x33BA, "pw"),
    text(0x33BB, "nw"),
    text(0x33BD, "mw"),
    text(0x33BE, "kw"),
    text(0x33BF, "mw"),
    text(0x33C3, "bq"),
    text(0x33C4, "cc"),
    text(0x33C5, "cd"),
    text(0x33C8, "db"),
    text(0x33C9, "gy"),
    text(0x33CA, "ha"),
    text(0x33CB, "hp"),
    text(0x33CC, "in"),
    text(0x33CD, "kk"),
    text(0x33CE, "km"),
    text(0x33CF, "kt"),
    text(0x33D0, "lm"),
    text(0x33D1, "ln"),
    text(0x33D2, "log"),
    text(0x33D3, "lx"),
    text(0x33D4, "mb"),
    text(0x33D5, "mil"),
    text(0x33D6, "mol"),
    text(0x33D7, "ph"),
    text(0x33D9, "ppm"),
    text(0x33DA, "pr"),
    text(0x33DB, "sr"),
    text(0x33DC, "sv"),
    text(0x33DD, "wb"),
    text(0x33FF, "gal"),
    ch(0x4E02, 's'),
    ch(0x4E28, 'i'),
    ch(0x4E42, 'x'),
    ch(0x4E43, 'b'),
    ch(0x4E47, 'e'),
    ch(0x4E59, 'z'),
    ch(0x51E0, 'n'),
    ch(0x51F5, 'u'),
    ch(0x5200, 'd'),
    ch(0x531A, 'c'),
    ch(0x5342, 'a'),
    ch(0x5343, 'f'),
    ch(0x5344, 'h'),
    ch(0x5369, 'p'),
    ch(0x5C3A, 'r'),
    ch(0x5C71, 'w'),
    ch(0x722A, 'm'),
    ch(0x957F, 'k'),
    ch(0xA4D0, 'b'),
    ch(0xA4D1, 'p'),
    ch(0xA4D3, 'd'),
    ch(0xA4D4, 't'),
    ch(0xA4D6, 'g'),
    ch(0xA4D7, 'k'),
    ch(0xA4D9, 'j'),
    ch(0xA4DA, 'c'),
    ch(0xA4DC, 'z'),
    ch(0xA4DD, 'f'),
    ch(0xA4DF, 'm'),
    ch(0xA4E0, 'n'),
    ch(0xA4E1, 'l'),
    ch(0xA4E2, 's'),
    ch(0xA4E3, 'r'),
    ch(0xA4E6, 'v'),
    ch(0xA4E7, 'h'),
    ch(0xA4EA, 'w'),
    ch(0xA4EB, 'x'),
    ch(0xA4EC, 'y'),
    ch(0xA4EE, 'a'),
    ch(0xA4F0, 'e'),
    ch(0xA4F2, 'i'),
    ch(0xA4F3, 'o'),
    ch(0xA4F4, 'u'),
    shift(0xA620, 0xA629, '0'),
    chars(0xA644, 0xA645, 's'),
    texts(0xA728, 0xA729, "tz"),
    ch(0xA730, 'f'),
    ch(0xA731, 's'),
    texts(0xA732, 0xA733, "aa"),
    texts(0xA734, 0xA735, "ao"),
    texts(0xA736, 0xA737, "au"),
    texts(0xA738, 0xA73B, "av"),
    texts(0xA73C, 0xA73D, "ay"),
    accents(0xA740, 0xA745, 'k'),
    accents(0xA748, 0xA749, 'l'),
    accents(0xA74A, 0xA74D, 'o'),
    texts(0xA74E, 0xA74F, "oo"),
    accents(0xA750, 0xA755, 'p'),
    accents(0xA756, 0xA759, 'q'),
    accents(0xA75E, 0xA75F, 'v'),
    chars(0xA779, 0xA77A, 'd'),
    chars(0xA77B, 0xA77C, 'f'),
    ch(0xA77D, 'g'),
    chars(0xA780, 0xA781, 'l'),
    chars(0xA782, 0xA783, 'r'),
    chars(0xA784, 0xA785, 's'),
    chars(0xA786, 0xA787, 't'),
    accent(0xA78E, 'l'),
    accents(0xA790, 0xA791, 'n'),
    accents(0xA792, 0xA794, 'c'),
    accent(0xA795, 'h'),
    accents(0xA796, 0xA797, 'b'),
    accents(0xA798, 0xA799, 'f'),
    accents(0xA7A0, 0xA7A1, 'g'),
    accents(0xA7A2, 0xA7A3, 'k'),
    accents(0xA7A4, 0xA7A5, 'n'),
    accents(0xA7A6, 0xA7A7, 'r'),
    accents(0xA7A8, 0xA7A9, 's'),
    accent(0xA7AA, 'h'),
    ch(0xA7AC, 'g'),
    accent(0xA7AD, 'l'),
    ch(0xA7AE, 'i'),
    ch(0xA7AF, 'q'),
    accent(0xA7B2, 'j'),
    chars(0xA7B4, 0xA7B5, 'b'),
    accents(0xA7B8, 0xA7B9, 'u'),
    accent(0xA7C4, 'c'),
    accent(0xA7C5, 's'),
    accent(0xA7C6, 'z'),
    accents(0xA7C7, 0xA7C8, 'd'),
    accents(0xA7C9, 0xA7CA, 's'),
    ch(0xA7F2, 'c'),
    ch(0xA7F3, 'f'),
    ch(0xA7F4, 'q'),
    accent(0xA7F8, 'h'),
    shift(0xA8D0, 0xA8D9, '0'),
    shift(0xA900, 0xA909, '0'),
    shift(0xA9D0, 0xA9D9, '0'),
    shift(0xA9F0, 0xA9F9, '0'),
    shift(0xAA50, 0xAA59, '0'),
    accent(0xAB34, 'e'),
    accent(0xAB36, 'g'),
    accents(0xAB37, 0xAB39, 'l'),
    accent(0xAB3A, 'm'),
    accent(0xAB3B, 'n'),
    accent(0xAB46, 'r'),
    accent(0xAB49, 'r'),
    ch(0xAB4B, 'r'),
    accent(0xAB4C, 'r'),
    accent(0xAB4E, 'u'),
    accent(0xAB52, 'u'),
    accents(0xAB56, 0xAB59, 'x'),
    accent(0xAB5A, 'y'),
    accents(0xAB5D, 0xAB5E, 'l'),
    accent(0xAB5F, 'u'),
    ch(0xAB70, 'd'),
    ch(0xAB71, 'r'),
    ch(0xAB72, 't'),
    ch(0xAB75, 'i'),
    ch(0xAB79, 'y'),
    ch(0xAB7A, 'a'),
    ch(0xAB7B, 'j'),
    ch(0xAB7C, 'e'),
    ch(0xAB83, 'w'),
    ch(0xAB86, 'g'),
    ch(0xAB87, 'm'),
    ch(0xAB8B, 'h'),
    ch(0xAB8D, 'y'),
    ch(0xAB90, 'g'),
    ch(0xAB92, 'h'),
    ch(0xAB93, 'z'),
    ch(0xAB96, 'i'),
    ch(0xAB9B, 'e'),
    ch(0xAB9E, '4'),
    ch(0xAB9F, 'b'),
    ch(0xABA2, 'r'),
    ch(0xABA4, 'w'),
    ch(0xABA5, 's'),
    ch(0xABA9, 'v'),
    ch(0xABAA, 's'),
    ch(0xABAE, 'l'),
    ch(0xABAF, 'c'),
    ch(0xABB2, 'p'),
    ch(0xABB6, 'k'),
    ch(0xABB7, 'd'),
    ch(0xABBE, '6'),
    ch(0xABBF, 'y'),
    shift(0xABF0, 0xABF9, '0'),
    text(0xFB00, "ff"),
    text(0xFB01, "fi"),
    text(0xFB02, "fl"),
    text(0xFB03, "ffi"),
    text(0xFB04, "ffl"),
    texts(0xFB05, 0xFB06, "st"),
    ch(0xFB29, '+'),
    ch(0xFE10, ','),
    ch(0xFE13, ':'),
    ch(0xFE14, ';'),
    ch(0xFE15, '!'),
    ch(0xFE16, '?'),
    chars(0xFE33, 0xFE34, '_'),
    ch(0xFE35, '('),
    ch(0xFE36, ')'),
    ch(0xFE37, '{'),
    ch(0xFE38, '}'),
    ch(0xFE47, '['),
    ch(0xFE48, ']'),
    chars(0xFE4D, 0xFE4F, '_'),
    ch(0xFE50, ','),
    ch(0xFE52, '.'),
    ch(0xFE54, ';'),
    ch(0xFE55, ':'),
    ch(0xFE56, '?'),
    ch(0xFE57, '!'),
    ch(0xFE59, '('),
    ch(0xFE5A, ')'),
    ch(0xFE5B, '{'),
    ch(0xFE5C, '}'),
    ch(0xFE5F, '#'),
    ch(0xFE60, '&'),
    ch(0xFE61, '*'),
    ch(0xFE62, '+'),
    ch(0xFE63, '-'),
    ch(0xFE64, '<'),
    ch(0xFE65, '>'),
    ch(0xFE66, '='),
    ch(0xFE68, '\\'),
    ch(0xFE69, '$'),
    ch(0xFE6A, '%'),
    ch(0xFE6B, '@'),
    // fullwidth ASCII
    shift(0xFF01, 0xFF5E, '!'),
    ch(0xFF8C, 'j'),
    ch(0x102A0, 'a'),
    ch(0x102AB, 'o'),
    ch(0x10300, 'a'),
    ch(0x10301, 'b'),
    ch(0x10302, 'c'),
    ch(0x10303, 'd'),
    ch(0x10304, 'e'),
    ch(0x10305, 'f'),
    ch(0x10306, 'z'),
    ch(0x10307, 'h'),
    ch(0x10309, 'i'),
    ch(0x1030A, 'k'),
    ch(0x1030B, 'l'),
    ch(0x1030C, 'm'),
    ch(0x1030D, 'n'),
    ch(0x1030F, 'o'),
    ch(0x10310, 'p'),
    ch(0x10313, 'r'),
    ch(0x10314, 's'),
    ch(0x10315, 't'),
    ch(0x10316, 'u'),
    ch(0x10317, 'x'),
    ch(0x10404, 'o'),
    ch(0x10408, 'e'),
    ch(0x10415, 'c'),
    ch(0x1041B, 'l'),
    ch(0x10420, 's'),
    ch(0x1042C, 'o'),
    ch(0x10430, 'e'),
    ch(0x1043D, 'c'),
    ch(0x10443, 'l'),
    ch(0x10448, 's'),
    shift(0x104A0, 0x104A9, '0'),
    ch(0x10784, 'b'),
    accent(0x10785, 'b'),
    accents(0x1078B, 0x1078D, 'd'),
    ch(0x10792, 'g'),
    accents(0x10793, 0x10794, 'g'),
    accent(0x10795, 'h'),
    ch(0x10796, 'h'),
    accents(0x1079B, 0x1079D, 'l'),
    accent(0x107A2, 'o'),
    ch(0x107A5, 'q'),
    accents(0x107A8, 0x107A9, 'r'),
    ch(0x107AA, 'r'),
    accent(0x107AF, 't'),
    accent(0x107B0, 'v'),
    ch(0x107B2, 'y'),
    accent(0x107BA, 's'),
    shift(0x10D30, 0x10D39, '0'),
    shift(0x11066, 0x1106F, '0'),
    shift(0x110F0, 0x110F9, '0'),
    shift(0x11136, 0x1113F, '0'),
    shift(0x111D0, 0x111D9, '0'),
    shift(0x112F0, 0x112F9, '0'),
    shift(0x11450, 0x11459, '0'),
    shift(0x114D0, 0x114D9, '0'),
    shift(0x11650, 0x11659, '0'),
    shift(0x116C0, 0x116C9, '0'),
    shift(0x11730, 0x11739, '0'),
    shift(0x118E0, 0x118E9, '0'),
    shift(0x11950, 0x11959, '0'),
    shift(0x11C50, 0x11C59, '0'),
    shift(0x11D50, 0x11D59, '0'),
    shift(0x11DA0, 0x11DA9, '0'),
    shift(0x16A60, 0x16A69, '0'),
    shift(0x16AC0, 0x16AC9, '0'),
    shift(0x16B50, 0x16B59, '0'),
    // bold capitals
    shift(0x1D400, 0x1D419, 'A'),
    shift(0x1D41A, 0x1D433, 'a'),
    // italic capitals
    shift(0x1D434, 0x1D44D, 'A'),
    shift(0x1D44E, 0x1D467, 'a'),
    // bold italic capitals
    shift(0x1D468, 0x1D481, 'A'),
    shift(0x1D482, 0x1D49B, 'a'),
    // script capitals
    shift(0x1D49C, 0x1D4B5, 'A'),
    shift(0x1D4B6, 0x1D4CF, 'a'),
    // bold script capitals
    shift(0x1D4D0, 0x1D4E9, 'A'),
    shift(0x1D4EA, 0x1D503, 'a'),
    // fraktur capitals
    shift(0x1D504, 0x1D51D, 'A'),
    shift(0x1D51E, 0x1D537, 'a'),
    // double-struck capitals
    shift(0x1D538, 0x1D551, 'A'),
    shift(0x1D552, 0x1D56B, 'a'),
    // bold fraktur capitals
    shift(0x1D56C, 0x1D585, 'A'),
    shift(0x1D586, 0x1D59F, 'a'),
    // sans-serif capitals
    shift(0x1D5A0, 0x1D5B9, 'A'),
    shift(0x1D5BA, 0x1D5D3, 'a'),
    // sans-serif bold capitals
    shift(0x1D5D4, 0x1D5ED, 'A'),
    shift(0x1D5EE, 0x1D607, 'a'),
    // sans-serif italic capitals
    shift(0x1D608, 0x1D621, 'A'),
    shift(0x1D622, 0x1D63B, 'a'),
    // sans-serif bold italic capitals
    shift(0x1D63C, 0x1D655, 'A'),
    shift(0x1D656, 0x1D66F, 'a'),
    // monospace capitals
    shift(0x1D670, 0x1D689, 'A'),
    shift(0x1D68A, 0x1D6A3, 'a'),
    ch(0x1D6A4, 'i'),
    ch(0x1D6A5, 'j'),
    shift(0x1D7CE, 0x1D7D7, '0'),
    shift(0x1D7D8, 0x1D7E1, '0'),
    shift(0x1D7E2, 0x1D7EB, '0'),
    shift(0x1D7EC, 0x1D7F5, '0'),
    shift(0x1D7F6, 0x1D7FF, '0'),
    accent(0x1DF04, 'l'),
    accent(0x1DF09, 't'),
    accent(0x1DF11, 'l'),
    accent(0x1DF13, 'l'),
    accent(0x1DF16, 'r'),
    accent(0x1DF1A, 'i'),
    accent(0x1DF1B, 'o'),
    accent(0x1DF1D, 'c'),
    accent(0x1DF1E, 's'),
    shift(0x1E140, 0x1E149, '0'),
    shift(0x1E2F0, 0x1E2F9, '0'),
    shift(0x1E950, 0x1E959, '0'),
    // parenthesized capitals
    shift(0x1F110, 0x1F129, 'A'),
    ch(0x1F12A, 's'),
    ch(0x1F12B, 'c'),
    ch(0x1F12C, 'r'),
    text(0x1F12D, "cd"),
    text(0x1F12E, "wz"),
    // squared capitals
    shift(0x1F130, 0x1F149, 'A'),
    text(0x1F14A, "hv"),
    text(0x1F14B, "mv"),
    text(0x1F14C, "sd"),
    text(0x1F14D, "ss"),
    text(0x1F14E, "ppv"),
    text(0x1F14F, "wc"),
    // negative circled capitals
    shift(0x1F150, 0x1F169, 'A'),
    text(0x1F16A, "mc"),
    text(0x1F16B, "md"),
    text(0x1F16C, "mr"),
    // negative squared capitals
    shift(0x1F170, 0x1F189, 'A'),
    text(0x1F190, "dj"),
    text(0x1F191, "cl"),
    text(0x1F192, "cool"),
    text(0x1F193, "free"),
    text(0x1F194, "id"),
    text(0x1F195, "new"),
    text(0x1F196, "ng"),
    text(0x1F197, "ok"),
    text(0x1F198, "sos"),
    text(0x1F199, "up"),
    text(0x1F19A, "vs"),
    // regional indicators
    shift(0x1F1E6, 0x1F1FF, 'a'),
    text(0x1F51F, "10"),
    shift(0x1FBF0, 0x1FBF9, '0'),
];
