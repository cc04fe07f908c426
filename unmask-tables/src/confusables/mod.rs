//! Confusable code points and the canonical text they cure to.
//!
//! Rows cover inclusive code point ranges and are kept sorted, so a lookup
//! is a binary search. Targets are lowercase where the source has case;
//! case is restored later from the source character when asked for.

mod table;

use crate::search;
use table::CONFUSABLES;

/// What the code points of a row cure to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Every code point cures to the same character.
    Char(char),
    /// A code point cures to `base` advanced by its distance from the
    /// start of the row. Used for blocks that mirror ASCII one-to-one.
    Shift(char),
    /// Every code point cures to the same multi-character string.
    Str(&'static str),
}

/// One row of the confusables table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confusable {
    pub first: u32,
    pub last: u32,
    pub mapping: Mapping,
    /// Set when the source is an accented form of its target, so retaining
    /// diacritics should leave it alone.
    pub diacritic: bool,
}

/// The resolved replacement for a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    Char(char),
    Str(&'static str),
}

impl Confusable {
    pub fn contains(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&(ch as u32))
    }

    /// Resolves the replacement for `ch`, which must fall inside this row.
    pub fn replacement(&self, ch: char) -> Replacement {
        match self.mapping {
            Mapping::Char(to) => Replacement::Char(to),
            Mapping::Str(to) => Replacement::Str(to),
            Mapping::Shift(base) => {
                let offset = (ch as u32).saturating_sub(self.first);
                Replacement::Char(char::from_u32(base as u32 + offset).unwrap_or(base))
            }
        }
    }
}

/// Finds the row covering `ch`.
pub fn lookup(ch: char) -> Option<&'static Confusable> {
    search(CONFUSABLES, ch as u32, |row| (row.first, row.last))
}

/// Number of rows in the table.
pub fn row_count() -> usize {
    CONFUSABLES.len()
}
