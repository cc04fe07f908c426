// unmask-tables/src/lib.rs
#![no_std]

use core::cmp::Ordering;

pub mod classes;
pub mod confusables;
pub mod leetspeak;
pub mod scripts;

/// Inclusive code point range, `(first, last)`.
pub type CodepointRange = (u32, u32);

/// Binary search over a table of disjoint, ascending inclusive ranges.
pub(crate) fn search<T, F>(table: &[T], code: u32, bounds: F) -> Option<&T>
where
    F: Fn(&T) -> CodepointRange,
{
    table
        .binary_search_by(|row| {
            let (first, last) = bounds(row);
            if last < code {
                Ordering::Less
            } else if first > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| &table[idx])
}

/// Checks that a table is strictly ascending and free of overlaps.
#[cfg(test)]
pub(crate) fn is_ordered<T, F>(table: &[T], bounds: F) -> bool
where
    F: Fn(&T) -> CodepointRange,
{
    table.iter().all(|row| {
        let (first, last) = bounds(row);
        first <= last
    }) && table.windows(2).all(|pair| bounds(&pair[0]).1 < bounds(&pair[1]).0)
}
