//! offset_map.rs - Maps byte ranges of cured text back to the original input.
//!
//! Curing records one span per translation step: the bytes it produced in
//! the cured text and the bytes it consumed from the original. Spans are
//! contiguous on both sides, so the original ranges partition the input and
//! dropped characters show up as spans with an empty cured range.
//!
//! Maps are only built by the curer and are read-only everywhere else.

use std::ops::Range;

/// One translation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub cured: Range<usize>,
    pub original: Range<usize>,
}

impl Span {
    /// `true` when the original characters were dropped.
    pub fn is_dropped(&self) -> bool {
        self.cured.is_empty()
    }
}

/// Ordered spans covering a cured text and the input it came from.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OffsetMap {
    spans: Vec<Span>,
}

impl OffsetMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        OffsetMap {
            spans: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, cured: Range<usize>, original: Range<usize>) {
        debug_assert!(self.spans.last().map_or(0, |s| s.cured.end) == cured.start);
        debug_assert!(self.spans.last().map_or(0, |s| s.original.end) == original.start);
        self.spans.push(Span { cured, original });
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of cured bytes covered.
    pub fn len(&self) -> usize {
        self.spans.last().map_or(0, |s| s.cured.end)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of original bytes covered.
    pub fn original_len(&self) -> usize {
        self.spans.last().map_or(0, |s| s.original.end)
    }

    /// The original range that produced the cured byte at `cured_byte`.
    pub fn original_range_at(&self, cured_byte: usize) -> Option<Range<usize>> {
        let idx = self.spans.partition_point(|s| s.cured.end <= cured_byte);
        self.spans
            .get(idx)
            .filter(|s| s.cured.contains(&cured_byte))
            .map(|s| s.original.clone())
    }

    /// Maps a non-empty cured byte range to the smallest original range
    /// whose translation covers it.
    ///
    /// Characters dropped directly after the last covered span are absorbed
    /// into the result, so a mutation of the range also removes them.
    pub fn original_range(&self, cured: Range<usize>) -> Option<Range<usize>> {
        if cured.start >= cured.end || cured.end > self.len() {
            return None;
        }

        let first = self.spans.partition_point(|s| s.cured.end <= cured.start);
        let mut last = self.spans.partition_point(|s| s.cured.start < cured.end) - 1;
        while self.spans.get(last + 1).is_some_and(Span::is_dropped) {
            last += 1;
        }

        Some(self.spans[first].original.start..self.spans[last].original.end)
    }

    /// One original range per cured byte, in order.
    pub fn byte_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.spans
            .iter()
            .flat_map(|s| std::iter::repeat(s.original.clone()).take(s.cured.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "xab" cured from "ｘ\u{200B}ä\u{7}b":
    //   x   <- 0..3
    //   ""  <- 3..6   (dropped)
    //   a   <- 6..8
    //   ""  <- 8..9   (dropped)
    //   b   <- 9..10
    fn sample() -> OffsetMap {
        let mut map = OffsetMap::with_capacity(5);
        map.push(0..1, 0..3);
        map.push(1..1, 3..6);
        map.push(1..2, 6..8);
        map.push(2..2, 8..9);
        map.push(2..3, 9..10);
        map
    }

    #[test]
    fn test_lengths() {
        let map = sample();
        assert_eq!(map.len(), 3);
        assert_eq!(map.original_len(), 10);
        assert!(!map.is_empty());
        assert!(OffsetMap::default().is_empty());
    }

    #[test]
    fn test_original_range_absorbs_trailing_drops() {
        let map = sample();
        assert_eq!(map.original_range(0..1), Some(0..6));
        assert_eq!(map.original_range(1..2), Some(6..9));
        assert_eq!(map.original_range(2..3), Some(9..10));
        assert_eq!(map.original_range(0..3), Some(0..10));
        assert_eq!(map.original_range(1..3), Some(6..10));
    }

    #[test]
    fn test_original_range_rejects_bad_ranges() {
        let map = sample();
        assert_eq!(map.original_range(1..1), None);
        assert_eq!(map.original_range(2..4), None);
    }

    #[test]
    fn test_multi_byte_translation() {
        // "ae" <- 0..2 (one source character), "x" <- 2..3
        let mut map = OffsetMap::default();
        map.push(0..2, 0..2);
        map.push(2..3, 2..3);
        assert_eq!(map.original_range(1..2), Some(0..2));
        assert_eq!(map.original_range(1..3), Some(0..3));
        assert_eq!(map.original_range_at(1), Some(0..2));
        assert_eq!(map.original_range_at(3), None);
    }

    #[test]
    fn test_byte_ranges() {
        let map = sample();
        let ranges: Vec<_> = map.byte_ranges().collect();
        assert_eq!(ranges, vec![0..3, 6..8, 9..10]);
    }
}
