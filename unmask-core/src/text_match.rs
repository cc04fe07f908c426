// unmask-core/src/text_match.rs
//! Provides the match type reported by the matcher and consumed by the
//! mutator, plus helpers that keep user text out of debug logs.

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if user text is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("UNMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A half-open byte range `[start, end)` into the original, uncured input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub const fn new(start: usize, end: usize) -> Self {
        Match { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched slice of `original`, if the range is valid for it.
    pub fn slice<'a>(&self, original: &'a str) -> Option<&'a str> {
        original.get(self.range())
    }
}

impl From<Range<usize>> for Match {
    fn from(range: Range<usize>) -> Self {
        Match::new(range.start, range.end)
    }
}

impl From<Match> for Range<usize> {
    fn from(m: Match) -> Self {
        m.range()
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} bytes]", s.len())
    }
}

/// Returns `content` itself when debug PII is allowed, a redaction otherwise.
pub fn loggable(content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_sensitive(content)
    }
}

pub fn log_match_debug(module_path: &str, needle: &str, m: &Match, original_content: &str) {
    debug!(
        "{} Found match for needle '{}' at {}..{}: Original='{}'",
        module_path,
        loggable(needle),
        m.start,
        m.end,
        loggable(original_content)
    );
}

pub fn log_mutation_debug(module_path: &str, original_content: &str, replacement: &str, count: usize) {
    debug!(
        "{} Mutation: {} match(es) in Original='{}' replaced with '{}'",
        module_path,
        count,
        loggable(original_content),
        loggable(replacement)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("a much longer secret"), "[REDACTED: 20 bytes]".to_string());
    }

    #[test]
    fn test_match_accessors() {
        let m = Match::from(4..9);
        assert_eq!(m.len(), 5);
        assert!(!m.is_empty());
        assert_eq!(m.slice("you funny one"), Some("funny"));
        assert_eq!(Match::new(0, 20).slice("short"), None);
        assert_eq!(Range::from(m), 4..9);
    }

    #[test]
    fn test_match_ordering() {
        let mut matches = vec![Match::new(5, 6), Match::new(0, 3), Match::new(0, 2)];
        matches.sort();
        assert_eq!(matches, vec![Match::new(0, 2), Match::new(0, 3), Match::new(5, 6)]);
    }
}
