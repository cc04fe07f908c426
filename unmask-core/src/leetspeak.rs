//! leetspeak.rs - Decodes leetspeak while curing.
//!
//! Clusters such as `|-|` are matched with a leftmost-longest Aho-Corasick
//! automaton over a short lookahead window. Single-character substitutes
//! such as `3` only decode when they sit inside a word, so plain numbers
//! survive.
//!
//! License: MIT OR APACHE 2.0

use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use unmask_tables::leetspeak::{substitute, CLUSTERS, MAX_CLUSTER_LEN, MAX_SUBSTITUTION_RUN};

static CLUSTER_AUTOMATON: Lazy<DoubleArrayAhoCorasick<usize>> = Lazy::new(|| {
    DoubleArrayAhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostLongest)
        .build_with_values(CLUSTERS.iter().enumerate().map(|(idx, (cluster, _))| (*cluster, idx)))
        .expect("Failed to build leetspeak automaton from the static cluster table")
});

/// Characters that can start or continue a cluster.
fn is_cluster_char(ch: char) -> bool {
    ch.is_ascii_graphic() && !ch.is_ascii_alphabetic()
}

/// Tries to decode a cluster starting at `ch`.
///
/// Returns the letter and the number of characters consumed, `ch` included.
pub(crate) fn match_cluster(ch: char, lookahead: &[char]) -> Option<(char, usize)> {
    if !is_cluster_char(ch) {
        return None;
    }

    let mut window = [0u8; MAX_CLUSTER_LEN];
    window[0] = ch as u8;
    let mut len = 1;
    for &next in lookahead.iter().take(MAX_CLUSTER_LEN - 1) {
        if !is_cluster_char(next) {
            break;
        }
        window[len] = next as u8;
        len += 1;
    }
    if len < 2 {
        return None;
    }

    let found = CLUSTER_AUTOMATON.leftmost_find_iter(&window[..len]).next()?;
    if found.start() != 0 {
        return None;
    }
    let (_, letter) = CLUSTERS[found.value()];
    // Window bytes are ASCII, so byte and character counts agree.
    Some((letter, found.end()))
}

/// Decodes a single substitute character when it sits inside a word.
///
/// The run of substitutes containing `ch` must be short, touch a letter on
/// at least one side and not be glued to a digit on either side. At most
/// [`MAX_SUBSTITUTION_RUN`] characters of `lookahead` are read.
pub(crate) fn substitute_in_word(ch: char, lookahead: &[char], previous: Option<char>) -> Option<char> {
    let letter = substitute(ch)?;

    let run = 1 + lookahead
        .iter()
        .take(MAX_SUBSTITUTION_RUN)
        .take_while(|&&next| substitute(next).is_some())
        .count();
    if run > MAX_SUBSTITUTION_RUN {
        return None;
    }
    let next = lookahead.get(run - 1).copied();

    let touches_letter = previous.is_some_and(char::is_alphabetic) || next.is_some_and(char::is_alphabetic);
    let touches_digit =
        previous.is_some_and(|c| c.is_ascii_digit()) || next.is_some_and(|c| c.is_ascii_digit());

    (touches_letter && !touches_digit).then_some(letter)
}
