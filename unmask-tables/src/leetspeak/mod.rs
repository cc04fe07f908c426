//! Leetspeak look-alikes.
//!
//! Two shapes are covered: multi-character punctuation clusters that draw
//! a letter (`|-|` for `h`), and single characters that stand in for a
//! letter when they sit next to real letters (`3` for `e` in `l33t`).

/// Longest cluster, in characters.
pub const MAX_CLUSTER_LEN: usize = 4;

/// Longest run of single-character substitutes treated as part of a word.
pub const MAX_SUBSTITUTION_RUN: usize = 8;

/// Punctuation clusters and the letter each one draws.
///
/// Every cluster is ASCII, holds at least one punctuation character and no
/// letters, and appears exactly once.
pub static CLUSTERS: &[(&str, char)] = &[
    ("/-\\", 'a'),
    ("/\\", 'a'),
    ("|3", 'b'),
    ("]3", 'b'),
    ("[3", 'b'),
    ("|8", 'b'),
    ("!3", 'b'),
    ("|)", 'd'),
    ("[)", 'd'),
    ("|]", 'd'),
    ("|>", 'd'),
    ("[-", 'e'),
    ("|=", 'f'),
    ("]=", 'f'),
    ("(_+", 'g'),
    ("(_,", 'g'),
    ("[_+", 'g'),
    ("|-|", 'h'),
    ("]-[", 'h'),
    ("}{", 'h'),
    ("|~|", 'h'),
    ("]~[", 'h'),
    (")-(", 'h'),
    ("][", 'i'),
    ("_|", 'j'),
    ("_]", 'j'),
    ("_)", 'j'),
    ("|<", 'k'),
    ("|{", 'k'),
    ("|(", 'k'),
    ("|_", 'l'),
    ("[_", 'l'),
    ("]_", 'l'),
    ("1_", 'l'),
    ("|\\/|", 'm'),
    ("/\\/\\", 'm'),
    ("^^", 'm'),
    ("|^^|", 'm'),
    ("|\\|", 'n'),
    ("/\\/", 'n'),
    ("]\\[", 'n'),
    ("^/", 'n'),
    ("()", 'o'),
    ("[]", 'o'),
    ("|*", 'p'),
    ("|^", 'p'),
    ("()_", 'q'),
    ("(_,)", 'q'),
    ("0_", 'q'),
    ("|2", 'r'),
    ("|?", 'r'),
    ("/2", 'r'),
    ("]2", 'r'),
    ("|`", 'r'),
    ("-|-", 't'),
    ("~|~", 't'),
    ("'|'", 't'),
    ("|_|", 'u'),
    ("(_)", 'u'),
    ("[_]", 'u'),
    ("\\_/", 'u'),
    ("\\/", 'v'),
    ("\\|", 'v'),
    ("\\/\\/", 'w'),
    ("\\^/", 'w'),
    ("|/\\|", 'w'),
    ("><", 'x'),
    (")(", 'x'),
    ("`/", 'y'),
    ("'/", 'y'),
    ("\\|/", 'y'),
    ("7_", 'z'),
    ("~/_", 'z'),
    ("-/_", 'z'),
    (">_", 'z'),
];

/// Returns the letter a single character stands in for.
pub fn substitute(ch: char) -> Option<char> {
    Some(match ch {
        '0' => 'o',
        '1' => 'i',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '7' => 't',
        '8' => 'b',
        '9' => 'g',
        '@' => 'a',
        '$' => 's',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clusters_are_well_formed() {
        for (idx, (cluster, letter)) in CLUSTERS.iter().enumerate() {
            assert!(cluster.is_ascii(), "{} is not ASCII", cluster);
            assert!(cluster.chars().count() <= MAX_CLUSTER_LEN, "{} is too long", cluster);
            assert!(cluster.chars().count() >= 2, "{} is too short", cluster);
            assert!(cluster.chars().any(|c| c.is_ascii_punctuation()), "{} has no punctuation", cluster);
            assert!(!cluster.chars().any(|c| c.is_ascii_alphabetic()), "{} contains a letter", cluster);
            assert!(!cluster.chars().any(|c| c.is_ascii_whitespace()), "{} contains whitespace", cluster);
            assert!(letter.is_ascii_lowercase());
            assert!(
                CLUSTERS[idx + 1..].iter().all(|(other, _)| other != cluster),
                "{} appears twice",
                cluster
            );
        }
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute('3'), Some('e'));
        assert_eq!(substitute('$'), Some('s'));
        assert_eq!(substitute('2'), None);
        assert_eq!(substitute('a'), None);
    }
}
