//! Hyphenation providers.
//!
//! Two implementations of the [`Hyphenate`] capability: a Liang-pattern
//! dictionary through the `hyphenation` crate, and a small English
//! heuristic used when no provider was injected.

use std::sync::Arc;

use doc_model::{Hyphenate, HyphenatorRef};
use hyphenation::{Hyphenator, Language, Load, Standard};
use once_cell::sync::Lazy;

/// Minimum characters left before a split.
const MIN_LEADING: usize = 2;

/// Minimum characters carried to the next line by a dash split.
const MIN_TRAILING: usize = 3;

/// Embedded en-US patterns, loaded once per process.
static EN_US: Lazy<Standard> = Lazy::new(|| {
    Standard::from_embedded(Language::EnglishUS)
        .expect("embedded en-US dictionary is always loadable")
});

/// Liang-pattern hyphenation (the same patterns TeX and LibreOffice use).
pub struct Patterns;

impl Patterns {
    /// Shared handle to the embedded en-US dictionary.
    pub fn english_us() -> HyphenatorRef {
        Arc::new(Patterns)
    }
}

impl Hyphenate for Patterns {
    fn positions(&self, word: &str) -> Vec<usize> {
        let n = word.chars().count();
        EN_US
            .hyphenate(word)
            .breaks
            .iter()
            .map(|&byte| word[..byte].chars().count())
            .filter(|&p| p >= MIN_LEADING && n - p >= MIN_TRAILING)
            .collect()
    }
}

/// English-only fallback heuristic: splits after an explicit dash and
/// before the common suffixes `-ing`, `-ed`, `-tion`, `-ly`.
pub struct Heuristic;

impl Heuristic {
    pub fn shared() -> HyphenatorRef {
        Arc::new(Heuristic)
    }
}

const SUFFIXES: [&str; 4] = ["tion", "ing", "ed", "ly"];

impl Hyphenate for Heuristic {
    fn positions(&self, word: &str) -> Vec<usize> {
        let chars: Vec<char> = word.chars().collect();
        let n = chars.len();
        let mut out: Vec<usize> = Vec::new();

        for (i, &c) in chars.iter().enumerate() {
            if c == '-' {
                let p = i + 1;
                if p >= MIN_LEADING && n.saturating_sub(p) >= MIN_TRAILING {
                    out.push(p);
                }
            }
        }

        let lower: String = chars.iter().flat_map(|c| c.to_lowercase()).collect();
        for suffix in SUFFIXES {
            if lower.ends_with(suffix) && lower.len() == n {
                let p = n - suffix.chars().count();
                if p >= MIN_LEADING {
                    out.push(p);
                }
            }
        }

        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_splits_before_common_suffixes() {
        assert_eq!(Heuristic.positions("running"), vec![4]);
        assert_eq!(Heuristic.positions("nation"), vec![2]);
        assert_eq!(Heuristic.positions("jumped"), vec![4]);
        assert_eq!(Heuristic.positions("quickly"), vec![5]);
    }

    #[test]
    fn heuristic_splits_after_explicit_dash() {
        assert_eq!(Heuristic.positions("well-known"), vec![5]);
    }

    #[test]
    fn heuristic_enforces_minimums() {
        // Too little leading material.
        assert!(Heuristic.positions("ping").is_empty());
        // Dash too close to the end.
        assert!(Heuristic.positions("ab-cd").is_empty());
        assert!(Heuristic.positions("x").is_empty());
    }

    #[test]
    fn heuristic_positions_are_sorted() {
        let positions = Heuristic.positions("self-winding");
        assert_eq!(positions, vec![5, 9]);
    }

    #[test]
    fn patterns_split_long_words() {
        let positions = Patterns.positions("hyphenation");
        assert!(!positions.is_empty());
        let n = "hyphenation".len();
        for p in positions {
            assert!(p >= MIN_LEADING && n - p >= MIN_TRAILING);
        }
    }

    #[test]
    fn patterns_leave_short_words_alone() {
        assert!(Patterns.positions("cat").is_empty());
    }
}
