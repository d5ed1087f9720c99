//! The hyphenation capability.

use std::sync::Arc;

/// Something that can propose split points inside a word.
///
/// Implementations live with the typesetting engine (a Liang-pattern
/// dictionary, the built-in English heuristic); styles only hold the
/// capability. `positions` returns char indices at which the word may be
/// broken, sorted ascending.
pub trait Hyphenate {
    fn positions(&self, word: &str) -> Vec<usize>;
}

/// Shared handle to a hyphenator.
pub type HyphenatorRef = Arc<dyn Hyphenate + Send + Sync>;

/// A style's hyphenation setting. Absence of a setting (at the `Style`
/// level) means "inherit"; this type is the explicit choice.
#[derive(Clone)]
pub enum Hyphens {
    /// Hyphenation disabled for this subtree.
    Off,
    /// Use the given provider.
    Provider(HyphenatorRef),
}

impl std::fmt::Debug for Hyphens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hyphens::Off => write!(f, "Hyphens::Off"),
            Hyphens::Provider(_) => write!(f, "Hyphens::Provider(..)"),
        }
    }
}
