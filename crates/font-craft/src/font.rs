//! The unified font handle.

use std::sync::Arc;

use crate::standard::Standard14;
use crate::truetype::TrueTypeFont;
use crate::winansi;

/// A font a style can reference: one of the Standard 14 tags, or an
/// embedded TrueType file parsed once and shared behind an `Arc`.
///
/// Handles are cheap to clone and compare; two embedded handles are equal
/// when they share the same parsed font.
#[derive(Debug, Clone)]
pub enum Font {
    Standard(Standard14),
    Embedded(Arc<TrueTypeFont>),
}

impl Font {
    /// Advance of a codepoint in 1/1000 em, or `None` when the font has no
    /// mapping for it (the caller substitutes and records).
    pub fn advance_per_mille(&self, ch: char) -> Option<f64> {
        match self {
            Font::Standard(tag) => winansi::encode(ch).map(|b| tag.advance(b) as f64),
            Font::Embedded(ttf) => ttf.glyph_index(ch).map(|gid| ttf.advance_per_mille(gid)),
        }
    }

    /// Kern delta between two codepoints in 1/1000 em; zero when either
    /// side is unmapped or the pair is not kerned.
    pub fn kern_per_mille(&self, left: char, right: char) -> f64 {
        match self {
            Font::Standard(tag) => match (winansi::encode(left), winansi::encode(right)) {
                (Some(l), Some(r)) => tag.kern(l, r) as f64,
                _ => 0.0,
            },
            Font::Embedded(ttf) => match (ttf.glyph_index(left), ttf.glyph_index(right)) {
                (Some(l), Some(r)) => ttf.kern_per_mille(l, r),
                _ => 0.0,
            },
        }
    }

    /// Typographic ascent in 1/1000 em.
    pub fn ascent_per_mille(&self) -> f64 {
        match self {
            Font::Standard(tag) => tag.ascent() as f64,
            Font::Embedded(ttf) => ttf.ascent_per_mille(),
        }
    }

    /// Typographic descent (negative) in 1/1000 em.
    pub fn descent_per_mille(&self) -> f64 {
        match self {
            Font::Standard(tag) => tag.descent() as f64,
            Font::Embedded(ttf) => ttf.descent_per_mille(),
        }
    }

    /// Capital height in 1/1000 em.
    pub fn cap_height_per_mille(&self) -> f64 {
        match self {
            Font::Standard(tag) => tag.cap_height() as f64,
            Font::Embedded(ttf) => ttf.cap_height_per_mille(),
        }
    }

    /// Whether the font can render this codepoint without substitution.
    pub fn covers(&self, ch: char) -> bool {
        match self {
            Font::Standard(_) => winansi::encode(ch).is_some(),
            Font::Embedded(ttf) => ttf.glyph_index(ch).is_some(),
        }
    }

    /// Select the family variant for the requested emphasis. Embedded
    /// fonts carry a single design and are returned unchanged.
    pub fn with_emphasis(&self, bold: bool, italic: bool) -> Font {
        match self {
            Font::Standard(tag) => Font::Standard(tag.with_emphasis(bold, italic)),
            Font::Embedded(_) => self.clone(),
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Font::Standard(a), Font::Standard(b)) => a == b,
            (Font::Embedded(a), Font::Embedded(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Standard14> for Font {
    fn from(tag: Standard14) -> Self {
        Font::Standard(tag)
    }
}

impl From<Arc<TrueTypeFont>> for Font {
    fn from(ttf: Arc<TrueTypeFont>) -> Self {
        Font::Embedded(ttf)
    }
}
