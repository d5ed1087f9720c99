//! Text styles and their composition.

use font_craft::{Font, Standard14};

use crate::color::Color;
use crate::hyphenate::{Hyphens, HyphenatorRef};

/// A partial style: every field optional, unset fields inherit.
///
/// Styles compose right-biased: `child.over(&parent)` keeps the child's
/// setting wherever it has one. A fully-defaulted [`ResolvedStyle`] comes
/// out of [`Style::resolve`].
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub font: Option<Font>,
    pub size: Option<f64>,
    pub italic: Option<bool>,
    pub bold: Option<bool>,
    pub color: Option<Color>,
    pub line_spacing: Option<f64>,
    pub hyphens: Option<Hyphens>,
}

impl Style {
    pub fn new() -> Self {
        Style::default()
    }

    pub fn font(mut self, font: impl Into<Font>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn line_spacing(mut self, ratio: f64) -> Self {
        self.line_spacing = Some(ratio);
        self
    }

    /// Inject a hyphenation provider for this subtree.
    pub fn hyphens(mut self, provider: HyphenatorRef) -> Self {
        self.hyphens = Some(Hyphens::Provider(provider));
        self
    }

    /// Disable hyphenation for this subtree.
    pub fn no_hyphenation(mut self) -> Self {
        self.hyphens = Some(Hyphens::Off);
        self
    }

    /// Right-biased merge: `self` wins wherever it is set.
    pub fn over(self, parent: &Style) -> Style {
        Style {
            font: self.font.or_else(|| parent.font.clone()),
            size: self.size.or(parent.size),
            italic: self.italic.or(parent.italic),
            bold: self.bold.or(parent.bold),
            color: self.color.or(parent.color),
            line_spacing: self.line_spacing.or(parent.line_spacing),
            hyphens: self.hyphens.or_else(|| parent.hyphens.clone()),
        }
    }

    /// Fill the defaults and apply emphasis to the font handle.
    pub fn resolve(&self) -> ResolvedStyle {
        let bold = self.bold.unwrap_or(false);
        let italic = self.italic.unwrap_or(false);
        let font = self
            .font
            .clone()
            .unwrap_or(Font::Standard(Standard14::Helvetica))
            .with_emphasis(bold, italic);
        ResolvedStyle {
            font,
            size: self.size.unwrap_or(DEFAULT_SIZE),
            italic,
            bold,
            color: self.color.unwrap_or(Color::BLACK),
            line_spacing: self.line_spacing.unwrap_or(DEFAULT_LINE_SPACING),
            hyphens: self.hyphens.clone(),
        }
    }
}

/// Default font size in points.
pub const DEFAULT_SIZE: f64 = 12.0;

/// Default baseline-to-baseline ratio.
pub const DEFAULT_LINE_SPACING: f64 = 1.25;

/// A style with every field decided.
///
/// `hyphens` stays tri-state: `None` means no explicit choice was made
/// anywhere in the tree, and the engine applies its built-in fallback.
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    pub font: Font,
    pub size: f64,
    pub italic: bool,
    pub bold: bool,
    pub color: Color,
    pub line_spacing: f64,
    pub hyphens: Option<Hyphens>,
}

impl ResolvedStyle {
    /// Baseline height contribution of this style: ascent scaled by size
    /// and line spacing, in points.
    pub fn line_height(&self) -> f64 {
        self.font.ascent_per_mille() / 1000.0 * self.size * self.line_spacing
    }
}
