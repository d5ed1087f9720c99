//! The Standard 14 fonts every conforming PDF reader provides.

use crate::{kerning, widths};

/// One of the fourteen built-in Type1 fonts.
///
/// These need no embedded font program; a `/BaseFont` name and
/// `/WinAnsiEncoding` are enough. Metrics come from the Adobe Font Metrics
/// tables in [`crate::widths`] and [`crate::kerning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard14 {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Standard14 {
    /// The `/BaseFont` name as it appears in the font dictionary.
    pub fn base_font_name(self) -> &'static str {
        match self {
            Standard14::Helvetica => "Helvetica",
            Standard14::HelveticaBold => "Helvetica-Bold",
            Standard14::HelveticaOblique => "Helvetica-Oblique",
            Standard14::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Standard14::TimesRoman => "Times-Roman",
            Standard14::TimesBold => "Times-Bold",
            Standard14::TimesItalic => "Times-Italic",
            Standard14::TimesBoldItalic => "Times-BoldItalic",
            Standard14::Courier => "Courier",
            Standard14::CourierBold => "Courier-Bold",
            Standard14::CourierOblique => "Courier-Oblique",
            Standard14::CourierBoldOblique => "Courier-BoldOblique",
            Standard14::Symbol => "Symbol",
            Standard14::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Look a tag up by its `/BaseFont` name.
    pub fn from_base_font_name(name: &str) -> Option<Self> {
        Some(match name {
            "Helvetica" => Standard14::Helvetica,
            "Helvetica-Bold" => Standard14::HelveticaBold,
            "Helvetica-Oblique" => Standard14::HelveticaOblique,
            "Helvetica-BoldOblique" => Standard14::HelveticaBoldOblique,
            "Times-Roman" => Standard14::TimesRoman,
            "Times-Bold" => Standard14::TimesBold,
            "Times-Italic" => Standard14::TimesItalic,
            "Times-BoldItalic" => Standard14::TimesBoldItalic,
            "Courier" => Standard14::Courier,
            "Courier-Bold" => Standard14::CourierBold,
            "Courier-Oblique" => Standard14::CourierOblique,
            "Courier-BoldOblique" => Standard14::CourierBoldOblique,
            "Symbol" => Standard14::Symbol,
            "ZapfDingbats" => Standard14::ZapfDingbats,
            _ => return None,
        })
    }

    /// Select the family variant matching the requested emphasis.
    ///
    /// Symbol and ZapfDingbats have no variants and return themselves.
    pub fn with_emphasis(self, bold: bool, italic: bool) -> Self {
        use Standard14::*;
        match (self.family(), bold, italic) {
            (Family::Helvetica, false, false) => Helvetica,
            (Family::Helvetica, true, false) => HelveticaBold,
            (Family::Helvetica, false, true) => HelveticaOblique,
            (Family::Helvetica, true, true) => HelveticaBoldOblique,
            (Family::Times, false, false) => TimesRoman,
            (Family::Times, true, false) => TimesBold,
            (Family::Times, false, true) => TimesItalic,
            (Family::Times, true, true) => TimesBoldItalic,
            (Family::Courier, false, false) => Courier,
            (Family::Courier, true, false) => CourierBold,
            (Family::Courier, false, true) => CourierOblique,
            (Family::Courier, true, true) => CourierBoldOblique,
            (Family::Symbol, ..) => Symbol,
            (Family::ZapfDingbats, ..) => ZapfDingbats,
        }
    }

    fn family(self) -> Family {
        use Standard14::*;
        match self {
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => {
                Family::Helvetica
            }
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => Family::Times,
            Courier | CourierBold | CourierOblique | CourierBoldOblique => Family::Courier,
            Symbol => Family::Symbol,
            ZapfDingbats => Family::ZapfDingbats,
        }
    }

    /// Advance width for a WinAnsi byte, in 1/1000 em.
    pub fn advance(self, byte: u8) -> u16 {
        use Standard14::*;
        match self {
            Helvetica | HelveticaOblique => widths::helvetica(byte),
            HelveticaBold | HelveticaBoldOblique => widths::helvetica_bold(byte),
            TimesRoman => widths::times_roman(byte),
            TimesBold => widths::times_bold(byte),
            TimesItalic => widths::times_italic(byte),
            TimesBoldItalic => widths::times_bold_italic(byte),
            Courier | CourierBold | CourierOblique | CourierBoldOblique => widths::courier(byte),
            Symbol => widths::symbol(byte),
            ZapfDingbats => widths::zapf_dingbats(byte),
        }
    }

    /// Kern delta between two WinAnsi bytes, in 1/1000 em. Zero for the
    /// monospaced and symbolic faces.
    pub fn kern(self, left: u8, right: u8) -> i16 {
        match self.family() {
            Family::Helvetica => kerning::helvetica_kern(left, right),
            Family::Times => kerning::times_kern(left, right),
            Family::Courier | Family::Symbol | Family::ZapfDingbats => 0,
        }
    }

    /// Typographic ascent, in 1/1000 em.
    pub fn ascent(self) -> i16 {
        match self.family() {
            Family::Helvetica => 718,
            Family::Times => 683,
            Family::Courier => 629,
            Family::Symbol | Family::ZapfDingbats => 700,
        }
    }

    /// Typographic descent (negative), in 1/1000 em.
    pub fn descent(self) -> i16 {
        match self.family() {
            Family::Helvetica => -207,
            Family::Times => -217,
            Family::Courier => -157,
            Family::Symbol | Family::ZapfDingbats => -200,
        }
    }

    /// Capital height, in 1/1000 em.
    pub fn cap_height(self) -> i16 {
        match self.family() {
            Family::Helvetica => 718,
            Family::Times => 662,
            Family::Courier => 562,
            Family::Symbol | Family::ZapfDingbats => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Helvetica,
    Times,
    Courier,
    Symbol,
    ZapfDingbats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_font_names_round_trip() {
        for tag in [
            Standard14::Helvetica,
            Standard14::TimesBoldItalic,
            Standard14::CourierOblique,
            Standard14::Symbol,
            Standard14::ZapfDingbats,
        ] {
            assert_eq!(
                Standard14::from_base_font_name(tag.base_font_name()),
                Some(tag)
            );
        }
    }

    #[test]
    fn emphasis_selects_family_variant() {
        assert_eq!(
            Standard14::Helvetica.with_emphasis(true, false),
            Standard14::HelveticaBold
        );
        assert_eq!(
            Standard14::TimesRoman.with_emphasis(true, true),
            Standard14::TimesBoldItalic
        );
        assert_eq!(
            Standard14::Symbol.with_emphasis(true, true),
            Standard14::Symbol
        );
    }

    #[test]
    fn helvetica_space_is_278() {
        assert_eq!(Standard14::Helvetica.advance(b' '), 278);
    }

    #[test]
    fn kern_only_for_proportional_families() {
        assert!(Standard14::Helvetica.kern(b'A', b'V') < 0);
        assert_eq!(Standard14::Courier.kern(b'A', b'V'), 0);
    }
}
