//! Shaping: styled text runs to glyph runs and the atom stream.
//!
//! Kerning is applied pairwise inside a fragment; no pair spans a style
//! boundary or a discretionary break opportunity. Whitespace becomes glue
//! (elastic in justified mode), hyphenation points become flagged
//! penalties, and hard newlines become forced breaks.

use doc_model::{Font, Hyphens, HyphenatorRef, ResolvedStyle};
use font_craft::winansi;

use crate::atoms::{self, Atom};
use crate::hyphenate::Heuristic;

/// Space stretchability in justified mode, as a fraction of the space
/// width (the classic plain-TeX interword values).
const SPACE_STRETCH: f64 = 1.0 / 2.0;

/// Space shrinkability in justified mode, as a fraction of the space
/// width.
const SPACE_SHRINK: f64 = 1.0 / 3.0;

/// Stand-in for infinite stretch in ragged modes, in points. Large enough
/// that every line's adjustment ratio rounds to zero badness.
const RAGGED_STRETCH: f64 = 1.0e5;

/// Fallback space advance (1/1000 em) for fonts without a space glyph.
const FALLBACK_SPACE: f64 = 250.0;

/// Fallback hyphen advance (1/1000 em) for fonts without a hyphen glyph.
const FALLBACK_HYPHEN: f64 = 333.0;

/// A glyph as it will be written into a content stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    /// WinAnsi byte for a Standard 14 font.
    WinAnsi(u8),
    /// Glyph id (used as CID) for an embedded font.
    Cid(u16),
}

/// One shaped codepoint: its rendered glyph, natural advance, and the
/// kern adjustment applied before it (zero for the first glyph).
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    pub codepoint: char,
    pub glyph: Glyph,
    pub advance: f64,
    pub kern: f64,
}

/// An unbreakable run of shaped glyphs sharing one style.
#[derive(Debug, Clone)]
pub struct GlyphRun {
    pub style: ResolvedStyle,
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance including kerning, in points.
    pub width: f64,
}

/// A codepoint the font could not map, rendered as `?` or `.notdef`.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub codepoint: char,
    pub font: String,
}

/// Result of shaping one paragraph.
pub struct ShapeOutcome {
    pub atoms: Vec<Atom>,
    pub substitutions: Vec<Substitution>,
}

/// Shape flattened paragraph runs into the breaker's atom stream,
/// terminated canonically.
pub fn shape_paragraph(runs: &[(String, ResolvedStyle)], justify: bool) -> ShapeOutcome {
    let mut atoms = Vec::new();
    let mut substitutions = Vec::new();

    for (text, style) in runs {
        let hyphenator = hyphenator_for(style);
        let space = space_glue(style, justify);

        let mut word = String::new();
        for ch in text.chars() {
            if ch == '\n' {
                flush_word(&mut word, style, hyphenator.as_ref(), &mut atoms, &mut substitutions);
                atoms.push(Atom::penalty(0.0, atoms::FORCE_BREAK, false));
                atoms.push(Atom::glue(0.0, 0.0, 0.0));
            } else if ch.is_whitespace() {
                flush_word(&mut word, style, hyphenator.as_ref(), &mut atoms, &mut substitutions);
                atoms.push(space.clone());
            } else {
                word.push(ch);
            }
        }
        flush_word(&mut word, style, hyphenator.as_ref(), &mut atoms, &mut substitutions);
    }

    atoms::push_terminator(&mut atoms);
    ShapeOutcome {
        atoms,
        substitutions,
    }
}

/// Shape a single unbreakable fragment.
///
/// Used for word fragments and for the hyphen glyph the filler appends
/// when a line ends at a taken discretionary break.
pub fn shape_fragment(
    text: &str,
    style: &ResolvedStyle,
    substitutions: &mut Vec<Substitution>,
) -> GlyphRun {
    let scale = style.size / 1000.0;
    let mut glyphs: Vec<ShapedGlyph> = Vec::new();
    let mut width = 0.0;

    for ch in text.chars() {
        let (glyph, advance) = map_glyph(&style.font, ch, substitutions);
        let kern = match glyphs.last() {
            Some(prev) => kern_between(&style.font, prev.glyph, glyph) * scale,
            None => 0.0,
        };
        let advance = advance * scale;
        width += kern + advance;
        glyphs.push(ShapedGlyph {
            codepoint: ch,
            glyph,
            advance,
            kern,
        });
    }

    GlyphRun {
        style: style.clone(),
        glyphs,
        width,
    }
}

/// Advance of the space character for a style, in points.
pub fn space_width(style: &ResolvedStyle) -> f64 {
    style
        .font
        .advance_per_mille(' ')
        .unwrap_or(FALLBACK_SPACE)
        * style.size
        / 1000.0
}

/// Advance of the hyphen character for a style, in points.
pub fn hyphen_width(style: &ResolvedStyle) -> f64 {
    style
        .font
        .advance_per_mille('-')
        .unwrap_or(FALLBACK_HYPHEN)
        * style.size
        / 1000.0
}

fn space_glue(style: &ResolvedStyle, justify: bool) -> Atom {
    let width = space_width(style);
    if justify {
        Atom::glue(width, width * SPACE_STRETCH, width * SPACE_SHRINK)
    } else {
        Atom::glue(width, RAGGED_STRETCH, 0.0)
    }
}

fn hyphenator_for(style: &ResolvedStyle) -> Option<HyphenatorRef> {
    match &style.hyphens {
        None => Some(Heuristic::shared()),
        Some(Hyphens::Off) => None,
        Some(Hyphens::Provider(provider)) => Some(provider.clone()),
    }
}

/// Emit a word as boxes separated by flagged penalties at its
/// hyphenation points.
fn flush_word(
    word: &mut String,
    style: &ResolvedStyle,
    hyphenator: Option<&HyphenatorRef>,
    atoms: &mut Vec<Atom>,
    substitutions: &mut Vec<Substitution>,
) {
    if word.is_empty() {
        return;
    }
    let text = std::mem::take(word);

    let positions = hyphenator
        .map(|h| h.positions(&text))
        .unwrap_or_default();

    let chars: Vec<char> = text.chars().collect();
    let mut fragments: Vec<String> = Vec::new();
    let mut start = 0;
    for &p in positions.iter().filter(|&&p| p > 0 && p < chars.len()) {
        fragments.push(chars[start..p].iter().collect());
        start = p;
    }
    fragments.push(chars[start..].iter().collect());

    let last = fragments.len() - 1;
    for (i, fragment) in fragments.iter().enumerate() {
        let run = shape_fragment(fragment, style, substitutions);
        atoms.push(Atom::Box {
            width: run.width,
            run,
        });
        if i < last {
            // An explicit dash already renders its own hyphen; only
            // synthesized breaks pay the hyphen's width.
            let width = if fragment.ends_with('-') {
                0.0
            } else {
                hyphen_width(style)
            };
            atoms.push(Atom::penalty(width, atoms::HYPHEN_COST, true));
        }
    }
}

fn map_glyph(font: &Font, ch: char, substitutions: &mut Vec<Substitution>) -> (Glyph, f64) {
    match font {
        Font::Standard(tag) => match winansi::encode(ch) {
            Some(byte) => (Glyph::WinAnsi(byte), tag.advance(byte) as f64),
            None => {
                substitutions.push(Substitution {
                    codepoint: ch,
                    font: tag.base_font_name().to_string(),
                });
                (
                    Glyph::WinAnsi(winansi::REPLACEMENT),
                    tag.advance(winansi::REPLACEMENT) as f64,
                )
            }
        },
        Font::Embedded(ttf) => match ttf.glyph_index(ch) {
            Some(gid) => (Glyph::Cid(gid), ttf.advance_per_mille(gid)),
            None => {
                substitutions.push(Substitution {
                    codepoint: ch,
                    font: ttf.postscript_name().to_string(),
                });
                (Glyph::Cid(0), ttf.advance_per_mille(0))
            }
        },
    }
}

fn kern_between(font: &Font, left: Glyph, right: Glyph) -> f64 {
    match (font, left, right) {
        (Font::Standard(tag), Glyph::WinAnsi(l), Glyph::WinAnsi(r)) => tag.kern(l, r) as f64,
        (Font::Embedded(ttf), Glyph::Cid(l), Glyph::Cid(r)) => ttf.kern_per_mille(l, r),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Standard14, Style};

    fn helvetica_12() -> ResolvedStyle {
        Style::new().resolve()
    }

    #[test]
    fn fragment_width_sums_advances_and_kerns() {
        let style = helvetica_12();
        let mut subs = Vec::new();
        let run = shape_fragment("AV", &style, &mut subs);

        let expected = (667.0 + 667.0 - 70.0) * 12.0 / 1000.0;
        assert!((run.width - expected).abs() < 1e-9);
        assert_eq!(run.glyphs[1].kern, -70.0 * 12.0 / 1000.0);
        assert!(subs.is_empty());
    }

    #[test]
    fn unmappable_codepoint_becomes_question_mark() {
        let style = helvetica_12();
        let mut subs = Vec::new();
        let run = shape_fragment("漢", &style, &mut subs);

        assert_eq!(run.glyphs[0].glyph, Glyph::WinAnsi(b'?'));
        assert_eq!(
            subs,
            vec![Substitution {
                codepoint: '漢',
                font: "Helvetica".to_string(),
            }]
        );
    }

    #[test]
    fn spaces_become_glue_with_tex_ratios() {
        let outcome = shape_paragraph(&[("a b".to_string(), helvetica_12())], true);
        let space = 278.0 * 12.0 / 1000.0;
        // box, glue, box, terminator glue, terminator penalty
        assert_eq!(outcome.atoms.len(), 5);
        match outcome.atoms[1] {
            Atom::Glue {
                width,
                stretch,
                shrink,
            } => {
                assert!((width - space).abs() < 1e-9);
                assert!((stretch - space / 2.0).abs() < 1e-9);
                assert!((shrink - space / 3.0).abs() < 1e-9);
            }
            _ => panic!("expected glue between words"),
        }
    }

    #[test]
    fn ragged_mode_gets_large_finite_stretch() {
        let outcome = shape_paragraph(&[("a b".to_string(), helvetica_12())], false);
        match outcome.atoms[1] {
            Atom::Glue {
                stretch, shrink, ..
            } => {
                assert_eq!(stretch, RAGGED_STRETCH);
                assert_eq!(shrink, 0.0);
            }
            _ => panic!("expected glue between words"),
        }
    }

    #[test]
    fn newline_forces_a_break() {
        let outcome = shape_paragraph(&[("A\nB".to_string(), helvetica_12())], true);
        assert!(matches!(
            outcome.atoms[1],
            Atom::Penalty { cost, .. } if cost == f64::NEG_INFINITY
        ));
        assert!(matches!(outcome.atoms[2], Atom::Glue { width, .. } if width == 0.0));
    }

    #[test]
    fn hyphenation_points_become_flagged_penalties() {
        let outcome = shape_paragraph(&[("running".to_string(), helvetica_12())], true);
        // "runn" + flagged penalty + "ing" + terminator
        let penalties: Vec<_> = outcome
            .atoms
            .iter()
            .filter(|a| matches!(a, Atom::Penalty { flagged: true, .. }))
            .collect();
        assert_eq!(penalties.len(), 1);
        match penalties[0] {
            Atom::Penalty { width, cost, .. } => {
                assert!((*width - 333.0 * 12.0 / 1000.0).abs() < 1e-9);
                assert_eq!(*cost, atoms::HYPHEN_COST);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn explicit_dash_break_costs_no_extra_width() {
        let outcome = shape_paragraph(&[("well-known".to_string(), helvetica_12())], true);
        let penalty = outcome
            .atoms
            .iter()
            .find(|a| matches!(a, Atom::Penalty { flagged: true, .. }))
            .unwrap();
        assert!(matches!(penalty, Atom::Penalty { width, .. } if *width == 0.0));
    }

    #[test]
    fn no_hyphenation_when_style_disables_it() {
        let style = Style::new().no_hyphenation().resolve();
        let outcome = shape_paragraph(&[("running".to_string(), style)], true);
        assert!(!outcome
            .atoms
            .iter()
            .any(|a| matches!(a, Atom::Penalty { flagged: true, .. })));
    }
}
