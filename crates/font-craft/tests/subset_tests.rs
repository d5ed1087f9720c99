//! Subsetter tests against the synthetic five-glyph font from
//! `font-fixtures` (`.notdef`, A, a composite B referencing A, C, and a
//! deliberately fat D).

use std::collections::BTreeSet;

use font_craft::subset::subset;
use font_craft::truetype::TrueTypeFont;
use font_fixtures::{mini_font, outlines, raw_glyph, UNITS_PER_EM};

fn used(chars: &[char]) -> BTreeSet<char> {
    chars.iter().copied().collect()
}

#[test]
fn parses_synthetic_font() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    assert_eq!(font.num_glyphs(), 5);
    assert_eq!(font.units_per_em(), UNITS_PER_EM);
    assert_eq!(font.glyph_index('A'), Some(1));
    assert_eq!(font.glyph_index('D'), Some(4));
    assert_eq!(font.glyph_index('z'), None);
    assert_eq!(font.advance(1), 600);
    assert_eq!(font.advance_per_mille(1), 600.0);
}

#[test]
fn subset_keeps_used_glyph_ids_and_shrinks() {
    let original = mini_font();
    let font = TrueTypeFont::parse(original.clone()).unwrap();
    let result = subset(&font, &used(&['A', 'C'])).unwrap();

    assert_eq!(
        result.used_gids.iter().copied().collect::<Vec<_>>(),
        vec![0, 1, 3]
    );
    assert_eq!(result.num_glyphs, 4);
    // 'D' carried most of the glyf bytes; dropping it must shrink the file.
    assert!(result.bytes.len() < original.len());
}

#[test]
fn subset_reparses_with_same_outline_bytes() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let result = subset(&font, &used(&['A', 'C'])).unwrap();

    let face = ttf_parser::Face::parse(&result.bytes, 0).unwrap();
    assert_eq!(face.number_of_glyphs(), 4);

    // Used glyphs keep their ids and their exact outline bytes.
    assert_eq!(raw_glyph(&result.bytes, 1), outlines()[1]);
    assert_eq!(raw_glyph(&result.bytes, 3), outlines()[3]);
    // The unused id in between collapses to an empty span.
    assert!(raw_glyph(&result.bytes, 2).is_empty());
}

#[test]
fn subset_cmap_covers_only_used_codepoints() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let result = subset(&font, &used(&['A', 'C'])).unwrap();

    let reparsed = TrueTypeFont::parse(result.bytes).unwrap();
    assert_eq!(reparsed.glyph_index('A'), Some(1));
    assert_eq!(reparsed.glyph_index('C'), Some(3));
    assert_eq!(reparsed.glyph_index('B'), None);
    assert_eq!(reparsed.glyph_index('D'), None);
}

#[test]
fn subset_loca_spans_all_glyph_ids() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let result = subset(&font, &used(&['A'])).unwrap();

    let raw = ttf_parser::RawFace::parse(&result.bytes, 0).unwrap();
    let loca = raw.table(ttf_parser::Tag::from_bytes(b"loca")).unwrap();
    // Short format: (numGlyphs + 1) u16 entries.
    assert_eq!(loca.len(), (result.num_glyphs as usize + 1) * 2);
}

#[test]
fn subset_hmtx_has_full_metrics_for_kept_range() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let result = subset(&font, &used(&['A', 'C'])).unwrap();

    let reparsed = TrueTypeFont::parse(result.bytes).unwrap();
    assert_eq!(reparsed.advance(1), 600);
    assert_eq!(reparsed.advance(3), 800);
}

#[test]
fn composite_pulls_in_component_glyphs() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let result = subset(&font, &used(&['B'])).unwrap();

    // 'B' is gid 2, a composite over gid 1.
    assert!(result.used_gids.contains(&2));
    assert!(result.used_gids.contains(&1));
    assert_eq!(raw_glyph(&result.bytes, 1), outlines()[1]);
}

#[test]
fn subsetting_is_deterministic() {
    let font = TrueTypeFont::parse(mini_font()).unwrap();
    let a = subset(&font, &used(&['A', 'B', 'C'])).unwrap();
    let b = subset(&font, &used(&['A', 'B', 'C'])).unwrap();
    assert_eq!(a.bytes, b.bytes);
    assert_eq!(a.tag, b.tag);

    let c = subset(&font, &used(&['A'])).unwrap();
    assert_ne!(a.tag, c.tag);
}
