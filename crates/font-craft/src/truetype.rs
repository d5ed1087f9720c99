//! Embedded TrueType fonts.
//!
//! A [`TrueTypeFont`] is parsed once and then shared read-only behind an
//! `Arc`; every metric the shaper asks for repeatedly (advances, the cmap,
//! kern pairs) is extracted into plain lookup structures at parse time, so
//! documents reusing a handle never touch the raw tables again.

use std::collections::{BTreeMap, HashMap};

use ttf_parser::{Face, GlyphId, Tag};

use crate::error::FontError;

/// Tables that must be present for a font to be embeddable as
/// `/CIDFontType2` with a rebuilt glyph program.
const REQUIRED_TABLES: [&str; 7] = ["head", "hhea", "maxp", "cmap", "hmtx", "loca", "glyf"];

/// A parsed TrueType font, ready for measurement and subsetting.
pub struct TrueTypeFont {
    data: Vec<u8>,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    cap_height: i16,
    italic_angle: f32,
    bbox: [i16; 4],
    num_glyphs: u16,
    advances: Vec<u16>,
    cmap: BTreeMap<u32, u16>,
    kern: HashMap<(u16, u16), i16>,
    postscript_name: String,
}

impl TrueTypeFont {
    /// Parse a font file.
    ///
    /// Fails with [`FontError::Parse`] when the bytes are not an sfnt, and
    /// with [`FontError::MissingTable`] when a table needed for embedding
    /// is absent (CFF-flavoured OpenType lands here via `glyf`).
    pub fn parse(data: Vec<u8>) -> Result<Self, FontError> {
        let face = Face::parse(&data, 0).map_err(|e| FontError::Parse {
            reason: format!("{e:?}"),
        })?;

        for table in REQUIRED_TABLES {
            let bytes: [u8; 4] = table.as_bytes().try_into().unwrap();
            if face.raw_face().table(Tag::from_bytes(&bytes)).is_none() {
                return Err(FontError::MissingTable { table });
            }
        }

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(FontError::Malformed {
                table: "head",
                reason: "unitsPerEm is zero".into(),
            });
        }

        let num_glyphs = face.number_of_glyphs();
        let advances = (0..num_glyphs)
            .map(|gid| face.glyph_hor_advance(GlyphId(gid)).unwrap_or(0))
            .collect();

        let mut cmap = BTreeMap::new();
        if let Some(table) = face.tables().cmap {
            for subtable in table.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if let Some(gid) = subtable.glyph_index(cp) {
                        cmap.entry(cp).or_insert(gid.0);
                    }
                });
            }
        }

        let kern = face
            .raw_face()
            .table(Tag::from_bytes(b"kern"))
            .map(parse_kern_pairs)
            .unwrap_or_default();

        let postscript_name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|n| n.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let ascent = face.ascender();
        let bbox = face.global_bounding_box();

        Ok(TrueTypeFont {
            units_per_em,
            ascent,
            descent: face.descender(),
            cap_height: face.capital_height().unwrap_or(ascent),
            italic_angle: face.italic_angle(),
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            num_glyphs,
            advances,
            cmap,
            kern,
            postscript_name,
            data,
        })
    }

    /// The raw font file.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// A raw table slice by tag, if present.
    pub fn table(&self, tag: [u8; 4]) -> Option<&[u8]> {
        ttf_parser::RawFace::parse(&self.data, 0)
            .ok()?
            .table(Tag::from_bytes(&tag))
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    pub fn italic_angle(&self) -> f32 {
        self.italic_angle
    }

    /// Global bounding box `[x_min, y_min, x_max, y_max]` in font units.
    pub fn bbox(&self) -> [i16; 4] {
        self.bbox
    }

    /// Glyph id for a codepoint, if the font covers it.
    pub fn glyph_index(&self, ch: char) -> Option<u16> {
        self.cmap.get(&(ch as u32)).copied()
    }

    /// Advance of a glyph in raw font units.
    pub fn advance(&self, gid: u16) -> u16 {
        self.advances.get(gid as usize).copied().unwrap_or(0)
    }

    /// Advance of a glyph scaled to the 1000-unit text space.
    ///
    /// PDF width arrays and all layout math use this space, not font
    /// units; see the `W` array requirements in ISO 32000-1 §9.7.4.3.
    pub fn advance_per_mille(&self, gid: u16) -> f64 {
        self.advance(gid) as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Kern delta between two glyphs, scaled to the 1000-unit space.
    pub fn kern_per_mille(&self, left: u16, right: u16) -> f64 {
        let raw = self.kern.get(&(left, right)).copied().unwrap_or(0);
        raw as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Ascent in 1/1000 em.
    pub fn ascent_per_mille(&self) -> f64 {
        self.ascent as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Descent (negative) in 1/1000 em.
    pub fn descent_per_mille(&self) -> f64 {
        self.descent as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Capital height in 1/1000 em.
    pub fn cap_height_per_mille(&self) -> f64 {
        self.cap_height as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Ascent/descent/cap-height in font units (for descriptor emission).
    pub fn vertical_metrics(&self) -> (i16, i16, i16) {
        (self.ascent, self.descent, self.cap_height)
    }

    /// The codepoint → glyph mapping extracted from the unicode cmap
    /// subtables.
    pub fn codepoint_map(&self) -> &BTreeMap<u32, u16> {
        &self.cmap
    }
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("postscript_name", &self.postscript_name)
            .field("units_per_em", &self.units_per_em)
            .field("num_glyphs", &self.num_glyphs)
            .finish_non_exhaustive()
    }
}

/// Extract horizontal format-0 kern pairs from a raw `kern` table.
///
/// Only the original Microsoft layout (version 0 as u16) is read; the
/// Apple `u32`-versioned layout and non-horizontal or variable subtables
/// are skipped.
fn parse_kern_pairs(data: &[u8]) -> HashMap<(u16, u16), i16> {
    let mut pairs = HashMap::new();
    let read_u16 = |at: usize| -> Option<u16> {
        data.get(at..at + 2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
    };

    if read_u16(0) != Some(0) {
        return pairs;
    }
    let n_tables = match read_u16(2) {
        Some(n) => n,
        None => return pairs,
    };

    let mut offset = 4usize;
    for _ in 0..n_tables {
        let length = match read_u16(offset + 2) {
            Some(l) => l as usize,
            None => break,
        };
        let coverage = match read_u16(offset + 4) {
            Some(c) => c,
            None => break,
        };
        let horizontal = coverage & 0x0001 != 0;
        let format = coverage >> 8;

        if horizontal && format == 0 {
            if let Some(n_pairs) = read_u16(offset + 6) {
                let mut at = offset + 14;
                for _ in 0..n_pairs {
                    let (Some(left), Some(right), Some(value)) =
                        (read_u16(at), read_u16(at + 2), read_u16(at + 4))
                    else {
                        break;
                    };
                    pairs.insert((left, right), value as i16);
                    at += 6;
                }
            }
        }

        if length == 0 {
            break;
        }
        offset += length;
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage() {
        let err = TrueTypeFont::parse(b"not a font".to_vec()).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }

    #[test]
    fn kern_parser_reads_format0_pairs() {
        // version 0, one horizontal format-0 subtable with two pairs.
        let mut table = Vec::new();
        table.extend_from_slice(&0u16.to_be_bytes()); // version
        table.extend_from_slice(&1u16.to_be_bytes()); // nTables
        table.extend_from_slice(&0u16.to_be_bytes()); // subtable version
        table.extend_from_slice(&(14u16 + 12).to_be_bytes()); // length
        table.extend_from_slice(&0x0001u16.to_be_bytes()); // coverage: horizontal
        table.extend_from_slice(&2u16.to_be_bytes()); // nPairs
        table.extend_from_slice(&[0; 6]); // search fields, unused
        for (l, r, v) in [(4u16, 5u16, -40i16), (7, 8, 12)] {
            table.extend_from_slice(&l.to_be_bytes());
            table.extend_from_slice(&r.to_be_bytes());
            table.extend_from_slice(&v.to_be_bytes());
        }

        let pairs = parse_kern_pairs(&table);
        assert_eq!(pairs.get(&(4, 5)), Some(&-40));
        assert_eq!(pairs.get(&(7, 8)), Some(&12));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn kern_parser_skips_vertical_subtables() {
        let mut table = Vec::new();
        table.extend_from_slice(&0u16.to_be_bytes());
        table.extend_from_slice(&1u16.to_be_bytes());
        table.extend_from_slice(&0u16.to_be_bytes());
        table.extend_from_slice(&26u16.to_be_bytes());
        table.extend_from_slice(&0x0000u16.to_be_bytes()); // not horizontal
        table.extend_from_slice(&1u16.to_be_bytes());
        table.extend_from_slice(&[0; 6]);
        table.extend_from_slice(&3u16.to_be_bytes());
        table.extend_from_slice(&4u16.to_be_bytes());
        table.extend_from_slice(&(-10i16).to_be_bytes());

        assert!(parse_kern_pairs(&table).is_empty());
    }
}
