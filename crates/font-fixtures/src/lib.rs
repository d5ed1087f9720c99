//! Synthetic TrueType fonts assembled in code, so tests can assert on
//! exact glyph bytes without binary fixtures in the repository.
//!
//! [`mini_font`] builds a five-glyph font: `.notdef`, a simple `A`, a
//! composite `B` referencing `A`, a simple `C`, and a deliberately fat
//! `D` whose removal makes size reductions observable.

/// Units per em of the synthetic font.
pub const UNITS_PER_EM: u16 = 1000;

/// Advance widths by glyph id.
pub const ADVANCES: [u16; 5] = [500, 600, 700, 800, 900];

/// Glyph outlines by id. Lengths are kept even so `loca` spans compare
/// exactly between original and subset.
pub fn outlines() -> Vec<Vec<u8>> {
    let simple = |seed: u8, len: usize| -> Vec<u8> {
        let mut g = Vec::with_capacity(len);
        g.extend_from_slice(&1i16.to_be_bytes()); // numberOfContours
        g.extend_from_slice(&[0; 8]); // bbox
        while g.len() < len {
            g.push(seed);
        }
        g
    };

    // Composite referencing glyph 1 with word args and no transform.
    let mut composite = Vec::new();
    composite.extend_from_slice(&(-1i16).to_be_bytes());
    composite.extend_from_slice(&[0; 8]);
    composite.extend_from_slice(&0x0001u16.to_be_bytes()); // ARG_1_AND_2_ARE_WORDS
    composite.extend_from_slice(&1u16.to_be_bytes()); // component glyph id
    composite.extend_from_slice(&[0; 4]); // word args

    vec![
        Vec::new(),        // 0: .notdef
        simple(0xAA, 24),  // 1: 'A'
        composite,         // 2: 'B'
        simple(0xCC, 32),  // 3: 'C'
        simple(0xDD, 400), // 4: 'D'
    ]
}

/// Assemble the complete font: head, hhea, maxp, cmap (format 4 mapping
/// `'A'..='D'` to gids 1..=4), hmtx, loca (short), and glyf.
pub fn mini_font() -> Vec<u8> {
    let outlines = outlines();
    let num_glyphs = outlines.len() as u16;

    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    loca.extend_from_slice(&0u16.to_be_bytes());
    for outline in &outlines {
        glyf.extend_from_slice(outline);
        loca.extend_from_slice(&((glyf.len() / 2) as u16).to_be_bytes());
    }

    let mut head = Vec::new();
    head.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    head.extend_from_slice(&0u32.to_be_bytes()); // fontRevision
    head.extend_from_slice(&0u32.to_be_bytes()); // checkSumAdjustment
    head.extend_from_slice(&0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    head.extend_from_slice(&0u16.to_be_bytes()); // flags
    head.extend_from_slice(&UNITS_PER_EM.to_be_bytes());
    head.extend_from_slice(&[0; 16]); // created + modified
    head.extend_from_slice(&0i16.to_be_bytes()); // xMin
    head.extend_from_slice(&(-200i16).to_be_bytes()); // yMin
    head.extend_from_slice(&900i16.to_be_bytes()); // xMax
    head.extend_from_slice(&800i16.to_be_bytes()); // yMax
    head.extend_from_slice(&0u16.to_be_bytes()); // macStyle
    head.extend_from_slice(&8u16.to_be_bytes()); // lowestRecPPEM
    head.extend_from_slice(&2i16.to_be_bytes()); // fontDirectionHint
    head.extend_from_slice(&0i16.to_be_bytes()); // indexToLocFormat: short
    head.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    assert_eq!(head.len(), 54);

    let mut hhea = Vec::new();
    hhea.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    hhea.extend_from_slice(&800i16.to_be_bytes()); // ascender
    hhea.extend_from_slice(&(-200i16).to_be_bytes()); // descender
    hhea.extend_from_slice(&0i16.to_be_bytes()); // lineGap
    hhea.extend_from_slice(&900u16.to_be_bytes()); // advanceWidthMax
    hhea.extend_from_slice(&[0; 22]); // side bearings .. metricDataFormat
    hhea.extend_from_slice(&num_glyphs.to_be_bytes()); // numberOfHMetrics
    assert_eq!(hhea.len(), 36);

    let mut maxp = Vec::new();
    maxp.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    maxp.extend_from_slice(&num_glyphs.to_be_bytes());
    maxp.extend_from_slice(&[0; 26]);
    assert_eq!(maxp.len(), 32);

    let mut hmtx = Vec::new();
    for advance in ADVANCES {
        hmtx.extend_from_slice(&advance.to_be_bytes());
        hmtx.extend_from_slice(&10i16.to_be_bytes()); // lsb
    }

    // Format-4 cmap: one segment for 'A'..'D' plus the terminator.
    let mut sub = Vec::new();
    sub.extend_from_slice(&4u16.to_be_bytes());
    let subtable_len = 16 + 8 * 2 + 2 * 4;
    sub.extend_from_slice(&(subtable_len as u16).to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes()); // language
    sub.extend_from_slice(&4u16.to_be_bytes()); // segCountX2
    sub.extend_from_slice(&4u16.to_be_bytes()); // searchRange
    sub.extend_from_slice(&1u16.to_be_bytes()); // entrySelector
    sub.extend_from_slice(&0u16.to_be_bytes()); // rangeShift
    sub.extend_from_slice(&0x44u16.to_be_bytes()); // endCode: 'D'
    sub.extend_from_slice(&0xFFFFu16.to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes()); // reservedPad
    sub.extend_from_slice(&0x41u16.to_be_bytes()); // startCode: 'A'
    sub.extend_from_slice(&0xFFFFu16.to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes()); // idDelta
    sub.extend_from_slice(&1u16.to_be_bytes());
    // idRangeOffset for segment 0 points just past the offset array.
    sub.extend_from_slice(&4u16.to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes());
    for gid in 1u16..=4 {
        sub.extend_from_slice(&gid.to_be_bytes());
    }
    let mut cmap = Vec::new();
    cmap.extend_from_slice(&0u16.to_be_bytes());
    cmap.extend_from_slice(&1u16.to_be_bytes());
    cmap.extend_from_slice(&3u16.to_be_bytes());
    cmap.extend_from_slice(&1u16.to_be_bytes());
    cmap.extend_from_slice(&12u32.to_be_bytes());
    cmap.extend_from_slice(&sub);

    assemble(&[
        (*b"cmap", cmap),
        (*b"glyf", glyf),
        (*b"head", head),
        (*b"hhea", hhea),
        (*b"hmtx", hmtx),
        (*b"loca", loca),
        (*b"maxp", maxp),
    ])
}

fn assemble(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&num_tables.to_be_bytes());
    out.extend_from_slice(&64u16.to_be_bytes()); // searchRange for 7 tables
    out.extend_from_slice(&2u16.to_be_bytes());
    out.extend_from_slice(&48u16.to_be_bytes());

    let mut offset = 12 + tables.len() * 16;
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        out.extend_from_slice(&0u32.to_be_bytes()); // checksum: not verified by parsers
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        offset += (data.len() + 3) & !3;
    }
    for (_, data) in tables {
        out.extend_from_slice(data);
        while out.len() % 4 != 0 {
            out.push(0);
        }
    }
    out
}

/// Read a glyph's bytes out of a raw font file via its loca table.
pub fn raw_glyph(data: &[u8], gid: u16) -> Vec<u8> {
    let raw = ttf_parser::RawFace::parse(data, 0).unwrap();
    let head = raw.table(ttf_parser::Tag::from_bytes(b"head")).unwrap();
    let long = i16::from_be_bytes([head[50], head[51]]) == 1;
    let loca = raw.table(ttf_parser::Tag::from_bytes(b"loca")).unwrap();
    let glyf = raw.table(ttf_parser::Tag::from_bytes(b"glyf")).unwrap();
    let read = |i: usize| -> usize {
        if long {
            u32::from_be_bytes([
                loca[i * 4],
                loca[i * 4 + 1],
                loca[i * 4 + 2],
                loca[i * 4 + 3],
            ]) as usize
        } else {
            u16::from_be_bytes([loca[i * 2], loca[i * 2 + 1]]) as usize * 2
        }
    };
    glyf[read(gid as usize)..read(gid as usize + 1)].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_ttf_parser() {
        let font = mini_font();
        let face = ttf_parser::Face::parse(&font, 0).unwrap();
        assert_eq!(face.number_of_glyphs(), 5);
        assert_eq!(face.units_per_em(), UNITS_PER_EM);
        assert_eq!(face.glyph_index('B').map(|g| g.0), Some(2));
    }

    #[test]
    fn raw_glyph_reads_original_outlines() {
        let font = mini_font();
        assert_eq!(raw_glyph(&font, 1), outlines()[1]);
        assert!(raw_glyph(&font, 0).is_empty());
    }
}
