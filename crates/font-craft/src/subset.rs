//! TrueType glyph subsetting.
//!
//! The subset keeps the original glyph-id space up to the highest used id:
//! used glyphs keep their outline bytes (so CIDs stay equal to the original
//! glyph ids), unused ids collapse to empty `loca` spans. `glyf` and `loca`
//! are rewritten, `cmap` is replaced with a minimal format-4 table over the
//! used codepoints, `hmtx` is cut down to `numberOfHMetrics = max used id
//! + 1`, and `maxp`/`hhea`/`head` are patched to match. The table directory
//! is rebuilt with fresh checksums and `checkSumAdjustment`.

use std::collections::BTreeSet;

use crate::error::FontError;
use crate::truetype::TrueTypeFont;

// Composite glyph flags.
const ARG_1_AND_2_ARE_WORDS: u16 = 0x0001;
const MORE_COMPONENTS: u16 = 0x0020;
const WE_HAVE_A_SCALE: u16 = 0x0008;
const WE_HAVE_AN_X_AND_Y_SCALE: u16 = 0x0040;
const WE_HAVE_A_TWO_BY_TWO: u16 = 0x0080;

/// The checksum magic from the sfnt specification.
const CHECKSUM_ADJUSTMENT_BASE: u32 = 0xB1B0_AFBA;

/// Result of subsetting a font against a set of used codepoints.
pub struct SubsetFont {
    /// The rebuilt TrueType program.
    pub bytes: Vec<u8>,
    /// Used glyph ids including `.notdef` and the composite closure.
    pub used_gids: BTreeSet<u16>,
    /// Glyph count of the subset (`max used gid + 1`).
    pub num_glyphs: u16,
    /// Six-upper-letter tag derived from the used-glyph set.
    pub tag: String,
}

/// Build the subset of `font` covering `codepoints`.
///
/// Codepoints the font does not map are ignored here; the caller has
/// already recorded them as `.notdef` substitutions.
pub fn subset(font: &TrueTypeFont, codepoints: &BTreeSet<char>) -> Result<SubsetFont, FontError> {
    let glyf = font.table(*b"glyf").ok_or(FontError::MissingTable { table: "glyf" })?;
    let loca = font.table(*b"loca").ok_or(FontError::MissingTable { table: "loca" })?;
    let head = font.table(*b"head").ok_or(FontError::MissingTable { table: "head" })?;
    let hhea = font.table(*b"hhea").ok_or(FontError::MissingTable { table: "hhea" })?;
    let maxp = font.table(*b"maxp").ok_or(FontError::MissingTable { table: "maxp" })?;
    let hmtx = font.table(*b"hmtx").ok_or(FontError::MissingTable { table: "hmtx" })?;

    let long_loca = match read_i16(head, 50) {
        Some(0) => false,
        Some(1) => true,
        _ => {
            return Err(FontError::Malformed {
                table: "head",
                reason: "bad indexToLocFormat".into(),
            })
        }
    };

    // Used glyphs: .notdef, every mapped codepoint, and the closure over
    // composite component references.
    let mut used: BTreeSet<u16> = BTreeSet::new();
    used.insert(0);
    let mut mapped: Vec<(u32, u16)> = Vec::new();
    for &ch in codepoints {
        if let Some(gid) = font.glyph_index(ch) {
            used.insert(gid);
            mapped.push((ch as u32, gid));
        }
    }
    let mut queue: Vec<u16> = used.iter().copied().collect();
    while let Some(gid) = queue.pop() {
        let Some(range) = glyph_range(loca, long_loca, gid, font.num_glyphs()) else {
            continue;
        };
        let Some(data) = glyf.get(range) else {
            return Err(FontError::Malformed {
                table: "loca",
                reason: format!("glyph {gid} offsets exceed glyf length"),
            });
        };
        for component in composite_components(data) {
            if used.insert(component) {
                queue.push(component);
            }
        }
    }

    let max_used = *used.iter().next_back().unwrap_or(&0);
    let num_glyphs = max_used + 1;

    // Rebuild glyf, recording the new offsets as we go. Offsets stay
    // 2-byte aligned so the short loca format remains expressible.
    let mut new_glyf: Vec<u8> = Vec::new();
    let mut offsets: Vec<u32> = Vec::with_capacity(num_glyphs as usize + 1);
    offsets.push(0);
    for gid in 0..num_glyphs {
        if used.contains(&gid) {
            if let Some(range) = glyph_range(loca, long_loca, gid, font.num_glyphs()) {
                let data = glyf.get(range).ok_or_else(|| FontError::Malformed {
                    table: "loca",
                    reason: format!("glyph {gid} offsets exceed glyf length"),
                })?;
                new_glyf.extend_from_slice(data);
                if new_glyf.len() % 2 != 0 {
                    new_glyf.push(0);
                }
            }
        }
        offsets.push(new_glyf.len() as u32);
    }

    // Short loca stores half-offsets in u16; fall back to long when the
    // rebuilt glyf outgrows it.
    let new_long_loca = new_glyf.len() > u16::MAX as usize * 2;
    let mut new_loca: Vec<u8> = Vec::new();
    for &off in &offsets {
        if new_long_loca {
            new_loca.extend_from_slice(&off.to_be_bytes());
        } else {
            new_loca.extend_from_slice(&((off / 2) as u16).to_be_bytes());
        }
    }

    let new_cmap = build_cmap_format4(&mapped);
    let new_hmtx = build_hmtx(hmtx, hhea, font, num_glyphs)?;

    let mut new_head = head.to_vec();
    write_u32(&mut new_head, 8, 0); // checkSumAdjustment, fixed up below
    write_u16(&mut new_head, 50, new_long_loca as u16);

    let mut new_hhea = hhea.to_vec();
    write_u16(&mut new_hhea, 34, num_glyphs);

    let mut new_maxp = maxp.to_vec();
    write_u16(&mut new_maxp, 4, num_glyphs);

    let bytes = assemble_sfnt(&[
        (*b"cmap", &new_cmap),
        (*b"glyf", &new_glyf),
        (*b"head", &new_head),
        (*b"hhea", &new_hhea),
        (*b"hmtx", &new_hmtx),
        (*b"loca", &new_loca),
        (*b"maxp", &new_maxp),
    ]);

    let tag = subset_tag(&used);

    Ok(SubsetFont {
        bytes,
        used_gids: used,
        num_glyphs,
        tag,
    })
}

/// Derive the six-upper-letter subset tag from the sorted used-glyph set.
///
/// FNV-1a over the big-endian glyph ids, folded into base 26. The same set
/// always yields the same tag, which keeps output bytes reproducible.
pub fn subset_tag(used: &BTreeSet<u16>) -> String {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for gid in used {
        for byte in gid.to_be_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }

    let mut tag = [b'A'; 6];
    for letter in tag.iter_mut() {
        *letter = b'A' + (hash % 26) as u8;
        hash /= 26;
    }
    String::from_utf8(tag.to_vec()).unwrap()
}

/// Byte range of a glyph's outline within `glyf`.
fn glyph_range(loca: &[u8], long: bool, gid: u16, num_glyphs: u16) -> Option<std::ops::Range<usize>> {
    if gid >= num_glyphs {
        return None;
    }
    let index = gid as usize;
    let (start, end) = if long {
        (read_u32(loca, index * 4)? as usize, read_u32(loca, index * 4 + 4)? as usize)
    } else {
        (
            read_u16(loca, index * 2)? as usize * 2,
            read_u16(loca, index * 2 + 2)? as usize * 2,
        )
    };
    (start <= end).then_some(start..end)
}

/// Component glyph ids referenced by a composite glyph. Simple and empty
/// glyphs yield nothing.
fn composite_components(glyph: &[u8]) -> Vec<u16> {
    let mut components = Vec::new();
    let Some(contours) = read_i16(glyph, 0) else {
        return components;
    };
    if contours >= 0 {
        return components;
    }

    let mut at = 10;
    loop {
        let (Some(flags), Some(component)) = (read_u16(glyph, at), read_u16(glyph, at + 2)) else {
            break;
        };
        components.push(component);
        at += 4;
        at += if flags & ARG_1_AND_2_ARE_WORDS != 0 { 4 } else { 2 };
        if flags & WE_HAVE_A_SCALE != 0 {
            at += 2;
        } else if flags & WE_HAVE_AN_X_AND_Y_SCALE != 0 {
            at += 4;
        } else if flags & WE_HAVE_A_TWO_BY_TWO != 0 {
            at += 8;
        }
        if flags & MORE_COMPONENTS == 0 {
            break;
        }
    }
    components
}

/// Minimal format-4 cmap over the used codepoints.
///
/// Codepoints above U+FFFF cannot be expressed in format 4 and are left to
/// the ToUnicode CMap only. Segments cover runs of consecutive codepoints;
/// glyph ids go through the glyphIdArray so nothing depends on id deltas.
fn build_cmap_format4(mapped: &[(u32, u16)]) -> Vec<u8> {
    let bmp: Vec<(u16, u16)> = mapped
        .iter()
        .filter(|(cp, _)| *cp <= 0xFFFF)
        .map(|&(cp, gid)| (cp as u16, gid))
        .collect();

    // Split into runs of consecutive codepoints.
    let mut segments: Vec<(u16, u16)> = Vec::new(); // (start index, len) into bmp
    let mut i = 0;
    while i < bmp.len() {
        let start = i;
        while i + 1 < bmp.len() && bmp[i + 1].0 == bmp[i].0 + 1 && bmp[i].0 < 0xFFFE {
            i += 1;
        }
        segments.push((start as u16, (i - start + 1) as u16));
        i += 1;
    }

    let seg_count = segments.len() as u16 + 1; // + terminator
    let seg_count_x2 = seg_count * 2;
    let search_range = 2 * largest_pow2_leq(seg_count);
    let entry_selector = largest_pow2_leq(seg_count).trailing_zeros() as u16;
    let range_shift = seg_count_x2 - search_range;

    let glyph_array_len: u16 = segments.iter().map(|&(_, len)| len).sum();
    let subtable_len = 16 + 8 * seg_count as usize + 2 * glyph_array_len as usize;

    let mut sub = Vec::with_capacity(subtable_len);
    sub.extend_from_slice(&4u16.to_be_bytes());
    sub.extend_from_slice(&(subtable_len as u16).to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes()); // language
    sub.extend_from_slice(&seg_count_x2.to_be_bytes());
    sub.extend_from_slice(&search_range.to_be_bytes());
    sub.extend_from_slice(&entry_selector.to_be_bytes());
    sub.extend_from_slice(&range_shift.to_be_bytes());

    // endCode
    for &(start, len) in &segments {
        sub.extend_from_slice(&bmp[(start + len - 1) as usize].0.to_be_bytes());
    }
    sub.extend_from_slice(&0xFFFFu16.to_be_bytes());
    sub.extend_from_slice(&0u16.to_be_bytes()); // reservedPad
    // startCode
    for &(start, _) in &segments {
        sub.extend_from_slice(&bmp[start as usize].0.to_be_bytes());
    }
    sub.extend_from_slice(&0xFFFFu16.to_be_bytes());
    // idDelta
    for _ in &segments {
        sub.extend_from_slice(&0u16.to_be_bytes());
    }
    sub.extend_from_slice(&1u16.to_be_bytes());
    // idRangeOffset: point each segment at its slice of glyphIdArray.
    for (seg_index, &(start, _)) in segments.iter().enumerate() {
        let offset = 2 * (seg_count as usize - seg_index + start as usize) as u16;
        sub.extend_from_slice(&offset.to_be_bytes());
    }
    sub.extend_from_slice(&0u16.to_be_bytes());
    // glyphIdArray
    for &(_, gid) in &bmp {
        sub.extend_from_slice(&gid.to_be_bytes());
    }

    // cmap header with a single (3, 1) record.
    let mut cmap = Vec::with_capacity(12 + sub.len());
    cmap.extend_from_slice(&0u16.to_be_bytes());
    cmap.extend_from_slice(&1u16.to_be_bytes());
    cmap.extend_from_slice(&3u16.to_be_bytes());
    cmap.extend_from_slice(&1u16.to_be_bytes());
    cmap.extend_from_slice(&12u32.to_be_bytes());
    cmap.extend_from_slice(&sub);
    cmap
}

/// Full-entry hmtx for gids `0..num_glyphs`, every glyph carrying its own
/// advance (`numberOfHMetrics == num_glyphs`).
fn build_hmtx(
    hmtx: &[u8],
    hhea: &[u8],
    font: &TrueTypeFont,
    num_glyphs: u16,
) -> Result<Vec<u8>, FontError> {
    let orig_metrics = read_u16(hhea, 34).ok_or(FontError::Malformed {
        table: "hhea",
        reason: "truncated".into(),
    })?;
    if orig_metrics == 0 {
        return Err(FontError::Malformed {
            table: "hhea",
            reason: "numberOfHMetrics is zero".into(),
        });
    }

    let lsb_of = |gid: u16| -> i16 {
        if gid < orig_metrics {
            read_i16(hmtx, gid as usize * 4 + 2).unwrap_or(0)
        } else {
            let at = orig_metrics as usize * 4 + (gid - orig_metrics) as usize * 2;
            read_i16(hmtx, at).unwrap_or(0)
        }
    };

    let mut out = Vec::with_capacity(num_glyphs as usize * 4);
    for gid in 0..num_glyphs {
        out.extend_from_slice(&font.advance(gid).to_be_bytes());
        out.extend_from_slice(&lsb_of(gid).to_be_bytes());
    }
    Ok(out)
}

/// Assemble a table directory and body; tables must be sorted by tag.
fn assemble_sfnt(tables: &[([u8; 4], &[u8])]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let pow2 = largest_pow2_leq(num_tables);
    let search_range = pow2 * 16;
    let entry_selector = pow2.trailing_zeros() as u16;
    let range_shift = num_tables * 16 - search_range;

    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // sfnt version
    out.extend_from_slice(&num_tables.to_be_bytes());
    out.extend_from_slice(&search_range.to_be_bytes());
    out.extend_from_slice(&entry_selector.to_be_bytes());
    out.extend_from_slice(&range_shift.to_be_bytes());

    let mut offset = 12 + tables.len() * 16;
    let mut head_offset = None;
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        out.extend_from_slice(&table_checksum(data).to_be_bytes());
        out.extend_from_slice(&(offset as u32).to_be_bytes());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        if tag == b"head" {
            head_offset = Some(offset);
        }
        offset += padded_len(data.len());
    }
    for (_, data) in tables {
        out.extend_from_slice(data);
        while out.len() % 4 != 0 {
            out.push(0);
        }
    }

    if let Some(head_at) = head_offset {
        let whole = table_checksum(&out);
        let adjustment = CHECKSUM_ADJUSTMENT_BASE.wrapping_sub(whole);
        write_u32(&mut out, head_at + 8, adjustment);
    }
    out
}

fn table_checksum(data: &[u8]) -> u32 {
    let mut sum = 0u32;
    for window in data.chunks(4) {
        let mut chunk = [0u8; 4];
        chunk[..window.len()].copy_from_slice(window);
        sum = sum.wrapping_add(u32::from_be_bytes(chunk));
    }
    sum
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn largest_pow2_leq(n: u16) -> u16 {
    let mut p = 1;
    while p * 2 <= n {
        p *= 2;
    }
    p
}

fn read_u16(data: &[u8], at: usize) -> Option<u16> {
    data.get(at..at + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

fn read_i16(data: &[u8], at: usize) -> Option<i16> {
    read_u16(data, at).map(|v| v as i16)
}

fn read_u32(data: &[u8], at: usize) -> Option<u32> {
    data.get(at..at + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn write_u16(data: &mut [u8], at: usize, value: u16) {
    data[at..at + 2].copy_from_slice(&value.to_be_bytes());
}

fn write_u32(data: &mut Vec<u8>, at: usize, value: u32) {
    data[at..at + 4].copy_from_slice(&value.to_be_bytes());
}
