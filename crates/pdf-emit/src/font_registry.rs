//! The per-writer font registry.
//!
//! Assigns resource names (`F1`, `F2`, …), accumulates the used-codepoint
//! set of every embedded font while content streams are built, and emits
//! the font objects once at the end of the file. The registry is frozen
//! before emission; the used-set at that moment is exactly what the
//! content streams referenced.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io::Write;

use font_craft::{subset, Font, TrueTypeFont};

use crate::compress::deflate;
use crate::error::PdfError;
use crate::object::{dict, Dict, Object, ObjectId};
use crate::writer::FileWriter;

/// Font flags bit for symbolic fonts.
const FLAG_SYMBOLIC: i64 = 1 << 2;

/// Font flags bit for italic fonts.
const FLAG_ITALIC: i64 = 1 << 6;

/// StemV reported for embedded fonts; descriptors require a value but
/// TrueType programs do not carry one.
const DEFAULT_STEM_V: i64 = 80;

struct RegisteredFont {
    name: String,
    font: Font,
    object_id: ObjectId,
    used: BTreeSet<char>,
}

/// Registry owned by one writer.
pub struct FontRegistry {
    entries: Vec<RegisteredFont>,
    frozen: bool,
}

impl FontRegistry {
    pub fn new() -> Self {
        FontRegistry {
            entries: Vec::new(),
            frozen: false,
        }
    }

    /// Register a font (idempotent), reserving its object id on first
    /// sight. Returns the registry index.
    pub fn register<W: Write>(&mut self, font: &Font, writer: &mut FileWriter<W>) -> usize {
        assert!(!self.frozen, "font registered after registry freeze");
        if let Some(index) = self.entries.iter().position(|e| &e.font == font) {
            return index;
        }
        let object_id = writer.allocate();
        let name = format!("F{}", self.entries.len() + 1);
        self.entries.push(RegisteredFont {
            name,
            font: font.clone(),
            object_id,
            used: BTreeSet::new(),
        });
        self.entries.len() - 1
    }

    /// Record a codepoint as drawn with this font.
    pub fn note_used(&mut self, index: usize, ch: char) {
        assert!(!self.frozen, "codepoint recorded after registry freeze");
        self.entries[index].used.insert(ch);
    }

    pub fn resource_name(&self, index: usize) -> &str {
        &self.entries[index].name
    }

    pub fn object_id(&self, index: usize) -> ObjectId {
        self.entries[index].object_id
    }

    /// The accumulated used-codepoint set of a font.
    pub fn used_codepoints(&self, index: usize) -> &BTreeSet<char> {
        &self.entries[index].used
    }

    /// Resource-dictionary pairs `(name, id)` for a set of indices.
    pub fn resources(&self, indices: &BTreeSet<usize>) -> Vec<(String, ObjectId)> {
        indices
            .iter()
            .map(|&i| (self.entries[i].name.clone(), self.entries[i].object_id))
            .collect()
    }

    /// Freeze the registry and emit every font object.
    pub fn finish<W: Write>(mut self, writer: &mut FileWriter<W>) -> Result<(), PdfError> {
        self.frozen = true;
        for entry in &self.entries {
            match &entry.font {
                Font::Standard(tag) => {
                    let object = Object::Dict(dict! {
                        "Type" => Object::Name("Font".into()),
                        "Subtype" => Object::Name("Type1".into()),
                        "BaseFont" => Object::Name(tag.base_font_name().into()),
                        "Encoding" => Object::Name("WinAnsiEncoding".into()),
                    });
                    writer.write_object(entry.object_id, &object)?;
                }
                Font::Embedded(ttf) => {
                    emit_embedded(writer, entry.object_id, ttf, &entry.used)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        FontRegistry::new()
    }
}

/// Emit the object cluster of one embedded font: Type0 + CIDFontType2 +
/// descriptor + FontFile2 + CIDToGIDMap + ToUnicode.
fn emit_embedded<W: Write>(
    writer: &mut FileWriter<W>,
    type0_id: ObjectId,
    ttf: &TrueTypeFont,
    used: &BTreeSet<char>,
) -> Result<(), PdfError> {
    let subset = subset::subset(ttf, used)?;
    let base_font = format!(
        "{}+{}",
        subset.tag,
        ttf.postscript_name().replace(' ', "")
    );

    let cid_font_id = writer.allocate();
    let descriptor_id = writer.allocate();
    let font_file_id = writer.allocate();
    let cid_to_gid_id = writer.allocate();
    let to_unicode_id = writer.allocate();

    // Type0 wrapper with Identity-H encoding: CIDs are glyph ids.
    let type0 = Object::Dict(dict! {
        "Type" => Object::Name("Font".into()),
        "Subtype" => Object::Name("Type0".into()),
        "BaseFont" => Object::Name(base_font.clone()),
        "Encoding" => Object::Name("Identity-H".into()),
        "DescendantFonts" => Object::Array(vec![Object::Ref(cid_font_id)]),
        "ToUnicode" => Object::Ref(to_unicode_id),
    });
    writer.write_object(type0_id, &type0)?;

    // Widths of the used glyphs in the 1000-unit text space.
    let mut w_array: Vec<Object> = Vec::new();
    for &gid in &subset.used_gids {
        w_array.push(Object::Int(gid as i64));
        w_array.push(Object::Array(vec![Object::Real(ttf.advance_per_mille(gid))]));
    }

    let cid_font = Object::Dict(dict! {
        "Type" => Object::Name("Font".into()),
        "Subtype" => Object::Name("CIDFontType2".into()),
        "BaseFont" => Object::Name(base_font.clone()),
        "CIDSystemInfo" => Object::Dict(dict! {
            "Registry" => Object::Literal(b"Adobe".to_vec()),
            "Ordering" => Object::Literal(b"Identity".to_vec()),
            "Supplement" => 0i64,
        }),
        "FontDescriptor" => Object::Ref(descriptor_id),
        "DW" => 1000i64,
        "W" => Object::Array(w_array),
        "CIDToGIDMap" => Object::Ref(cid_to_gid_id),
    });
    writer.write_object(cid_font_id, &cid_font)?;

    let scale = 1000.0 / ttf.units_per_em() as f64;
    let bbox = ttf.bbox();
    let (ascent, descent, cap_height) = ttf.vertical_metrics();
    let mut flags = FLAG_SYMBOLIC;
    if ttf.italic_angle() != 0.0 {
        flags |= FLAG_ITALIC;
    }
    let descriptor = Object::Dict(dict! {
        "Type" => Object::Name("FontDescriptor".into()),
        "FontName" => Object::Name(base_font),
        "Flags" => flags,
        "FontBBox" => Object::Array(
            bbox.iter()
                .map(|&v| Object::Real(v as f64 * scale))
                .collect()
        ),
        "ItalicAngle" => Object::Real(ttf.italic_angle() as f64),
        "Ascent" => Object::Real(ascent as f64 * scale),
        "Descent" => Object::Real(descent as f64 * scale),
        "CapHeight" => Object::Real(cap_height as f64 * scale),
        "StemV" => DEFAULT_STEM_V,
        "FontFile2" => Object::Ref(font_file_id),
    });
    writer.write_object(descriptor_id, &descriptor)?;

    let compressed = deflate(&subset.bytes);
    let mut file_dict = Dict::new();
    file_dict.name("Filter", "FlateDecode");
    file_dict.set("Length1", subset.bytes.len() as i64);
    writer.write_stream(font_file_id, file_dict, &compressed)?;

    // Identity over the used ids, zero elsewhere; monotone by
    // construction.
    let mut map = vec![0u8; subset.num_glyphs as usize * 2];
    for &gid in &subset.used_gids {
        map[gid as usize * 2..gid as usize * 2 + 2].copy_from_slice(&gid.to_be_bytes());
    }
    let compressed_map = deflate(&map);
    let mut map_dict = Dict::new();
    map_dict.name("Filter", "FlateDecode");
    writer.write_stream(cid_to_gid_id, map_dict, &compressed_map)?;

    let cmap = to_unicode_cmap(ttf, used);
    let compressed_cmap = deflate(cmap.as_bytes());
    let mut cmap_dict = Dict::new();
    cmap_dict.name("Filter", "FlateDecode");
    writer.write_stream(to_unicode_id, cmap_dict, &compressed_cmap)?;

    Ok(())
}

/// ToUnicode CMap mapping CIDs (glyph ids) back to their codepoints, in
/// hex throughout.
fn to_unicode_cmap(ttf: &TrueTypeFont, used: &BTreeSet<char>) -> String {
    let mut pairs: Vec<(u16, char)> = used
        .iter()
        .filter_map(|&ch| ttf.glyph_index(ch).map(|gid| (gid, ch)))
        .collect();
    pairs.sort_unstable();

    let mut cmap = String::with_capacity(CMAP_HEADER.len() + pairs.len() * 24 + CMAP_FOOTER.len());
    cmap.push_str(CMAP_HEADER);
    if !pairs.is_empty() {
        let _ = writeln!(cmap, "{} beginbfchar", pairs.len());
        for (gid, ch) in pairs {
            let mut units = [0u16; 2];
            let encoded = ch.encode_utf16(&mut units);
            let _ = write!(cmap, "<{gid:04X}> <");
            for unit in encoded {
                let _ = write!(cmap, "{unit:04X}");
            }
            cmap.push_str(">\n");
        }
        cmap.push_str("endbfchar\n");
    }
    cmap.push_str(CMAP_FOOTER);
    cmap
}

const CMAP_HEADER: &str = "/CIDInit /ProcSet findresource begin\n\
12 dict begin\n\
begincmap\n\
/CIDSystemInfo\n\
<< /Registry (Adobe)\n\
   /Ordering (UCS)\n\
   /Supplement 0\n\
>> def\n\
/CMapName /Adobe-Identity-UCS def\n\
/CMapType 2 def\n\
1 begincodespacerange\n\
<0000> <FFFF>\n\
endcodespacerange\n";

const CMAP_FOOTER: &str = "endcmap\n\
CMapName currentdict /CMap defineresource pop\n\
end\nend\n";

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::Standard14;

    #[test]
    fn registration_is_idempotent() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        let mut registry = FontRegistry::new();

        let helvetica = Font::Standard(Standard14::Helvetica);
        let a = registry.register(&helvetica, &mut writer);
        let b = registry.register(&helvetica, &mut writer);
        assert_eq!(a, b);
        assert_eq!(registry.resource_name(a), "F1");

        let courier = Font::Standard(Standard14::Courier);
        let c = registry.register(&courier, &mut writer);
        assert_eq!(registry.resource_name(c), "F2");
    }

    #[test]
    fn used_codepoints_accumulate() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        let mut registry = FontRegistry::new();
        let index = registry.register(&Font::Standard(Standard14::Helvetica), &mut writer);

        registry.note_used(index, 'b');
        registry.note_used(index, 'a');
        registry.note_used(index, 'a');
        let used: Vec<char> = registry.used_codepoints(index).iter().copied().collect();
        assert_eq!(used, vec!['a', 'b']);
    }

    #[test]
    fn standard_fonts_emit_type1_dictionaries() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        writer.begin().unwrap();
        let mut registry = FontRegistry::new();
        let index = registry.register(&Font::Standard(Standard14::TimesBold), &mut writer);
        let id = registry.object_id(index);
        registry.finish(&mut writer).unwrap();
        writer.finish(id, None).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/Subtype /Type1"));
        assert!(text.contains("/BaseFont /Times-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }
}
