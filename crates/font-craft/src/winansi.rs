//! WinAnsi (Windows code page 1252) encoding.
//!
//! The Standard 14 fonts are written with `/Encoding /WinAnsiEncoding`, so
//! every codepoint in a Standard 14 run must be squeezed into one cp1252
//! byte. Codepoints outside the table are not an error here; the caller
//! substitutes U+003F and records the substitution.

/// Encode a single codepoint as a WinAnsi byte.
///
/// Returns `None` for codepoints cp1252 cannot represent, including the
/// control range and the five unassigned slots (0x81, 0x8D, 0x8F, 0x90,
/// 0x9D).
pub fn encode(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match cp {
        // Printable ASCII maps through unchanged.
        0x20..=0x7E => Some(cp as u8),
        // Latin-1 upper half is likewise identity in cp1252.
        0xA0..=0xFF => Some(cp as u8),
        // The 0x80..0x9F window replaces C1 controls with typographic extras.
        0x20AC => Some(0x80), // euro sign
        0x201A => Some(0x82), // single low quote
        0x0192 => Some(0x83), // florin
        0x201E => Some(0x84), // double low quote
        0x2026 => Some(0x85), // ellipsis
        0x2020 => Some(0x86), // dagger
        0x2021 => Some(0x87), // double dagger
        0x02C6 => Some(0x88), // modifier circumflex
        0x2030 => Some(0x89), // per mille
        0x0160 => Some(0x8A), // S caron
        0x2039 => Some(0x8B), // single left guillemet
        0x0152 => Some(0x8C), // OE ligature
        0x017D => Some(0x8E), // Z caron
        0x2018 => Some(0x91), // left single quote
        0x2019 => Some(0x92), // right single quote
        0x201C => Some(0x93), // left double quote
        0x201D => Some(0x94), // right double quote
        0x2022 => Some(0x95), // bullet
        0x2013 => Some(0x96), // en dash
        0x2014 => Some(0x97), // em dash
        0x02DC => Some(0x98), // small tilde
        0x2122 => Some(0x99), // trademark
        0x0161 => Some(0x9A), // s caron
        0x203A => Some(0x9B), // single right guillemet
        0x0153 => Some(0x9C), // oe ligature
        0x017E => Some(0x9E), // z caron
        0x0178 => Some(0x9F), // Y dieresis
        _ => None,
    }
}

/// The byte Standard 14 runs fall back to for unmappable codepoints.
pub const REPLACEMENT: u8 = b'?';
