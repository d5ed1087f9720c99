//! Text encoding for content-stream show operators.
//!
//! Standard 14 runs use WinAnsi literal strings with byte-level escaping;
//! embedded CIDFont runs use 2-byte hex CIDs (the glyph ids, under
//! `Identity-H`).

/// Escape a WinAnsi byte string for a `(...)` literal.
pub fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
    out
}

/// Hex-encode glyph ids as 4-digit CIDs for a `<...>` string.
pub fn cid_hex(gids: &[u16]) -> String {
    gids.iter().map(|gid| format!("{gid:04X}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parens_and_backslash_are_escaped() {
        assert_eq!(escape_literal(b"(a)\\"), b"\\(a\\)\\\\".to_vec());
    }

    #[test]
    fn high_bytes_pass_through() {
        assert_eq!(escape_literal(&[0xE1, 0x80]), vec![0xE1, 0x80]);
    }

    #[test]
    fn cids_are_four_hex_digits() {
        assert_eq!(cid_hex(&[0x4A, 0x6F22]), "004A6F22");
    }
}
