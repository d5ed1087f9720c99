//! Advance-width tables for the Standard 14 fonts.
//!
//! Widths are in 1/1000 em units, indexed by WinAnsi byte, following the
//! Adobe Font Metrics for each face. Accented Latin-1 letters share the
//! width of their base letter, which is how the AFM files define them, so
//! the upper half folds onto the ASCII table instead of repeating it.

/// Helvetica and Helvetica-Oblique.
pub fn helvetica(b: u8) -> u16 {
    match b {
        b' ' => 278,
        b'!' => 278,
        b'"' => 355,
        b'#' => 556,
        b'$' => 556,
        b'%' => 889,
        b'&' => 667,
        b'\'' => 191,
        b'(' | b')' => 333,
        b'*' => 389,
        b'+' => 584,
        b',' => 278,
        b'-' => 333,
        b'.' => 278,
        b'/' => 278,
        b'0'..=b'9' => 556,
        b':' | b';' => 278,
        b'<' | b'=' | b'>' => 584,
        b'?' => 556,
        b'@' => 1015,
        b'A' => 667,
        b'B' => 667,
        b'C' => 722,
        b'D' => 722,
        b'E' => 667,
        b'F' => 611,
        b'G' => 778,
        b'H' => 722,
        b'I' => 278,
        b'J' => 500,
        b'K' => 667,
        b'L' => 556,
        b'M' => 833,
        b'N' => 722,
        b'O' => 778,
        b'P' => 667,
        b'Q' => 778,
        b'R' => 722,
        b'S' => 667,
        b'T' => 611,
        b'U' => 722,
        b'V' => 667,
        b'W' => 944,
        b'X' => 667,
        b'Y' => 667,
        b'Z' => 611,
        b'[' | b']' => 278,
        b'\\' => 278,
        b'^' => 469,
        b'_' => 556,
        b'`' => 333,
        b'a' => 556,
        b'b' => 556,
        b'c' => 500,
        b'd' => 556,
        b'e' => 556,
        b'f' => 278,
        b'g' => 556,
        b'h' => 556,
        b'i' | b'j' => 222,
        b'k' => 500,
        b'l' => 222,
        b'm' => 833,
        b'n' => 556,
        b'o' => 556,
        b'p' | b'q' => 556,
        b'r' => 333,
        b's' => 500,
        b't' => 278,
        b'u' => 556,
        b'v' => 500,
        b'w' => 722,
        b'x' => 500,
        b'y' => 500,
        b'z' => 500,
        b'{' | b'}' => 334,
        b'|' => 260,
        b'~' => 584,
        // cp1252 window
        0x80 => 556,  // euro
        0x82 => 222,  // quotesinglbase
        0x83 => 556,  // florin
        0x84 => 333,  // quotedblbase
        0x85 => 1000, // ellipsis
        0x86 | 0x87 => 556,
        0x88 => 333,
        0x89 => 1000, // perthousand
        0x8A => 667,  // Scaron
        0x8B => 333,
        0x8C => 1000, // OE
        0x8E => 611,  // Zcaron
        0x91 | 0x92 => 222,
        0x93 | 0x94 => 333,
        0x95 => 350, // bullet
        0x96 => 556, // endash
        0x97 => 1000,
        0x98 => 333,
        0x99 => 1000, // trademark
        0x9A => 500,  // scaron
        0x9B => 333,
        0x9C => 944, // oe
        0x9E => 500, // zcaron
        0x9F => 667, // Ydieresis
        // Latin-1 punctuation
        0xA0 => 278,
        0xA1 => 333,
        0xA2..=0xA5 => 556,
        0xA6 => 260,
        0xA7 => 556,
        0xA8 => 333,
        0xA9 => 737,
        0xAA => 370,
        0xAB => 556,
        0xAC => 584,
        0xAD => 333,
        0xAE => 737,
        0xAF => 333,
        0xB0 => 400,
        0xB1 => 584,
        0xB2 | 0xB3 => 333,
        0xB4 => 333,
        0xB5 => 556,
        0xB6 => 537,
        0xB7 => 278,
        0xB8 => 333,
        0xB9 => 333,
        0xBA => 365,
        0xBB => 556,
        0xBC..=0xBE => 834,
        0xBF => 611,
        // Accented letters fold onto their base letter.
        0xC0..=0xC5 => helvetica(b'A'),
        0xC6 => 1000, // AE
        0xC7 => helvetica(b'C'),
        0xC8..=0xCB => helvetica(b'E'),
        0xCC..=0xCF => helvetica(b'I'),
        0xD0 => helvetica(b'D'), // Eth
        0xD1 => helvetica(b'N'),
        0xD2..=0xD6 | 0xD8 => helvetica(b'O'),
        0xD7 => 584, // multiply
        0xD9..=0xDC => helvetica(b'U'),
        0xDD => helvetica(b'Y'),
        0xDE => helvetica(b'P'), // Thorn
        0xDF => 611,             // germandbls
        0xE0..=0xE5 => helvetica(b'a'),
        0xE6 => 889, // ae
        0xE7 => helvetica(b'c'),
        0xE8..=0xEB => helvetica(b'e'),
        0xEC..=0xEF => 278, // dotless accented i
        0xF0 => helvetica(b'o'),
        0xF1 => helvetica(b'n'),
        0xF2..=0xF6 => helvetica(b'o'),
        0xF7 => 584, // divide
        0xF8 => 611, // oslash
        0xF9..=0xFC => helvetica(b'u'),
        0xFD | 0xFF => helvetica(b'y'),
        0xFE => helvetica(b'p'), // thorn
        _ => 556,
    }
}

/// Helvetica-Bold and Helvetica-BoldOblique.
pub fn helvetica_bold(b: u8) -> u16 {
    match b {
        b' ' => 278,
        b'!' => 333,
        b'"' => 474,
        b'#' => 556,
        b'$' => 556,
        b'%' => 889,
        b'&' => 722,
        b'\'' => 238,
        b'(' | b')' => 333,
        b'*' => 389,
        b'+' => 584,
        b',' | b'.' => 278,
        b'-' => 333,
        b'/' => 278,
        b'0'..=b'9' => 556,
        b':' | b';' => 333,
        b'<' | b'=' | b'>' => 584,
        b'?' => 611,
        b'@' => 975,
        b'A' => 722,
        b'B' => 722,
        b'C' => 722,
        b'D' => 722,
        b'E' => 667,
        b'F' => 611,
        b'G' => 778,
        b'H' => 722,
        b'I' => 278,
        b'J' => 556,
        b'K' => 722,
        b'L' => 611,
        b'M' => 833,
        b'N' => 722,
        b'O' => 778,
        b'P' => 667,
        b'Q' => 778,
        b'R' => 722,
        b'S' => 667,
        b'T' => 611,
        b'U' => 722,
        b'V' => 667,
        b'W' => 944,
        b'X' => 667,
        b'Y' => 667,
        b'Z' => 611,
        b'[' | b']' => 333,
        b'\\' => 278,
        b'^' => 584,
        b'_' => 556,
        b'`' => 333,
        b'a' => 556,
        b'b' => 611,
        b'c' => 556,
        b'd' => 611,
        b'e' => 556,
        b'f' => 333,
        b'g' => 611,
        b'h' => 611,
        b'i' | b'j' => 278,
        b'k' => 556,
        b'l' => 278,
        b'm' => 889,
        b'n' => 611,
        b'o' => 611,
        b'p' | b'q' => 611,
        b'r' => 389,
        b's' => 556,
        b't' => 333,
        b'u' => 611,
        b'v' => 556,
        b'w' => 778,
        b'x' => 556,
        b'y' => 556,
        b'z' => 500,
        b'{' | b'}' => 389,
        b'|' => 280,
        b'~' => 584,
        0x85 | 0x89 | 0x97 | 0x99 => 1000,
        0x8C => 1000,
        0x95 => 350,
        0x96 => 556,
        0xA0 => 278,
        0xC0..=0xC5 => helvetica_bold(b'A'),
        0xC6 => 1000,
        0xC7 => helvetica_bold(b'C'),
        0xC8..=0xCB => helvetica_bold(b'E'),
        0xCC..=0xCF => helvetica_bold(b'I'),
        0xD1 => helvetica_bold(b'N'),
        0xD2..=0xD6 | 0xD8 => helvetica_bold(b'O'),
        0xD7 => 584,
        0xD9..=0xDC => helvetica_bold(b'U'),
        0xDD => helvetica_bold(b'Y'),
        0xDF => 611,
        0xE0..=0xE5 => helvetica_bold(b'a'),
        0xE6 => 889,
        0xE7 => helvetica_bold(b'c'),
        0xE8..=0xEB => helvetica_bold(b'e'),
        0xEC..=0xEF => 278,
        0xF1 => helvetica_bold(b'n'),
        0xF0 | 0xF2..=0xF6 => helvetica_bold(b'o'),
        0xF7 => 584,
        0xF8 => 611,
        0xF9..=0xFC => helvetica_bold(b'u'),
        0xFD | 0xFF => helvetica_bold(b'y'),
        _ => 556,
    }
}

/// Times-Roman.
pub fn times_roman(b: u8) -> u16 {
    match b {
        b' ' => 250,
        b'!' => 333,
        b'"' => 408,
        b'#' => 500,
        b'$' => 500,
        b'%' => 833,
        b'&' => 778,
        b'\'' => 180,
        b'(' | b')' => 333,
        b'*' => 500,
        b'+' => 564,
        b',' | b'.' => 250,
        b'-' => 333,
        b'/' => 278,
        b'0'..=b'9' => 500,
        b':' | b';' => 278,
        b'<' | b'=' | b'>' => 564,
        b'?' => 444,
        b'@' => 921,
        b'A' => 722,
        b'B' => 667,
        b'C' => 667,
        b'D' => 722,
        b'E' => 611,
        b'F' => 556,
        b'G' => 722,
        b'H' => 722,
        b'I' => 333,
        b'J' => 389,
        b'K' => 722,
        b'L' => 611,
        b'M' => 889,
        b'N' => 722,
        b'O' => 722,
        b'P' => 556,
        b'Q' => 722,
        b'R' => 667,
        b'S' => 556,
        b'T' => 611,
        b'U' => 722,
        b'V' => 722,
        b'W' => 944,
        b'X' => 722,
        b'Y' => 722,
        b'Z' => 611,
        b'[' | b']' => 333,
        b'\\' => 278,
        b'^' => 469,
        b'_' => 500,
        b'`' => 333,
        b'a' => 444,
        b'b' => 500,
        b'c' => 444,
        b'd' => 500,
        b'e' => 444,
        b'f' => 333,
        b'g' => 500,
        b'h' => 500,
        b'i' | b'j' => 278,
        b'k' => 500,
        b'l' => 278,
        b'm' => 778,
        b'n' => 500,
        b'o' => 500,
        b'p' | b'q' => 500,
        b'r' => 333,
        b's' => 389,
        b't' => 278,
        b'u' => 500,
        b'v' => 500,
        b'w' => 722,
        b'x' => 500,
        b'y' => 500,
        b'z' => 444,
        b'{' | b'}' => 480,
        b'|' => 200,
        b'~' => 541,
        0x85 | 0x89 | 0x97 | 0x99 => 1000,
        0x8C => 889,
        0x95 => 350,
        0x96 => 500,
        0xA0 => 250,
        0xC0..=0xC5 => times_roman(b'A'),
        0xC6 => 889,
        0xC7 => times_roman(b'C'),
        0xC8..=0xCB => times_roman(b'E'),
        0xCC..=0xCF => times_roman(b'I'),
        0xD1 => times_roman(b'N'),
        0xD2..=0xD6 | 0xD8 => times_roman(b'O'),
        0xD7 => 564,
        0xD9..=0xDC => times_roman(b'U'),
        0xDD => times_roman(b'Y'),
        0xDF => 500,
        0xE0..=0xE5 => times_roman(b'a'),
        0xE6 => 667,
        0xE7 => times_roman(b'c'),
        0xE8..=0xEB => times_roman(b'e'),
        0xEC..=0xEF => 278,
        0xF1 => times_roman(b'n'),
        0xF0 | 0xF2..=0xF6 => times_roman(b'o'),
        0xF7 => 564,
        0xF8 => 500,
        0xF9..=0xFC => times_roman(b'u'),
        0xFD | 0xFF => times_roman(b'y'),
        _ => 500,
    }
}

/// Times-Bold.
pub fn times_bold(b: u8) -> u16 {
    match b {
        b' ' => 250,
        b'!' => 333,
        b'"' => 555,
        b'#' | b'$' => 500,
        b'%' => 1000,
        b'&' => 833,
        b'\'' => 278,
        b'(' | b')' => 333,
        b'*' => 500,
        b'+' => 570,
        b',' | b'.' => 250,
        b'-' => 333,
        b'/' => 278,
        b'0'..=b'9' => 500,
        b':' | b';' => 333,
        b'<' | b'=' | b'>' => 570,
        b'?' => 500,
        b'@' => 930,
        b'A' => 722,
        b'B' => 667,
        b'C' => 722,
        b'D' => 722,
        b'E' => 667,
        b'F' => 611,
        b'G' => 778,
        b'H' => 778,
        b'I' => 389,
        b'J' => 500,
        b'K' => 778,
        b'L' => 667,
        b'M' => 944,
        b'N' => 722,
        b'O' => 778,
        b'P' => 611,
        b'Q' => 778,
        b'R' => 722,
        b'S' => 556,
        b'T' => 667,
        b'U' => 722,
        b'V' => 722,
        b'W' => 1000,
        b'X' => 722,
        b'Y' => 722,
        b'Z' => 667,
        b'[' | b']' => 333,
        b'\\' => 278,
        b'^' => 581,
        b'_' => 500,
        b'`' => 333,
        b'a' => 500,
        b'b' => 556,
        b'c' => 444,
        b'd' => 556,
        b'e' => 444,
        b'f' => 333,
        b'g' => 500,
        b'h' => 556,
        b'i' => 278,
        b'j' => 333,
        b'k' => 556,
        b'l' => 278,
        b'm' => 833,
        b'n' => 556,
        b'o' => 500,
        b'p' | b'q' => 556,
        b'r' => 444,
        b's' => 389,
        b't' => 333,
        b'u' => 556,
        b'v' => 500,
        b'w' => 722,
        b'x' => 500,
        b'y' => 500,
        b'z' => 444,
        b'{' | b'}' => 394,
        b'|' => 220,
        b'~' => 520,
        0x85 | 0x89 | 0x97 => 1000,
        0x8C => 1000,
        0x95 => 350,
        0x96 => 500,
        0x99 => 1000,
        0xA0 => 250,
        0xC0..=0xC5 => times_bold(b'A'),
        0xC6 => 1000,
        0xC7 => times_bold(b'C'),
        0xC8..=0xCB => times_bold(b'E'),
        0xCC..=0xCF => times_bold(b'I'),
        0xD1 => times_bold(b'N'),
        0xD2..=0xD6 | 0xD8 => times_bold(b'O'),
        0xD7 => 570,
        0xD9..=0xDC => times_bold(b'U'),
        0xDD => times_bold(b'Y'),
        0xDF => 556,
        0xE0..=0xE5 => times_bold(b'a'),
        0xE6 => 722,
        0xE7 => times_bold(b'c'),
        0xE8..=0xEB => times_bold(b'e'),
        0xEC..=0xEF => 278,
        0xF1 => times_bold(b'n'),
        0xF0 | 0xF2..=0xF6 => times_bold(b'o'),
        0xF7 => 570,
        0xF8 => 500,
        0xF9..=0xFC => times_bold(b'u'),
        0xFD | 0xFF => times_bold(b'y'),
        _ => 500,
    }
}

/// Times-Italic.
pub fn times_italic(b: u8) -> u16 {
    match b {
        b' ' => 250,
        b'!' => 333,
        b'"' => 420,
        b'#' | b'$' => 500,
        b'%' => 833,
        b'&' => 778,
        b'\'' => 214,
        b'(' | b')' => 333,
        b'*' => 500,
        b'+' => 675,
        b',' | b'.' => 250,
        b'-' => 333,
        b'/' => 278,
        b'0'..=b'9' => 500,
        b':' | b';' => 333,
        b'<' | b'=' | b'>' => 675,
        b'?' => 500,
        b'@' => 920,
        b'A' => 611,
        b'B' => 611,
        b'C' => 667,
        b'D' => 722,
        b'E' => 611,
        b'F' => 611,
        b'G' => 722,
        b'H' => 722,
        b'I' => 333,
        b'J' => 444,
        b'K' => 667,
        b'L' => 556,
        b'M' => 833,
        b'N' => 667,
        b'O' => 722,
        b'P' => 611,
        b'Q' => 722,
        b'R' => 611,
        b'S' => 500,
        b'T' => 556,
        b'U' => 722,
        b'V' => 611,
        b'W' => 833,
        b'X' => 611,
        b'Y' => 556,
        b'Z' => 556,
        b'[' | b']' => 389,
        b'\\' => 278,
        b'^' => 422,
        b'_' => 500,
        b'`' => 333,
        b'a' => 500,
        b'b' => 500,
        b'c' => 444,
        b'd' => 500,
        b'e' => 444,
        b'f' => 278,
        b'g' => 500,
        b'h' => 500,
        b'i' | b'j' => 278,
        b'k' => 444,
        b'l' => 278,
        b'm' => 722,
        b'n' => 500,
        b'o' => 500,
        b'p' | b'q' => 500,
        b'r' => 389,
        b's' => 389,
        b't' => 278,
        b'u' => 500,
        b'v' => 444,
        b'w' => 667,
        b'x' => 444,
        b'y' => 444,
        b'z' => 389,
        b'{' | b'}' => 400,
        b'|' => 275,
        b'~' => 541,
        0x85 | 0x89 | 0x97 => 889,
        0x8C => 944,
        0x95 => 350,
        0x96 => 500,
        0x99 => 980,
        0xA0 => 250,
        0xC0..=0xC5 => times_italic(b'A'),
        0xC6 => 889,
        0xC7 => times_italic(b'C'),
        0xC8..=0xCB => times_italic(b'E'),
        0xCC..=0xCF => times_italic(b'I'),
        0xD1 => times_italic(b'N'),
        0xD2..=0xD6 | 0xD8 => times_italic(b'O'),
        0xD7 => 675,
        0xD9..=0xDC => times_italic(b'U'),
        0xDD => times_italic(b'Y'),
        0xDF => 500,
        0xE0..=0xE5 => times_italic(b'a'),
        0xE6 => 667,
        0xE7 => times_italic(b'c'),
        0xE8..=0xEB => times_italic(b'e'),
        0xEC..=0xEF => 278,
        0xF1 => times_italic(b'n'),
        0xF0 | 0xF2..=0xF6 => times_italic(b'o'),
        0xF7 => 675,
        0xF8 => 500,
        0xF9..=0xFC => times_italic(b'u'),
        0xFD | 0xFF => times_italic(b'y'),
        _ => 500,
    }
}

/// Times-BoldItalic.
pub fn times_bold_italic(b: u8) -> u16 {
    match b {
        b' ' => 250,
        b'!' => 389,
        b'"' => 555,
        b'#' | b'$' => 500,
        b'%' => 833,
        b'&' => 778,
        b'\'' => 278,
        b'(' | b')' => 333,
        b'*' => 500,
        b'+' => 570,
        b',' | b'.' => 250,
        b'-' => 333,
        b'/' => 278,
        b'0'..=b'9' => 500,
        b':' | b';' => 333,
        b'<' | b'=' | b'>' => 570,
        b'?' => 500,
        b'@' => 832,
        b'A' => 667,
        b'B' => 667,
        b'C' => 667,
        b'D' => 722,
        b'E' => 667,
        b'F' => 667,
        b'G' => 722,
        b'H' => 778,
        b'I' => 389,
        b'J' => 500,
        b'K' => 667,
        b'L' => 611,
        b'M' => 889,
        b'N' => 722,
        b'O' => 722,
        b'P' => 611,
        b'Q' => 722,
        b'R' => 667,
        b'S' => 556,
        b'T' => 611,
        b'U' => 722,
        b'V' => 667,
        b'W' => 889,
        b'X' => 667,
        b'Y' => 611,
        b'Z' => 611,
        b'[' | b']' => 333,
        b'\\' => 278,
        b'^' => 570,
        b'_' => 500,
        b'`' => 333,
        b'a' => 500,
        b'b' => 500,
        b'c' => 444,
        b'd' => 500,
        b'e' => 444,
        b'f' => 333,
        b'g' => 500,
        b'h' => 556,
        b'i' | b'j' => 278,
        b'k' => 500,
        b'l' => 278,
        b'm' => 778,
        b'n' => 556,
        b'o' => 500,
        b'p' | b'q' => 500,
        b'r' => 389,
        b's' => 389,
        b't' => 278,
        b'u' => 556,
        b'v' => 444,
        b'w' => 667,
        b'x' => 500,
        b'y' => 444,
        b'z' => 389,
        b'{' | b'}' => 348,
        b'|' => 220,
        b'~' => 570,
        0x85 | 0x89 | 0x97 => 1000,
        0x8C => 944,
        0x95 => 350,
        0x96 => 500,
        0x99 => 1000,
        0xA0 => 250,
        0xC0..=0xC5 => times_bold_italic(b'A'),
        0xC6 => 944,
        0xC7 => times_bold_italic(b'C'),
        0xC8..=0xCB => times_bold_italic(b'E'),
        0xCC..=0xCF => times_bold_italic(b'I'),
        0xD1 => times_bold_italic(b'N'),
        0xD2..=0xD6 | 0xD8 => times_bold_italic(b'O'),
        0xD7 => 570,
        0xD9..=0xDC => times_bold_italic(b'U'),
        0xDD => times_bold_italic(b'Y'),
        0xDF => 500,
        0xE0..=0xE5 => times_bold_italic(b'a'),
        0xE6 => 722,
        0xE7 => times_bold_italic(b'c'),
        0xE8..=0xEB => times_bold_italic(b'e'),
        0xEC..=0xEF => 278,
        0xF1 => times_bold_italic(b'n'),
        0xF0 | 0xF2..=0xF6 => times_bold_italic(b'o'),
        0xF7 => 570,
        0xF8 => 500,
        0xF9..=0xFC => times_bold_italic(b'u'),
        0xFD | 0xFF => times_bold_italic(b'y'),
        _ => 500,
    }
}

/// Courier, all four variants: strictly monospaced.
pub fn courier(_b: u8) -> u16 {
    600
}

/// Symbol. A handful of frequently used widths; the face defaults to a
/// wide em elsewhere.
pub fn symbol(b: u8) -> u16 {
    match b {
        b' ' => 250,
        b'!' => 333,
        b'(' | b')' => 333,
        b'+' | b'<' | b'=' | b'>' => 549,
        b',' | b'.' => 250,
        b'/' => 278,
        b'0'..=b'9' => 500,
        b':' | b';' => 278,
        b'?' => 444,
        _ => 600,
    }
}

/// ZapfDingbats. Ornaments are near-uniform.
pub fn zapf_dingbats(b: u8) -> u16 {
    match b {
        b' ' => 278,
        _ => 740,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_core_widths() {
        assert_eq!(helvetica(b' '), 278);
        assert_eq!(helvetica(b'a'), 556);
        assert_eq!(helvetica(b'W'), 944);
        assert_eq!(helvetica(b'i'), 222);
    }

    #[test]
    fn accents_share_base_letter_width() {
        assert_eq!(helvetica(0xE1), helvetica(b'a')); // á
        assert_eq!(helvetica(0xE9), helvetica(b'e')); // é
        assert_eq!(times_roman(0xD6), times_roman(b'O')); // Ö
    }

    #[test]
    fn bold_is_at_least_regular_for_lowercase() {
        for b in b'a'..=b'z' {
            assert!(helvetica_bold(b) >= helvetica(b), "byte {b}");
        }
    }

    #[test]
    fn courier_is_monospaced() {
        for b in 0x20..=0xFFu8 {
            assert_eq!(courier(b), 600);
        }
    }
}
