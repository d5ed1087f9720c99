//! Content-stream builder.
//!
//! Accumulates page description operators into a byte buffer. Numbers go
//! through the same real formatter as the object layer so content and
//! object bytes agree on precision.

use doc_model::Color;

use crate::encoding::{cid_hex, escape_literal};
use crate::object::format_real;

/// One piece of a `TJ` array: a shown string or a pen adjustment in
/// thousandths of the text space.
pub enum TjPiece {
    /// WinAnsi bytes for a literal string.
    Literal(Vec<u8>),
    /// CIDs for a hex string.
    Cids(Vec<u16>),
    /// Adjustment subtracted from the pen position.
    Adjust(f64),
}

/// Builder over the raw operator bytes of one content stream.
#[derive(Default)]
pub struct ContentStream {
    buf: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        ContentStream { buf: Vec::new() }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn op(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(b'\n');
    }

    fn reals(values: &[f64]) -> String {
        values
            .iter()
            .map(|v| format_real(*v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // Graphics state

    pub fn set_fill_color(&mut self, color: Color) {
        self.op(&format!(
            "{} rg",
            Self::reals(&[color.r, color.g, color.b])
        ));
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.op(&format!(
            "{} RG",
            Self::reals(&[color.r, color.g, color.b])
        ));
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.op(&format!("{} w", format_real(width)));
    }

    // Path construction and painting

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.op(&format!("{} m", Self::reals(&[x, y])));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.op(&format!("{} l", Self::reals(&[x, y])));
    }

    pub fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.op(&format!("{} c", Self::reals(&[c1x, c1y, c2x, c2y, x, y])));
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.op(&format!("{} re", Self::reals(&[x, y, width, height])));
    }

    pub fn close_path(&mut self) {
        self.op("h");
    }

    pub fn fill(&mut self) {
        self.op("f");
    }

    pub fn stroke(&mut self) {
        self.op("S");
    }

    pub fn fill_and_stroke(&mut self) {
        self.op("B");
    }

    // Text

    pub fn begin_text(&mut self) {
        self.op("BT");
    }

    pub fn end_text(&mut self) {
        self.op("ET");
    }

    pub fn set_font(&mut self, resource: &str, size: f64) {
        self.op(&format!("/{resource} {} Tf", format_real(size)));
    }

    /// Move the text-line origin by `(dx, dy)` relative to the previous
    /// one.
    pub fn text_position(&mut self, dx: f64, dy: f64) {
        self.op(&format!("{} Td", Self::reals(&[dx, dy])));
    }

    /// Show text with inline pen adjustments.
    pub fn show(&mut self, pieces: &[TjPiece]) {
        self.buf.push(b'[');
        for piece in pieces {
            match piece {
                TjPiece::Literal(bytes) => {
                    self.buf.push(b'(');
                    self.buf.extend_from_slice(&escape_literal(bytes));
                    self.buf.push(b')');
                }
                TjPiece::Cids(gids) => {
                    self.buf.push(b'<');
                    self.buf.extend_from_slice(cid_hex(gids).as_bytes());
                    self.buf.push(b'>');
                }
                TjPiece::Adjust(amount) => {
                    self.buf.extend_from_slice(format_real(*amount).as_bytes());
                    self.buf.push(b' ');
                }
            }
        }
        self.buf.extend_from_slice(b"] TJ\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(stream: ContentStream) -> String {
        String::from_utf8_lossy(&stream.into_bytes()).into_owned()
    }

    #[test]
    fn colors_round_to_four_digits() {
        let mut c = ContentStream::new();
        c.set_fill_color(Color::rgb(1.0 / 3.0, 0.0, 1.0));
        assert_eq!(text(c), "0.3333 0 1 rg\n");
    }

    #[test]
    fn tj_mixes_strings_and_adjustments() {
        let mut c = ContentStream::new();
        c.show(&[
            TjPiece::Literal(b"AV".to_vec()),
            TjPiece::Adjust(70.0),
            TjPiece::Literal(b"A".to_vec()),
        ]);
        assert_eq!(text(c), "[(AV)70 (A)] TJ\n");
    }

    #[test]
    fn cid_pieces_render_hex() {
        let mut c = ContentStream::new();
        c.show(&[TjPiece::Cids(vec![1, 0x20])]);
        assert_eq!(text(c), "[<00010020>] TJ\n");
    }
}
