//! Zlib compression for `/FlateDecode` streams.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Compress bytes for a stream declaring `/Filter /FlateDecode`.
pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    // Writing into a Vec only fails on allocation failure.
    encoder
        .write_all(data)
        .expect("writing to an in-memory encoder cannot fail");
    encoder
        .finish()
        .expect("finishing an in-memory encoder cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn round_trips_through_inflate() {
        let data = b"stream content stream content stream content";
        let compressed = deflate(data);
        assert!(compressed.len() < data.len());

        let mut decoder = flate2::read::ZlibDecoder::new(compressed.as_slice());
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
    }
}
