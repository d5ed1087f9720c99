//! Minimal PDF scanning helpers for structural assertions.

use std::io::Read;

/// Parse the xref table: `(object id, byte offset)` pairs in id order.
pub fn parse_xref(bytes: &[u8]) -> Vec<(u32, u64)> {
    let tail = find(bytes, b"startxref").expect("startxref marker");
    let after = &bytes[tail + "startxref".len()..];
    let offset: usize = std::str::from_utf8(after)
        .unwrap()
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();

    let table = &bytes[offset..];
    let text = std::str::from_utf8(&table[..table.len().min(32)]).unwrap();
    assert!(text.starts_with("xref"), "xref table not at startxref offset");

    let mut lines = std::str::from_utf8(table).unwrap().lines();
    assert_eq!(lines.next(), Some("xref"));
    let header = lines.next().unwrap();
    let count: u32 = header.split_whitespace().nth(1).unwrap().parse().unwrap();

    let mut entries = Vec::new();
    for id in 0..count {
        let line = lines.next().unwrap();
        if id == 0 {
            assert!(line.ends_with("f ") || line.ends_with('f'));
            continue;
        }
        let offset: u64 = line.split_whitespace().next().unwrap().parse().unwrap();
        entries.push((id, offset));
    }
    entries
}

/// The object body starting at `offset`, up to its `endobj`.
pub fn object_at(bytes: &[u8], offset: u64) -> &[u8] {
    let start = offset as usize;
    let end = find(&bytes[start..], b"endobj").expect("endobj") + start;
    &bytes[start..end]
}

/// Raw stream data inside one object slice.
pub fn stream_data(object: &[u8]) -> Option<&[u8]> {
    let start = find(object, b"stream\n")? + "stream\n".len();
    let end = find(object, b"\nendstream")?;
    Some(&object[start..end])
}

/// Inflate a FlateDecode stream.
pub fn inflate(data: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).expect("valid zlib stream");
    out
}

/// First index of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// All objects whose body contains `marker`, as `(id, body)` pairs.
pub fn objects_containing<'a>(bytes: &'a [u8], marker: &[u8]) -> Vec<(u32, &'a [u8])> {
    parse_xref(bytes)
        .into_iter()
        .map(|(id, offset)| (id, object_at(bytes, offset)))
        .filter(|(_, body)| find(body, marker).is_some())
        .collect()
}
