//! The PDF object model and its byte-level serialization.
//!
//! Objects hold their entries in insertion order so identical input
//! always serializes to identical bytes.

use std::io::{self, Write};

/// An indirect object id. References serialize as `N 0 R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

/// A direct PDF value.
#[derive(Debug, Clone)]
pub enum Object {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Name(String),
    /// `(...)` string with `\(`, `\)`, `\\` escaping.
    Literal(Vec<u8>),
    /// `<...>` hex string.
    Hex(Vec<u8>),
    Array(Vec<Object>),
    Dict(Dict),
    Ref(ObjectId),
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Ref(id)
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Object::Int(v)
    }
}

impl From<f64> for Object {
    fn from(v: f64) -> Self {
        Object::Real(v)
    }
}

/// A dictionary with deterministic entry order.
#[derive(Debug, Clone, Default)]
pub struct Dict(pub Vec<(String, Object)>);

impl Dict {
    pub fn new() -> Self {
        Dict(Vec::new())
    }

    pub fn set(&mut self, key: &str, value: impl Into<Object>) -> &mut Self {
        self.0.push((key.to_string(), value.into()));
        self
    }

    pub fn name(&mut self, key: &str, value: &str) -> &mut Self {
        self.set(key, Object::Name(value.to_string()))
    }
}

/// Build a [`Dict`] from literal pairs.
macro_rules! dict {
    ($( $key:expr => $value:expr ),* $(,)?) => {{
        let mut d = $crate::object::Dict::new();
        $( d.set($key, $value); )*
        d
    }};
}
pub(crate) use dict;

/// Format a real with at most four fractional digits, trailing zeros
/// trimmed and negative zero normalized.
pub fn format_real(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut s = format!("{rounded:.4}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Serialize a direct object.
pub fn write_object(out: &mut impl Write, object: &Object) -> io::Result<()> {
    match object {
        Object::Null => out.write_all(b"null"),
        Object::Bool(b) => out.write_all(if *b { b"true" } else { b"false" }),
        Object::Int(i) => write!(out, "{i}"),
        Object::Real(r) => out.write_all(format_real(*r).as_bytes()),
        Object::Name(name) => write!(out, "/{name}"),
        Object::Literal(bytes) => {
            out.write_all(b"(")?;
            for &b in bytes {
                match b {
                    b'(' => out.write_all(b"\\(")?,
                    b')' => out.write_all(b"\\)")?,
                    b'\\' => out.write_all(b"\\\\")?,
                    b'\n' => out.write_all(b"\\n")?,
                    b'\r' => out.write_all(b"\\r")?,
                    _ => out.write_all(&[b])?,
                }
            }
            out.write_all(b")")
        }
        Object::Hex(bytes) => {
            out.write_all(b"<")?;
            for &b in bytes {
                write!(out, "{b:02X}")?;
            }
            out.write_all(b">")
        }
        Object::Array(items) => {
            out.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_all(b" ")?;
                }
                write_object(out, item)?;
            }
            out.write_all(b"]")
        }
        Object::Dict(dict) => write_dict(out, dict),
        Object::Ref(ObjectId(n)) => write!(out, "{n} 0 R"),
    }
}

/// Serialize a dictionary.
pub fn write_dict(out: &mut impl Write, dict: &Dict) -> io::Result<()> {
    out.write_all(b"<< ")?;
    for (key, value) in &dict.0 {
        write!(out, "/{key} ")?;
        write_object(out, value)?;
        out.write_all(b" ")?;
    }
    out.write_all(b">>")
}
