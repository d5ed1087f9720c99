//! Streaming PDF file writer.
//!
//! One pass over the sink: header, then indirect objects in emission
//! order (each offset recorded the moment it is written), then the xref
//! table, trailer, `startxref`, and `%%EOF`. Ids are allocated separately
//! from emission so cyclic references (pages tree <-> page) resolve with
//! a two-pass id assignment.
//!
//! The writer is a strict state machine; calls in the wrong state are
//! programming errors surfaced as [`PdfError::OutOfOrder`], and a sink
//! failure poisons the writer permanently.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::PdfError;
use crate::object::{write_dict, write_object, Dict, Object, ObjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    WritingObjects,
    Closed,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Open => "Open",
            State::WritingObjects => "WritingObjects",
            State::Closed => "Closed",
        }
    }
}

/// Serializer over any byte sink.
pub struct FileWriter<W: Write> {
    sink: W,
    offset: u64,
    state: State,
    poisoned: bool,
    next_id: u32,
    xref: BTreeMap<u32, u64>,
}

impl<W: Write> FileWriter<W> {
    pub fn new(sink: W) -> Self {
        FileWriter {
            sink,
            offset: 0,
            state: State::Open,
            poisoned: false,
            next_id: 1,
            xref: BTreeMap::new(),
        }
    }

    /// Reserve the next object id without emitting anything.
    pub fn allocate(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Write the file header and enter the object-writing state.
    pub fn begin(&mut self) -> Result<(), PdfError> {
        self.expect(State::Open)?;
        // Four high bytes after the version line mark the file as binary.
        self.emit(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n")?;
        self.state = State::WritingObjects;
        Ok(())
    }

    /// Emit an allocated object. The byte offset is recorded at this
    /// moment for the xref table.
    pub fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<(), PdfError> {
        self.expect(State::WritingObjects)?;
        self.record(id)?;
        let mut body = Vec::new();
        write_object(&mut body, object).map_err(PdfError::Io)?;
        self.emit(format!("{} 0 obj\n", id.0).as_bytes())?;
        self.emit(&body)?;
        self.emit(b"\nendobj\n")
    }

    /// Emit a stream object. `/Length` is appended to the caller's
    /// dictionary; the data must already be encoded (compressed) as its
    /// filters declare.
    pub fn write_stream(
        &mut self,
        id: ObjectId,
        mut dict: Dict,
        data: &[u8],
    ) -> Result<(), PdfError> {
        self.expect(State::WritingObjects)?;
        self.record(id)?;
        dict.set("Length", data.len() as i64);
        let mut head = Vec::new();
        write_dict(&mut head, &dict).map_err(PdfError::Io)?;
        self.emit(format!("{} 0 obj\n", id.0).as_bytes())?;
        self.emit(&head)?;
        self.emit(b"\nstream\n")?;
        self.emit(data)?;
        self.emit(b"\nendstream\nendobj\n")
    }

    /// Write xref, trailer, `startxref`, `%%EOF` and close the writer.
    ///
    /// Every allocated id must have been emitted; a dangling reference is
    /// a programming error.
    pub fn finish(
        &mut self,
        root: ObjectId,
        info: Option<ObjectId>,
    ) -> Result<(), PdfError> {
        self.expect(State::WritingObjects)?;
        for id in 1..self.next_id {
            if !self.xref.contains_key(&id) {
                return Err(PdfError::OutOfOrder {
                    expected: "all allocated objects emitted",
                    found: "unemitted object id",
                });
            }
        }

        let xref_offset = self.offset;
        let count = self.next_id;
        self.emit(format!("xref\n0 {count}\n").as_bytes())?;
        self.emit(b"0000000000 65535 f \n")?;
        let entries: Vec<u64> = self.xref.values().copied().collect();
        for offset in entries {
            self.emit(format!("{offset:010} 00000 n \n").as_bytes())?;
        }

        let mut trailer = Dict::new();
        trailer.set("Size", count as i64);
        trailer.set("Root", root);
        if let Some(info) = info {
            trailer.set("Info", info);
        }
        let mut body = Vec::new();
        write_dict(&mut body, &trailer).map_err(PdfError::Io)?;
        self.emit(b"trailer\n")?;
        self.emit(&body)?;
        self.emit(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes())?;

        self.state = State::Closed;
        self.sink.flush().map_err(|e| self.poison(e))?;
        Ok(())
    }

    /// Byte offset recorded for an object id, if it has been emitted.
    pub fn offset_of(&self, id: ObjectId) -> Option<u64> {
        self.xref.get(&id.0).copied()
    }

    fn record(&mut self, id: ObjectId) -> Result<(), PdfError> {
        if id.0 == 0 || id.0 >= self.next_id || self.xref.contains_key(&id.0) {
            return Err(PdfError::OutOfOrder {
                expected: "an allocated, unwritten object id",
                found: "unknown or repeated id",
            });
        }
        self.xref.insert(id.0, self.offset);
        Ok(())
    }

    fn expect(&self, state: State) -> Result<(), PdfError> {
        if self.poisoned {
            return Err(PdfError::Poisoned);
        }
        if self.state != state {
            return Err(PdfError::OutOfOrder {
                expected: state.name(),
                found: self.state.name(),
            });
        }
        Ok(())
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), PdfError> {
        match self.sink.write_all(bytes) {
            Ok(()) => {
                self.offset += bytes.len() as u64;
                Ok(())
            }
            Err(e) => Err(self.poison(e)),
        }
    }

    fn poison(&mut self, error: std::io::Error) -> PdfError {
        self.poisoned = true;
        PdfError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::dict;

    #[test]
    fn header_then_objects_then_xref() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        writer.begin().unwrap();
        let root = writer.allocate();
        writer
            .write_object(root, &Object::Dict(dict! { "Type" => Object::Name("Catalog".into()) }))
            .unwrap();
        writer.finish(root, None).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("%PDF-1.7\n"));
        assert!(text.contains("1 0 obj"));
        assert!(text.contains("xref\n0 2\n"));
        assert!(text.contains("trailer"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn offsets_match_emission_position() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        writer.begin().unwrap();
        let a = writer.allocate();
        let b = writer.allocate();
        writer.write_object(a, &Object::Int(1)).unwrap();
        let offset_a = writer.offset_of(a).unwrap();
        writer.write_object(b, &Object::Int(2)).unwrap();
        let offset_b = writer.offset_of(b).unwrap();
        writer.finish(a, None).unwrap();

        assert_eq!(&out[offset_a as usize..offset_a as usize + 7], b"1 0 obj");
        assert_eq!(&out[offset_b as usize..offset_b as usize + 7], b"2 0 obj");
    }

    #[test]
    fn writing_before_begin_is_rejected() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        let id = writer.allocate();
        let err = writer.write_object(id, &Object::Null).unwrap_err();
        assert!(matches!(err, PdfError::OutOfOrder { .. }));
    }

    #[test]
    fn double_write_of_an_id_is_rejected() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        writer.begin().unwrap();
        let id = writer.allocate();
        writer.write_object(id, &Object::Null).unwrap();
        let err = writer.write_object(id, &Object::Null).unwrap_err();
        assert!(matches!(err, PdfError::OutOfOrder { .. }));
    }

    #[test]
    fn unemitted_allocation_fails_finish() {
        let mut out = Vec::new();
        let mut writer = FileWriter::new(&mut out);
        writer.begin().unwrap();
        let root = writer.allocate();
        writer.write_object(root, &Object::Null).unwrap();
        let _dangling = writer.allocate();
        let err = writer.finish(root, None).unwrap_err();
        assert!(matches!(err, PdfError::OutOfOrder { .. }));
    }

    #[test]
    fn sink_failure_poisons_the_writer() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = FileWriter::new(FailingSink);
        assert!(matches!(writer.begin(), Err(PdfError::Io(_))));
        assert!(matches!(writer.begin(), Err(PdfError::Poisoned)));
    }
}
