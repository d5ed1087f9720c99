//! The typesetting pipeline: shaping, line breaking, frame filling.
//!
//! Data flows leaf-first: flattened `(text, style)` runs are shaped into
//! glyph runs and a box/glue/penalty stream ([`shape`]), the stream is
//! broken into lines greedily or optimally ([`breaker`]), and the lines
//! are packed into column frames across pages ([`frame`]).
//!
//! Everything here is pure and synchronous; soft conditions (codepoint
//! substitutions, overfull lines) are returned as data, never raised.

pub mod atoms;
pub mod breaker;
pub mod frame;
pub mod hyphenate;
pub mod shape;

pub use atoms::Atom;
pub use breaker::{break_paragraph, Line, LineWidths};
pub use frame::{fill, FillBlock, FillResult, LaidLine, LaidPage, LaidRule, LineItem, ShapedParagraph};
pub use hyphenate::{Heuristic, Patterns};
pub use shape::{shape_paragraph, GlyphRun, Glyph, ShapeOutcome, ShapedGlyph, Substitution};
