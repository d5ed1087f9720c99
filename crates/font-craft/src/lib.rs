//! Font handling for PDF typesetting.
//!
//! This crate owns everything font-shaped:
//!
//! - [`Standard14`] tags with Adobe Font Metrics width, kerning, and
//!   vertical-metric tables ([`widths`], [`kerning`])
//! - WinAnsi (cp1252) encoding for Standard 14 text ([`winansi`])
//! - [`TrueTypeFont`], a parse-once handle over an embedded font file
//! - the glyph subsetter ([`subset`]) producing a rebuilt TrueType
//!   program plus the deterministic six-letter subset tag
//! - the unified [`Font`] handle the document model references
//!
//! Nothing here knows about PDF syntax; the emission layer consumes these
//! types when it writes font dictionaries and `FontFile2` streams.

pub mod error;
pub mod font;
pub mod kerning;
pub mod standard;
pub mod subset;
pub mod truetype;
pub mod widths;
pub mod winansi;

pub use error::FontError;
pub use font::Font;
pub use standard::Standard14;
pub use subset::{subset, SubsetFont};
pub use truetype::TrueTypeFont;
