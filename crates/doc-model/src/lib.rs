//! The declarative document tree.
//!
//! Everything the typesetting pipeline consumes as input lives here:
//! documents, pages and page templates, blocks, spans, styles, colors,
//! and unit helpers. The types are plain immutable values; layout and
//! serialization happen downstream in `typeset-engine` and `pdf-emit`.
//!
//! # Example
//!
//! ```
//! use doc_model::{AutoPage, Document, Paragraph, Span, Style};
//!
//! let body = Paragraph::with_spans(vec![
//!     Span::from("The quick brown fox "),
//!     Span::styled(Style::new().bold(), vec![Span::from("jumps")]),
//! ]);
//! let doc = Document::new(vec![AutoPage::new(vec![body.into()]).into()]);
//! assert_eq!(doc.content.len(), 1);
//! ```

pub mod block;
pub mod color;
pub mod drawable;
pub mod hyphenate;
pub mod page;
pub mod span;
pub mod style;
pub mod units;

pub use block::{Align, Block, Paragraph, Rule};
pub use color::Color;
pub use drawable::{Drawable, Point, Stroke};
pub use hyphenate::{Hyphenate, Hyphens, HyphenatorRef};
pub use page::{
    AutoPage, Columns, Document, FrameRect, Margins, Page, PageItem, PageSize, PageTemplate,
    Rotation,
};
pub use span::{flatten, Span};
pub use style::{ResolvedStyle, Style, DEFAULT_LINE_SPACING, DEFAULT_SIZE};

// The font handle is part of the model's public surface: styles carry it.
pub use font_craft::{Font, Standard14};
