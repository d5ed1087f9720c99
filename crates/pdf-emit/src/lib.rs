//! PDF serialization for the declarative document tree.
//!
//! The crate streams a [`doc_model::Document`] into any `io::Write` sink
//! in a single pass: a header, page and content-stream objects in page
//! order, font objects (Standard 14 dictionaries or subset TrueType
//! programs) at the end, then the cross-reference table and trailer.
//!
//! # Example
//!
//! ```
//! use doc_model::Document;
//! use pdf_emit::{PdfConfig, PdfGenerator};
//!
//! let doc = Document::from_text("Hello, world!");
//! let (bytes, report) = PdfGenerator::new(PdfConfig::default())
//!     .to_bytes(&doc)
//!     .unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! assert!(report.is_clean());
//! ```

pub mod compress;
pub mod config;
pub mod content;
pub mod draw;
pub mod encoding;
pub mod error;
pub mod font_registry;
pub mod generator;
pub mod object;
pub mod report;
pub mod writer;

pub use config::{DocumentInfo, PdfConfig};
pub use error::PdfError;
pub use generator::{write, PdfGenerator};
pub use report::{RenderReport, SubstitutionRecord};

// Re-export the model so callers need a single dependency.
pub use doc_model;
pub use doc_model::Document;
