use thiserror::Error;

/// Errors raised while parsing or subsetting an embedded font.
///
/// All variants are hard errors: they surface on first use of the font and
/// abort the write. Missing glyph coverage is never an error (the caller
/// substitutes `.notdef` and records it).
#[derive(Debug, Error)]
pub enum FontError {
    /// The bytes are not a parseable TrueType font.
    #[error("failed to parse TrueType font: {reason}")]
    Parse { reason: String },

    /// A table required for embedding is absent.
    #[error("font is missing required table {table:?}")]
    MissingTable { table: &'static str },

    /// A table is present but its contents are inconsistent.
    #[error("malformed {table:?} table: {reason}")]
    Malformed {
        table: &'static str,
        reason: String,
    },
}
