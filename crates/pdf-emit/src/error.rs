use thiserror::Error;

/// Errors that abort a write.
///
/// Soft conditions (codepoint substitutions, overfull lines) never raise;
/// they are collected into the [`crate::report::RenderReport`] instead.
#[derive(Debug, Error)]
pub enum PdfError {
    /// Structurally invalid declarative input, raised at the boundary of
    /// the write call.
    #[error("invalid document: {0}")]
    InvalidInput(String),

    /// An embedded font could not be parsed or subset.
    #[error(transparent)]
    Font(#[from] font_craft::FontError),

    /// The output sink failed; the writer is poisoned afterwards.
    #[error("write to output sink failed: {0}")]
    Io(#[from] std::io::Error),

    /// Writer API used out of order.
    #[error("writer used out of order: expected state {expected}, found {found}")]
    OutOfOrder {
        expected: &'static str,
        found: &'static str,
    },

    /// A previous sink failure left the writer unusable.
    #[error("writer is poisoned by an earlier I/O failure")]
    Poisoned,
}

impl PdfError {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            PdfError::InvalidInput(_) => "PDF_INVALID_INPUT",
            PdfError::Font(_) => "PDF_FONT_ERROR",
            PdfError::Io(_) => "PDF_IO_ERROR",
            PdfError::OutOfOrder { .. } => "PDF_WRITER_STATE",
            PdfError::Poisoned => "PDF_WRITER_POISONED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            PdfError::InvalidInput("x".into()),
            PdfError::Io(std::io::Error::other("x")),
            PdfError::OutOfOrder {
                expected: "WritingObjects",
                found: "Closed",
            },
            PdfError::Poisoned,
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
