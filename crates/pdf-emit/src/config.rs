//! Writer configuration.

use serde::{Deserialize, Serialize};

fn default_compress() -> bool {
    true
}

/// Options controlling PDF serialization.
///
/// The defaults produce deterministic output: no timestamps, no producer
/// string, compressed content streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Flate-compress content streams. Turning this off makes output
    /// human-readable for debugging.
    #[serde(default = "default_compress")]
    pub compress: bool,

    /// Optional document information dictionary. When absent (the
    /// default), no `/Info` object is emitted at all and identical input
    /// yields identical bytes.
    #[serde(default)]
    pub document_info: Option<DocumentInfo>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig::new()
    }
}

impl PdfConfig {
    pub fn new() -> Self {
        PdfConfig {
            compress: true,
            document_info: None,
        }
    }

    pub fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }
}

/// Fields of the `/Info` dictionary. All optional; only set fields are
/// emitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_deterministic() {
        let config = PdfConfig::default();
        assert!(config.document_info.is_none());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: PdfConfig = serde_json::from_str("{}").unwrap();
        assert!(config.compress);
        assert!(config.document_info.is_none());
    }
}
