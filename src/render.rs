//! JSON rendering of extraction results.

use crate::error::{Error, Result};
use crate::model::Document;

/// Output layout for serialized documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, human-readable output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
}

/// Serialize a [`Document`] to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}
