//! Document format detection and decoding.
//!
//! The core only ever sees plain strings; this module is the boundary
//! that turns a file into one. Unsupported or undecodable files produce a
//! plain error message, never a panic and never a library-specific error
//! type.

use std::fs;
use std::path::Path;

use crate::office;

/// Supported input formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
    Docx,
    Odt,
}

impl DocumentFormat {
    /// Case-insensitive extension lookup; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "txt" => Some(DocumentFormat::Text),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "odt" => Some(DocumentFormat::Odt),
            _ => None,
        }
    }

    pub const fn extensions() -> &'static [&'static str] {
        &["txt", "pdf", "docx", "odt"]
    }
}

/// Decodes a document to plain text, dispatching on the detected format.
pub fn read_document(path: &Path) -> Result<String, String> {
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Text) => {
            fs::read_to_string(path).map_err(|e| format!("Read .txt failed: {e}"))
        }
        Some(DocumentFormat::Pdf) => pdf_extract::extract_text(path)
            .map_err(|e| format!("Extract PDF text failed: {e}")),
        Some(DocumentFormat::Docx) => office::docx_to_text(path),
        Some(DocumentFormat::Odt) => office::odt_to_text(path),
        None => Err(format!(
            "Unsupported file type: {} (supported: {})",
            path.display(),
            DocumentFormat::extensions().join(", ")
        )),
    }
}
