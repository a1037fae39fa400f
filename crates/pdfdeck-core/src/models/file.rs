//! Uploaded file records and their identity key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{PDF_EXTENSION, PDF_MIME_TYPE};

// =============================================================================
// FileKey
// =============================================================================

/// Identity of a file within the collection: its name and declared MIME type.
///
/// Content is not part of the key, so two different files that share a name
/// and type are treated as the same file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileKey {
    pub name: String,
    pub mime_type: String,
}

impl FileKey {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mime_type.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.mime_type)
        }
    }
}

// =============================================================================
// FileRecord
// =============================================================================

/// A file accepted into (or offered to) the collection.
///
/// `H` is the opaque binary handle handed to the renderer: a browser `File`
/// in the front end, anything cheap in tests. Records are never mutated after
/// creation.
#[derive(Clone, Debug)]
pub struct FileRecord<H> {
    key: FileKey,
    size_bytes: u64,
    handle: H,
}

impl<H> FileRecord<H> {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        handle: H,
    ) -> Self {
        Self {
            key: FileKey::new(name, mime_type),
            size_bytes,
            handle,
        }
    }

    #[inline]
    pub fn key(&self) -> &FileKey {
        &self.key
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.key.name
    }

    #[inline]
    pub fn mime_type(&self) -> &str {
        &self.key.mime_type
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[inline]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Whether this record passes the PDF type check.
    pub fn is_pdf(&self) -> bool {
        is_pdf(self.name(), self.mime_type())
    }
}

/// Check whether a file counts as a PDF.
///
/// Accepted when the declared MIME type is `application/pdf`, or when the
/// name ends in `.pdf` in any letter case. Browsers often report an empty
/// type for files dragged from some file managers, hence the name fallback.
pub fn is_pdf(name: &str, mime_type: &str) -> bool {
    mime_type == PDF_MIME_TYPE
        || name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_by_mime_type() {
        assert!(is_pdf("report", "application/pdf"));
        assert!(is_pdf("scan.bin", "application/pdf"));
    }

    #[test]
    fn test_is_pdf_by_extension() {
        assert!(is_pdf("report.pdf", ""));
        assert!(is_pdf("REPORT.PDF", "application/octet-stream"));
        assert!(is_pdf("archive.tar.Pdf", ""));
    }

    #[test]
    fn test_is_pdf_rejects_other_files() {
        assert!(!is_pdf("photo.png", "image/png"));
        assert!(!is_pdf("pdf", ""));
        assert!(!is_pdf("notes.pdf.txt", "text/plain"));
        assert!(!is_pdf("README", ""));
    }

    #[test]
    fn test_record_key() {
        let record = FileRecord::new("a.pdf", "application/pdf", 1200, ());
        assert_eq!(record.key(), &FileKey::new("a.pdf", "application/pdf"));
        assert_eq!(record.name(), "a.pdf");
        assert_eq!(record.mime_type(), "application/pdf");
        assert_eq!(record.size_bytes(), 1200);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(
            FileKey::new("a.pdf", "application/pdf").to_string(),
            "a.pdf (application/pdf)"
        );
        assert_eq!(FileKey::new("a.pdf", "").to_string(), "a.pdf");
    }

    #[test]
    fn test_key_serializes_as_object() {
        let json = serde_json::to_string(&FileKey::new("a.pdf", "application/pdf")).unwrap();
        assert_eq!(json, r#"{"name":"a.pdf","mime_type":"application/pdf"}"#);
    }
}
