use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";

const MEBIBYTE: u64 = 1024 * 1024;
const BYTES_PER_PAGE: u64 = 100 * 1024;
const MAX_PAGES: u64 = 500;

//
// ─── ERRORS (upload validation) ───────────────────────────────────────────────
//

/// Reasons an uploaded document is rejected before any content is produced.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("No file provided. Please select a file to upload.")]
    Missing,

    #[error("Please upload a valid PDF file.")]
    NotPdf,

    #[error("The uploaded file appears to be empty. Please try a different file.")]
    Empty,

    #[error(
        "PDF file is too large. Please upload a file smaller than {}MB.",
        .max_bytes / MEBIBYTE
    )]
    TooLarge { size_bytes: u64, max_bytes: u64 },

    #[error(
        "The uploaded file appears to be too small to be a valid PDF. Please try a different file."
    )]
    TooSmall { size_bytes: u64, min_bytes: u64 },
}

//
// ─── FILE DESCRIPTOR ──────────────────────────────────────────────────────────
//

/// What the generator knows about an upload: name, size and declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type,
        }
    }

    /// Shorthand for a file declared as `application/pdf`.
    pub fn pdf(name: impl Into<String>, size_bytes: u64) -> Self {
        Self::new(name, size_bytes, Some(PDF_MIME.to_string()))
    }

    /// PDF by declared type or by a `.pdf` extension.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        let by_type = self.mime_type.as_deref() == Some(PDF_MIME);
        let by_name = self.name.to_lowercase().ends_with(".pdf");
        by_type || by_name
    }

    /// Rough page estimate at 100 KiB per page, kept within `1..=500`.
    #[must_use]
    pub fn estimated_pages(&self) -> u32 {
        let pages = (self.size_bytes / BYTES_PER_PAGE).clamp(1, MAX_PAGES);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

//
// ─── LIMITS ───────────────────────────────────────────────────────────────────
//

/// Size window accepted for uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub min_bytes: u64,
    pub max_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            min_bytes: 1024,
            max_bytes: 50 * MEBIBYTE,
        }
    }
}

impl UploadLimits {
    /// Check an upload against these limits.
    ///
    /// Checks run in a fixed order: presence, type, emptiness, upper bound,
    /// lower bound. The first failing check is reported.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first failing check.
    pub fn validate(&self, file: &UploadedFile) -> Result<(), ValidationError> {
        if file.name.trim().is_empty() {
            return Err(ValidationError::Missing);
        }
        if !file.is_pdf() {
            return Err(ValidationError::NotPdf);
        }
        if file.size_bytes == 0 {
            return Err(ValidationError::Empty);
        }
        if file.size_bytes > self.max_bytes {
            return Err(ValidationError::TooLarge {
                size_bytes: file.size_bytes,
                max_bytes: self.max_bytes,
            });
        }
        if file.size_bytes < self.min_bytes {
            return Err(ValidationError::TooSmall {
                size_bytes: file.size_bytes,
                min_bytes: self.min_bytes,
            });
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_detected_by_type_or_extension() {
        assert!(UploadedFile::pdf("notes", 2048).is_pdf());
        assert!(UploadedFile::new("Notes.PDF", 2048, None).is_pdf());
        assert!(!UploadedFile::new("notes.docx", 2048, Some("application/msword".into())).is_pdf());
    }

    #[test]
    fn page_estimate_is_clamped() {
        assert_eq!(UploadedFile::pdf("a.pdf", 2048).estimated_pages(), 1);
        assert_eq!(UploadedFile::pdf("a.pdf", 512_000).estimated_pages(), 5);
        assert_eq!(
            UploadedFile::pdf("a.pdf", 50 * MEBIBYTE).estimated_pages(),
            500
        );
    }

    #[test]
    fn validation_order_and_messages() {
        let limits = UploadLimits::default();

        let err = limits.validate(&UploadedFile::pdf("  ", 4096)).unwrap_err();
        assert_eq!(err, ValidationError::Missing);

        let err = limits
            .validate(&UploadedFile::new("notes.txt", 0, Some("text/plain".into())))
            .unwrap_err();
        assert_eq!(err, ValidationError::NotPdf);

        let err = limits.validate(&UploadedFile::pdf("a.pdf", 0)).unwrap_err();
        assert_eq!(err, ValidationError::Empty);

        let err = limits
            .validate(&UploadedFile::pdf("a.pdf", 50 * MEBIBYTE + 1))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PDF file is too large. Please upload a file smaller than 50MB."
        );

        let err = limits.validate(&UploadedFile::pdf("a.pdf", 1023)).unwrap_err();
        assert!(matches!(err, ValidationError::TooSmall { size_bytes: 1023, .. }));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let limits = UploadLimits::default();
        assert!(limits.validate(&UploadedFile::pdf("a.pdf", 1024)).is_ok());
        assert!(limits.validate(&UploadedFile::pdf("a.pdf", 50 * MEBIBYTE)).is_ok());
    }
}
