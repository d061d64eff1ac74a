//! Turns an upload (or raw text) into `ExtractedContent`.
//!
//! No PDF parsing happens here: uploads are validated, sized, and mapped to
//! canned material through the bucket table.

pub mod buckets;
mod key_terms;

pub use buckets::{BucketTemplate, SubjectBucket};
pub use key_terms::extract_key_terms;

use study_core::model::{ExtractedContent, UploadLimits, UploadedFile, ValidationError};
use tracing::{debug, warn};

use crate::classifier::classify;

/// Validate `file` and produce synthetic content for it.
///
/// # Errors
///
/// Returns the `ValidationError` raised by `limits` unchanged.
pub fn synthesize(
    file: &UploadedFile,
    limits: &UploadLimits,
) -> Result<ExtractedContent, ValidationError> {
    if let Err(err) = limits.validate(file) {
        warn!(file = %file.name, size_bytes = file.size_bytes, error = %err, "upload rejected");
        return Err(err);
    }

    let template = buckets::select(&file.name);
    debug!(
        file = %file.name,
        bucket = ?template.bucket,
        category = %classify("", &file.name),
        "selected content bucket"
    );

    Ok(ExtractedContent::new(
        template.paragraph,
        file.estimated_pages(),
        template.key_terms.iter().map(ToString::to_string).collect(),
    ))
}

/// Build content from real text, with key terms ranked by frequency.
#[must_use]
pub fn extract_from_text(text: &str, page_count: u32) -> ExtractedContent {
    let key_terms = extract_key_terms(text);
    debug!(terms = key_terms.len(), "extracted key terms from text");
    ExtractedContent::new(text.trim(), page_count.max(1), key_terms)
}
