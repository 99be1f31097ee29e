//! Upload rules of the `media` collection.
//!
//! The CMS platform resizes and re-encodes uploads. The normalizer uses
//! the variant table to pick up the generated renditions, and the
//! acceptance check to refuse uploads the collection would never store.

use crate::error::CoreError;

/// Source uploads larger than this are rejected (5 MB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "application/pdf"];

/// A resized rendition generated for every image upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageVariant {
    pub name: &'static str,
    pub width: u32,
    /// `None` keeps the source aspect ratio.
    pub height: Option<u32>,
}

pub const IMAGE_VARIANTS: [ImageVariant; 3] = [
    ImageVariant { name: "thumbnail", width: 400, height: None },
    ImageVariant { name: "card", width: 800, height: Some(800) },
    ImageVariant { name: "large", width: 1920, height: None },
];

/// Check that an upload may be accepted by the media collection.
pub fn validate_upload(mime_type: &str, size_bytes: u64) -> Result<(), CoreError> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        return Err(CoreError::Validation(format!(
            "Unsupported media type '{mime_type}'. Accepted: {}",
            ACCEPTED_MIME_TYPES.join(", ")
        )));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Upload is {size_bytes} bytes; the limit is {MAX_UPLOAD_BYTES}"
        )));
    }
    Ok(())
}

/// Whether variants are generated for this MIME type (PDFs are stored as-is).
pub fn has_variants(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}
