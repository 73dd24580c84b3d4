//! Gallery upload validation and inline `data:` URI encoding.
//!
//! Uploaded images are not written to disk or object storage. The raw bytes
//! are base64-encoded into a `data:<content-type>;base64,<payload>` string and
//! that string is stored in `gallery_images.src` in place of a URL. Every
//! image therefore lives inside its database row, so row size grows with the
//! upload and the table is the only copy of the bytes.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CoreError;

/// Maximum accepted upload size in bytes (5 MiB, inclusive).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// File extensions accepted for gallery uploads (compared lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Declared content types accepted for gallery uploads.
///
/// `image/jpg` is not a registered type but browsers and HTTP clients send it.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Reasons an upload is rejected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No image file provided")]
    MissingFile,

    #[error("Only image files are allowed! Got '{file_name}' ({content_type})")]
    UnsupportedFormat {
        file_name: String,
        content_type: String,
    },

    #[error("Image is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

impl From<UploadError> for CoreError {
    fn from(err: UploadError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Strip parameters from a content type and lowercase it
/// (`"Image/PNG; q=1"` becomes `"image/png"`).
pub fn normalize_content_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Check that both the file extension and the declared content type are on
/// the allow-list. Either one failing rejects the upload.
pub fn check_format(file_name: &str, content_type: &str) -> Result<(), UploadError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let extension_ok = ALLOWED_EXTENSIONS.contains(&extension.as_str());
    let content_type_ok =
        ALLOWED_CONTENT_TYPES.contains(&normalize_content_type(content_type).as_str());

    if extension_ok && content_type_ok {
        Ok(())
    } else {
        Err(UploadError::UnsupportedFormat {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
        })
    }
}

/// Reject payloads above [`MAX_UPLOAD_BYTES`].
pub fn check_size(size: usize) -> Result<(), UploadError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Encode raw image bytes as a `data:` URI suitable for an `<img src>`.
pub fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        normalize_content_type(content_type),
        STANDARD.encode(bytes)
    )
}

/// An inline image split back into its content type and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Decode a base64 `data:` URI produced by [`encode_data_uri`].
///
/// Returns `None` for plain URLs (e.g. `/images/kids.jpg`), non-base64 data
/// URIs, and malformed payloads.
pub fn decode_data_uri(src: &str) -> Option<InlineImage> {
    let rest = src.strip_prefix("data:")?;
    let (content_type, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some(InlineImage {
        content_type: content_type.to_string(),
        bytes,
    })
}
