//! Photo attachments for issue reports.
//!
//! Images arrive as raw bytes and are stored inline as `data:` URLs.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{CivicError, Result};

/// Largest accepted source image, in bytes (5 MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image encoded as a `data:` URL, ready to embed in an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    data_url: String,
    source_len: usize,
}

impl ImageAttachment {
    /// Encode raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns `PayloadTooLarge` if `bytes` exceeds [`MAX_IMAGE_BYTES`],
    /// or `Validation` if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(CivicError::PayloadTooLarge {
                size: bytes.len(),
                limit: MAX_IMAGE_BYTES,
            });
        }
        if bytes.is_empty() {
            return Err(CivicError::validation("image", "file is empty"));
        }

        let mime = sniff_mime(bytes);
        Ok(Self {
            data_url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
            source_len: bytes.len(),
        })
    }

    /// The encoded `data:` URL.
    #[must_use]
    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    #[must_use]
    pub fn into_data_url(self) -> String {
        self.data_url
    }

    /// Size of the original bytes.
    #[must_use]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// MIME type recorded in the URL header.
    #[must_use]
    pub fn mime(&self) -> &str {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("application/octet-stream")
    }
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}
