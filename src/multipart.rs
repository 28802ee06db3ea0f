//! Minimal `multipart/form-data` encoding for the media upload.
//!
//! ureq does not ship multipart support, and the upload needs exactly one
//! file part, so the body is assembled by hand.

use std::time::{SystemTime, UNIX_EPOCH};

/// A single-part form body carrying one file field.
///
/// Field and file names come from the caller's own formatting; no quoting or
/// escaping is attempted.
#[derive(Debug)]
pub struct FormData {
    boundary: String,
    body: Vec<u8>,
}

impl FormData {
    /// Encode `data` as the form field `field` with the given file name and
    /// content type.
    pub fn file_upload(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        let boundary = extend_boundary(boundary_seed(), data);

        let mut body = Vec::with_capacity(data.len() + 256);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Self { boundary, body }
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// The encoded request body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Boundary candidate unique to this process and instant.
fn boundary_seed() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("inecam-{}-{}", std::process::id(), nanos)
}

/// Lengthen the boundary until it does not occur in the payload.
fn extend_boundary(mut boundary: String, data: &[u8]) -> String {
    while contains(data, boundary.as_bytes()) {
        boundary.push('x');
    }
    boundary
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
