//! Extension-based MIME inference for the captured image.

use std::path::Path;

/// Fallback when the extension is missing or unrecognized.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Infer a MIME type from the file extension alone. The capture program is
/// trusted to have written what the extension claims; nothing sniffs bytes.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM;
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => OCTET_STREAM,
    }
}
