//! The capture-and-post pipeline, start to finish.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::capture::capture_still;
use crate::error::PostError;
use crate::mastodon::{Client, Status};
use crate::mime::guess_mime_type;
use crate::stamp::Stamp;

/// One full run: capture a still, detect its type, upload it, publish the
/// captioned post. Strictly sequential, nothing caught or retried; the first
/// failure aborts the run and is reported by the caller.
///
/// Everything the run depends on comes in as a parameter, the client and the
/// account it is bound to included; nothing is read from the environment.
pub fn run(
    client: &Client,
    capture_program: &str,
    image_dir: &Path,
    now: NaiveDateTime,
) -> Result<Status, PostError> {
    let stamp = Stamp::from_datetime(now);
    let file_name = stamp.file_name();
    let image = image_dir.join(&file_name);

    eprintln!("capturing {}", image.display());
    capture_still(capture_program, &image)?;

    let mime_type = guess_mime_type(&image);
    // The whole image is in memory before any network I/O starts.
    let data = fs::read(&image).map_err(|e| PostError::ReadImage {
        path: image.clone(),
        source: e,
    })?;

    eprintln!("uploading {file_name} ({} bytes, {mime_type})", data.len());
    let media = client.media_post(&file_name, mime_type, &data)?;

    let text = stamp.caption();
    eprintln!("posting \"{text}\" with media {}", media.id);
    let status = client.status_post(&text, &[media.id])?;
    Ok(status)
}
