use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failures of the external still-capture step.
///
/// The capture program's exit status and output file are checked explicitly,
/// so a broken camera surfaces here instead of as a confusing file-not-found
/// at upload time.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture program not found: {0}")]
    ProgramNotFound(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} exited successfully but wrote no image at {}", .path.display())]
    MissingImage { program: String, path: PathBuf },
}

/// Failures talking to the Mastodon instance.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: ureq::Error },

    #[error("{url} returned HTTP {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// Anything that can abort the capture-and-post pipeline. Nothing is caught
/// or retried; the next scheduled run starts from scratch.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("{0}")]
    Capture(#[from] CaptureError),

    #[error("failed to read {}: {source}", .path.display())]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Api(#[from] ApiError),
}
