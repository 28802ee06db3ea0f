//! Captures a daily rice paddy photo and posts it to Mastodon.
//!
//! One linear run per invocation: shoot a still with `libcamera-still`,
//! infer its MIME type from the extension, upload it to the instance, then
//! publish a post whose caption carries the capture time. The binary takes
//! no arguments; cron provides the cadence, and a failed run simply leaves
//! the field to the next one.

pub mod app;
pub mod capture;
pub mod consts;
pub mod error;
pub mod mastodon;
pub mod mime;
pub mod multipart;
pub mod stamp;

pub use app::run;
pub use error::{ApiError, CaptureError, PostError};
pub use mastodon::Client;
