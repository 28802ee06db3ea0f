//! The fixed values the bot runs with. There is no CLI, no environment
//! variables, and no config file: edit these and rebuild.

/// Access token of the Mastodon account the photos are posted as.
pub const ACCESS_TOKEN: &str = "hogehoge";

/// Base URL of the Mastodon instance, without a trailing slash.
pub const API_BASE_URL: &str = "https://mastodon.example";

/// Directory the captured stills are written to. Must exist and be writable.
pub const IMAGE_DIR: &str = "/home/piine/ine";

/// Still-capture command, resolved via PATH. Invoked as `<program> -o <path>`.
pub const CAPTURE_PROGRAM: &str = "libcamera-still";

/// Date format for image file names: "2024-03-07"
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format embedded in the post text: "03/07/08:15"
pub const CAPTION_TIME_FORMAT: &str = "%m/%d/%H:%M";

/// Fixed caption tail; the full post text is "<timestamp> の稲の様子です"
/// ("how the rice plants look as of <timestamp>").
pub const CAPTION_SUFFIX: &str = "の稲の様子です";
