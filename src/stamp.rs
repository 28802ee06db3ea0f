//! Timestamp derivation for the daily post.
//!
//! Everything the post says about "when" comes from one instant taken at
//! startup, so the image file name and the caption can never disagree.

use chrono::NaiveDateTime;

use crate::consts::{CAPTION_SUFFIX, CAPTION_TIME_FORMAT, FILE_DATE_FORMAT};

/// The two formatted views of the capture instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Filename-safe date, e.g. "2024-03-07".
    pub filename_date: String,
    /// Fragment embedded in the post text, e.g. "03/07/08:15".
    pub caption_fragment: String,
}

impl Stamp {
    /// Derive both strings from the same local instant.
    pub fn from_datetime(t: NaiveDateTime) -> Self {
        Self {
            filename_date: t.format(FILE_DATE_FORMAT).to_string(),
            caption_fragment: t.format(CAPTION_TIME_FORMAT).to_string(),
        }
    }

    /// Image file name for this capture, e.g. "2024-03-07.jpg".
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.filename_date)
    }

    /// Full post text, e.g. "03/07/08:15 の稲の様子です".
    pub fn caption(&self) -> String {
        format!("{} {}", self.caption_fragment, CAPTION_SUFFIX)
    }
}
