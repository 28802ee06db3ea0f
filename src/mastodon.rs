//! Mastodon API client: exactly the two calls the bot needs.

use serde::Deserialize;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::error::ApiError;
use crate::multipart::FormData;

/// Media upload endpoint, relative to the instance base URL. v2 answers 202
/// while an attachment is still being processed, which is fine for a status
/// posted right after.
const MEDIA_PATH: &str = "/api/v2/media";

/// Status creation endpoint.
const STATUS_PATH: &str = "/api/v1/statuses";

/// A media attachment accepted by the instance. Only the id is used: it is
/// handed to the status call once and never persisted.
#[derive(Debug, Deserialize)]
pub struct MediaAttachment {
    pub id: String,
}

/// The created status.
#[derive(Debug, Deserialize)]
pub struct Status {
    pub id: String,
    pub url: Option<String>,
}

/// Client bound to one instance and one account.
///
/// Construction neither parses nor validates anything: a wrong base URL or a
/// revoked token surfaces at the first request, not here.
pub struct Client {
    agent: Agent,
    base_url: String,
    access_token: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        // Non-2xx responses are read below so the instance's own error
        // message can be reported. No timeouts: a run blocks until done.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Upload one image; returns the instance's media reference.
    pub fn media_post(
        &self,
        file_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> Result<MediaAttachment, ApiError> {
        let url = format!("{}{}", self.base_url, MEDIA_PATH);
        let form = FormData::file_upload("file", file_name, mime_type, data);
        let response = self
            .agent
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", form.content_type())
            .send(form.body())
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;
        read_json(&url, response)
    }

    /// Create a post with the given text and attached media.
    pub fn status_post(&self, text: &str, media_ids: &[String]) -> Result<Status, ApiError> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        let response = self
            .agent
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send_json(serde_json::json!({
                "status": text,
                "media_ids": media_ids,
            }))
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;
        read_json(&url, response)
    }
}

/// Decode a 2xx response body, or turn a non-2xx one into an error carrying
/// whatever message the instance sent.
fn read_json<T: serde::de::DeserializeOwned>(
    url: &str,
    response: Response<Body>,
) -> Result<T, ApiError> {
    let status = response.status();
    let mut body = response.into_body();
    if !status.is_success() {
        let text = body.read_to_string().unwrap_or_default();
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_message(text),
        });
    }
    serde_json::from_reader(body.as_reader()).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}

/// Pull the human-readable message out of an error response. Mastodon sends
/// `{"error": "..."}`; anything else is reported as raw text.
fn error_message(text: String) -> String {
    if text.trim().is_empty() {
        return "(empty response body)".to_string();
    }
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(v) => v
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or(text),
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_anything() {
        // Bad values only fail at the first request.
        let _ = Client::new("not a url", "");
        let _ = Client::new("https://mastodon.example", "hogehoge");
    }

    #[test]
    fn error_message_prefers_the_error_field() {
        let text = r#"{"error":"The access token is invalid"}"#.to_string();
        assert_eq!(error_message(text), "The access token is invalid");
    }

    #[test]
    fn error_message_keeps_json_without_an_error_field() {
        let text = r#"{"detail":"nope"}"#.to_string();
        assert_eq!(error_message(text), r#"{"detail":"nope"}"#);
    }

    #[test]
    fn error_message_keeps_plain_text() {
        assert_eq!(
            error_message("502 Bad Gateway".to_string()),
            "502 Bad Gateway"
        );
    }

    #[test]
    fn error_message_flags_an_empty_body() {
        assert_eq!(error_message(String::new()), "(empty response body)");
    }

    #[test]
    fn media_attachment_decodes_from_instance_json() {
        let m: MediaAttachment = serde_json::from_str(
            r#"{"id":"22348641","type":"image","url":"https://files.mastodon.example/a.jpg","preview_url":"https://files.mastodon.example/a_small.jpg","description":null}"#,
        )
        .expect("decode");
        assert_eq!(m.id, "22348641");
    }

    #[test]
    fn status_decodes_with_and_without_url() {
        let s: Status = serde_json::from_str(
            r#"{"id":"113","created_at":"2024-03-07T08:15:02.123Z","url":"https://mastodon.example/@piine/113","visibility":"public"}"#,
        )
        .expect("decode");
        assert_eq!(s.id, "113");
        assert_eq!(s.url.as_deref(), Some("https://mastodon.example/@piine/113"));

        let s: Status = serde_json::from_str(r#"{"id":"114","url":null}"#).expect("decode");
        assert_eq!(s.url, None);
    }
}
