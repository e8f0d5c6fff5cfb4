use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/shorten`.
///
/// Missing strings deserialize as empty so that they are reported by the
/// shortener's own validation. `validity` is kept raw because a non-integer
/// value is a validation error, not a malformed request.
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub shortcode: String,
    #[serde(default)]
    pub validity: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlResponse {
    pub shortcode: String,
    pub short_link: String,
    pub expiry: Timestamp,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
