use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_shortener::{CreateParams, RequestedValidity};
use serde_json::Value;

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let params = CreateParams {
        original_url: request.url,
        short_code: request.shortcode,
        validity: requested_validity(request.validity),
    };

    let created = state.shortener().create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse {
            shortcode: created.short_code.to_string(),
            short_link: created.short_url,
            expiry: created.expire_at,
        }),
    ))
}

pub async fn resolve_url_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    redirect(&state, &shortcode).await
}

/// `GET /api/shorten` is claimed by the static create route; it still
/// resolves the code `shorten`.
pub async fn resolve_shorten_handler(State(state): State<AppState>) -> Result<Response> {
    redirect(&state, "shorten").await
}

async fn redirect(state: &AppState, shortcode: &str) -> Result<Response> {
    let original_url = state.shortener().resolve(shortcode).await?;
    let location = location_header(&original_url)?;

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

/// Passes the optional `validity` field through for the service to check.
fn requested_validity(raw: Option<Value>) -> RequestedValidity {
    match raw {
        None | Some(Value::Null) => RequestedValidity::Absent,
        Some(Value::Number(n)) => n
            .as_i64()
            .map_or_else(|| RequestedValidity::Malformed(n.to_string()), RequestedValidity::Days),
        Some(other) => RequestedValidity::Malformed(other.to_string()),
    }
}

/// Stored URLs are kept as submitted; non-ASCII ones are re-serialized
/// percent-encoded so they fit in a header.
fn location_header(original_url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let encoded = ::url::Url::parse(original_url)
        .map_err(|e| AppError::Internal(format!("stored url is unparsable: {e}")))?;
    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::Internal(format!("stored url is not a valid header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validity_passes_integers_and_absence() {
        assert_eq!(requested_validity(None), RequestedValidity::Absent);
        assert_eq!(
            requested_validity(Some(Value::Null)),
            RequestedValidity::Absent
        );
        assert_eq!(
            requested_validity(Some(json!(15))),
            RequestedValidity::Days(15)
        );
        assert_eq!(
            requested_validity(Some(json!(-3))),
            RequestedValidity::Days(-3)
        );
    }

    #[test]
    fn validity_keeps_non_integers_as_received() {
        assert_eq!(
            requested_validity(Some(json!(1.5))),
            RequestedValidity::Malformed("1.5".to_string())
        );
        assert_eq!(
            requested_validity(Some(json!("30"))),
            RequestedValidity::Malformed("\"30\"".to_string())
        );
        for raw in [json!(true), json!([30]), json!(u64::MAX)] {
            assert!(matches!(
                requested_validity(Some(raw)),
                RequestedValidity::Malformed(_)
            ));
        }
    }

    #[test]
    fn location_keeps_ascii_urls_verbatim() {
        let value = location_header("https://example.com/a?b=c").unwrap();
        assert_eq!(value, "https://example.com/a?b=c");
    }

    #[test]
    fn location_percent_encodes_unicode() {
        let value = location_header("https://example.com/café").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }
}
