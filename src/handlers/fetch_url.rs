use axum::extract::{RawQuery, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::models::link_preview::{format, to_json, EMPTY_ENVELOPE};
use crate::opengraph;
use crate::state::AppState;
use crate::validation::is_valid_url;

/// `true` if every `%` in `pair` starts a two-digit hex escape.
fn has_valid_escapes(pair: &str) -> bool {
    let bytes = pair.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// First `url` parameter of a raw query string, percent-decoded.
///
/// Pairs containing a malformed escape are skipped entirely.
pub fn target_from_query(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .filter(|pair| has_valid_escapes(pair))
        .flat_map(|pair| url::form_urlencoded::parse(pair.as_bytes()))
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

/// ANY /fetchUrl?url=<encoded-url>
///
/// Fetches the target page and answers with its Open Graph title, description
/// and first image in the link-tool JSON envelope. Always `200 OK`: a missing
/// or malformed `url` gives an empty body, an unreachable page gives an
/// envelope with empty fields. `OPTIONS` returns straight away with only the
/// CORS headers.
pub async fn fetch_url(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    tracing::debug!(query = ?query, "New link preview request");

    let target = target_from_query(query.as_deref()).ok_or(AppError::MissingUrl)?;
    if !is_valid_url(&target) {
        return Err(AppError::InvalidUrl(target));
    }

    let html = match state.fetcher.fetch_body(&target).await {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(error = %e, url = %target, "Fetch failed, previewing empty page");
            String::new()
        }
    };

    let og = opengraph::extract(&html);
    let body = to_json(&format(&og)).unwrap_or_else(|e| {
        tracing::error!(error = %e, url = %target, "Sending empty envelope");
        EMPTY_ENVELOPE.to_string()
    });

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
