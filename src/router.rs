use crate::auth::SessionStore;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::{auth, listing, property};
use crate::paths::decode_segment;
use crate::responses::asset::static_file;
use crate::responses::ResultResp;
use crate::state::AppState;
use astra::{Body, Request};
use http::request::Parts;
use std::io::Read;
use tracing::debug;

/// Largest url-encoded form accepted.
const MAX_FORM_BYTES: u64 = 64 * 1024;
/// Largest create submission, photo included.
const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let (parts, body) = req.into_parts();
    let mut session = SessionStore::from_headers(&parts.headers, state.config.secure_cookies);

    let method = parts.method.as_str();
    let path = parts.uri.path();
    let query = parts.uri.query().unwrap_or("");
    let decoded = path
        .trim_matches('/')
        .split('/')
        .map(decode_segment)
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| ServerError::BadRequest("malformed path".into()))?;
    let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

    debug!(method, path, "request");

    let mut resp = match (method, segments.as_slice()) {
        ("GET", [""]) => listing::home(state, &session),
        ("POST", ["search"]) => listing::search(state, &session, &read_form(body)?),

        ("GET", ["properties", "listing"]) => listing::shell(&session, query),
        ("GET", ["properties", "listing-content"]) => {
            listing::content(state, &session, query, is_htmx(&parts))
        }
        ("POST", ["properties", "listing", "filter"]) => {
            listing::filter(state, &session, &read_form(body)?)
        }
        ("POST", ["properties", "listing", "reset"]) => listing::reset(),
        ("GET", ["properties", "neighborhoods"]) => listing::neighborhoods(state, query),

        ("GET", ["properties", "listing", id]) => property::detail(state, &session, id),
        ("GET", ["properties", "listing", id, "edit"]) => property::edit_form(state, &session, id),
        ("POST", ["properties", "listing", id, "edit"]) => {
            property::update(state, &session, id, body)
        }
        ("POST", ["properties", "listing", id, "delete"]) => {
            property::delete(state, &session, id)
        }
        ("GET", ["properties", "create"]) => property::create_form(&session),
        ("POST", ["properties", "create"]) => property::create(state, &session, &parts, body),

        ("GET", ["auth", "login"]) => auth::login_form(),
        ("POST", ["auth", "login"]) => auth::login(state, &mut session, &read_form(body)?),
        ("GET", ["auth", "register"]) => auth::register_form(),
        ("POST", ["auth", "register"]) => auth::register(state, &read_form(body)?),
        ("POST", ["auth", "logout"]) => auth::logout(&mut session),

        ("GET", ["static", file]) => static_file(&state.config.static_dir, file),

        _ => Err(ServerError::NotFound),
    }?;

    session.write_cookies(resp.headers_mut());
    Ok(resp)
}

fn is_htmx(parts: &Parts) -> bool {
    parts.headers.contains_key("hx-request")
}

pub(crate) fn read_form(body: Body) -> Result<FormData, ServerError> {
    read_limited(body, MAX_FORM_BYTES).map(|bytes| FormData::from_urlencoded(&bytes))
}

pub(crate) fn read_bytes(body: Body) -> Result<Vec<u8>, ServerError> {
    read_limited(body, MAX_UPLOAD_BYTES)
}

/// Reads one byte past `limit` so an oversized body is refused rather than
/// silently cut short.
fn read_limited(mut body: Body, limit: u64) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    body.reader()
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;
    if buf.len() as u64 > limit {
        return Err(ServerError::PayloadTooLarge { limit });
    }
    Ok(buf)
}
