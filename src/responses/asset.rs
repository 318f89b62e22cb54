// responses/asset.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use std::path::{Component, Path};
use tracing::debug;

/// Serve a file from the static directory. Only plain file names are
/// accepted, so requests can't climb out of `dir`.
pub fn static_file(dir: &Path, name: &str) -> ResultResp {
    let rel = Path::new(name);
    let plain = rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if name.is_empty() || !plain {
        return Err(ServerError::NotFound);
    }

    let path = dir.join(rel);
    let bytes = std::fs::read(&path).map_err(|e| {
        debug!(path = %path.display(), "static file unavailable: {e}");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn content_type(path: &Path) -> mime::Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
