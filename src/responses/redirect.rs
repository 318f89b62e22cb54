// responses/redirect.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// Redirect after a form POST; the browser follows with a GET.
pub fn see_other(location: &str) -> ResultResp {
    redirect(303, location)
}

pub fn redirect(status: u16, location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn redirect_with_body(status: u16, location: &str, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Location", location)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
