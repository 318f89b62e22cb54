// src/auth/guard.rs
use crate::auth::session::{SessionStore, TokenStorage};
use crate::errors::ResultResp;
use crate::responses::redirect_with_body;
use crate::templates::pages::redirecting_page;

pub const LOGIN_PATH: &str = "/auth/login";

/// Outcome of checking a protected route.
#[derive(Debug, PartialEq)]
pub enum Access {
    Granted(String),
    Denied,
}

/// Checked once per request; a token removed elsewhere is only noticed on
/// the next navigation.
pub fn check<S: TokenStorage>(session: &SessionStore<S>) -> Access {
    match session.get_token() {
        Some(token) => Access::Granted(token),
        None => Access::Denied,
    }
}

/// Send the browser to the login page, with a placeholder body in place of
/// the protected content.
pub fn login_redirect() -> ResultResp {
    redirect_with_body(302, LOGIN_PATH, redirecting_page())
}
