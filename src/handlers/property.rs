// src/handlers/property.rs
use crate::api::{ApiError, Property};
use crate::auth::guard::{self, login_redirect, Access};
use crate::auth::SessionStore;
use crate::domain::{submit_new_property, CreateError};
use crate::errors::ServerError;
use crate::filters::criteria::LISTING_PATH;
use crate::forms::multipart::read_multipart;
use crate::forms::{check, FieldErrors, PropertyForm};
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::paths::property_path;
use crate::router::{read_bytes, read_form};
use crate::state::AppState;
use crate::templates::components::error::size_label;
use crate::templates::pages::detail::{FETCH_ERROR, NOT_FOUND};
use crate::templates::pages::{create_page, detail_page, edit_page};
use astra::Body;
use http::header::CONTENT_TYPE;
use http::request::Parts;
use tracing::{info, warn};

pub const SAVE_ERROR: &str = "Something went wrong while saving the property.";
pub const DELETE_ERROR: &str = "Something went wrong while deleting the property.";

/// Multipart field the create form sends its photo in.
pub const PHOTO_FIELD: &str = "photo";

pub fn detail(state: &AppState, session: &SessionStore, id: &str) -> ResultResp {
    let (status, result) = fetch(state, id);
    html_response_with_status(status, detail_page(session.is_authenticated(), &result))
}

fn fetch(state: &AppState, id: &str) -> (u16, Result<Property, String>) {
    match state.api.get_property(id) {
        Ok(property) => (200, Ok(property)),
        Err(e) if e.is_not_found() => (404, Err(NOT_FOUND.to_string())),
        Err(e) => {
            warn!(id, "property fetch failed: {e}");
            (502, Err(e.user_message(FETCH_ERROR)))
        }
    }
}

pub fn edit_form(state: &AppState, session: &SessionStore, id: &str) -> ResultResp {
    if let Access::Denied = guard::check(session) {
        return login_redirect();
    }

    match fetch(state, id) {
        (_, Ok(property)) => html_response(edit_page(
            id,
            &PropertyForm::from_property(&property),
            &FieldErrors::default(),
            None,
        )),
        (status, err) => html_response_with_status(status, detail_page(true, &err)),
    }
}

pub fn update(state: &AppState, session: &SessionStore, id: &str, body: Body) -> ResultResp {
    let Access::Granted(token) = guard::check(session) else {
        return login_redirect();
    };

    let form = PropertyForm::from_form(&read_form(body)?);
    if let Err(errors) = check(&form) {
        return html_response_with_status(422, edit_page(id, &form, &errors, None));
    }

    match state.api.update_property(&token, id, &form.to_update_request()) {
        Ok(_) => {
            info!(id, "property updated");
            see_other(&property_path(id))
        }
        Err(e) => {
            warn!(id, "property update failed: {e}");
            let message = e.user_message(SAVE_ERROR);
            html_response_with_status(
                failure_status(&e),
                edit_page(id, &form, &FieldErrors::default(), Some(&message)),
            )
        }
    }
}

pub fn delete(state: &AppState, session: &SessionStore, id: &str) -> ResultResp {
    let Access::Granted(token) = guard::check(session) else {
        return login_redirect();
    };

    match state.api.delete_property(&token, id) {
        Ok(()) => {
            info!(id, "property deleted");
            see_other(LISTING_PATH)
        }
        Err(e) => {
            warn!(id, "property delete failed: {e}");
            html_response_with_status(
                failure_status(&e),
                detail_page(true, &Err(e.user_message(DELETE_ERROR))),
            )
        }
    }
}

pub fn create_form(session: &SessionStore) -> ResultResp {
    if let Access::Denied = guard::check(session) {
        return login_redirect();
    }
    html_response(create_page(&PropertyForm::default(), &FieldErrors::default(), None))
}

/// Validate, then upload the photo (if any) and create the listing, in that
/// order. Nothing is sent to the backend unless the form is valid.
pub fn create(state: &AppState, session: &SessionStore, parts: &Parts, body: Body) -> ResultResp {
    if let Access::Denied = guard::check(session) {
        return login_redirect();
    }

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("missing content type".into()))?;
    let bytes = match read_bytes(body) {
        Ok(bytes) => bytes,
        Err(ServerError::PayloadTooLarge { limit }) => {
            warn!(limit, "create submission over the size limit");
            let message = format!("The photo is too large (max {}).", size_label(limit));
            return html_response_with_status(
                413,
                create_page(&PropertyForm::default(), &FieldErrors::default(), Some(&message)),
            );
        }
        Err(e) => return Err(e),
    };
    let submitted = read_multipart(content_type, bytes, PHOTO_FIELD)?;

    let form = PropertyForm::from_form(&submitted.fields);
    if let Err(errors) = check(&form) {
        return html_response_with_status(422, create_page(&form, &errors, None));
    }

    match submit_new_property(
        state.api.as_ref(),
        session,
        form.to_create_request(),
        submitted.file.as_ref(),
    ) {
        Ok(_) => see_other(LISTING_PATH),
        Err(CreateError::NotAuthenticated) => login_redirect(),
        Err(e) => html_response_with_status(
            502,
            create_page(&form, &FieldErrors::default(), Some(&e.user_message())),
        ),
    }
}

fn failure_status(e: &ApiError) -> u16 {
    match e.status() {
        Some(status) if (400..500).contains(&status) => status,
        _ => 502,
    }
}
