// src/handlers/auth.rs
use crate::auth::{SessionStore, LOGIN_PATH};
use crate::filters::criteria::LISTING_PATH;
use crate::forms::{check, FieldErrors, FormData, LoginForm, RegisterForm};
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{login_page, register_page, RegisterVm};
use tracing::{info, warn};

pub const LOGIN_ERROR: &str = "Login failed.";
pub const REGISTER_ERROR: &str = "Registration failed.";
pub const REGISTER_SUCCESS: &str = "Registration successful. You can now log in.";

pub fn login_form() -> ResultResp {
    html_response(login_page(&LoginForm::default(), &FieldErrors::default(), None))
}

pub fn login(state: &AppState, session: &mut SessionStore, form: &FormData) -> ResultResp {
    let form = LoginForm::from_form(form);
    if let Err(errors) = check(&form) {
        return html_response_with_status(422, login_page(&form, &errors, None));
    }

    match state.api.login(&form.to_request()) {
        Ok(resp) => {
            session.set_token(&resp.access_token);
            info!(username = %form.username, "signed in");
            see_other(LISTING_PATH)
        }
        Err(e) => {
            warn!(username = %form.username, "login failed: {e}");
            let message = e.user_message(LOGIN_ERROR);
            html_response_with_status(401, login_page(&form, &FieldErrors::default(), Some(&message)))
        }
    }
}

pub fn register_form() -> ResultResp {
    html_response(register_page(&RegisterVm {
        form: &RegisterForm::default(),
        errors: &FieldErrors::default(),
        error: None,
        success: None,
    }))
}

pub fn register(state: &AppState, form: &FormData) -> ResultResp {
    let form = RegisterForm::from_form(form);
    if let Err(errors) = check(&form) {
        return html_response_with_status(
            422,
            register_page(&RegisterVm {
                form: &form,
                errors: &errors,
                error: None,
                success: None,
            }),
        );
    }

    match state.api.register(&form.to_request()) {
        Ok(()) => {
            info!(username = %form.username, "registered");
            html_response(register_page(&RegisterVm {
                form: &RegisterForm::default(),
                errors: &FieldErrors::default(),
                error: None,
                success: Some(REGISTER_SUCCESS),
            }))
        }
        Err(e) => {
            warn!(username = %form.username, "registration failed: {e}");
            let message = e.user_message(REGISTER_ERROR);
            html_response_with_status(
                e.status().filter(|s| (400..500).contains(s)).unwrap_or(502),
                register_page(&RegisterVm {
                    form: &form,
                    errors: &FieldErrors::default(),
                    error: Some(&message),
                    success: None,
                }),
            )
        }
    }
}

pub fn logout(session: &mut SessionStore) -> ResultResp {
    session.remove_token();
    see_other(LOGIN_PATH)
}
