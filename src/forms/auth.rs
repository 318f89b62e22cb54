use crate::api::{LoginRequest, RegisterRequest};
use crate::forms::FormData;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            username: form.value("username"),
            // Passwords are sent as typed.
            password: form.get_raw("password"),
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            username: form.value("username"),
            email: form.value("email"),
            password: form.get_raw("password"),
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
