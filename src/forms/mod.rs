pub mod auth;
mod form_data;
pub mod multipart;
pub mod property;
pub mod validation;

pub use auth::{LoginForm, RegisterForm};
pub use form_data::FormData;
pub use property::PropertyForm;
pub use validation::{check, FieldErrors};
