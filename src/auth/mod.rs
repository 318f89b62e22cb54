pub mod guard;
pub mod session;

pub use guard::{Access, LOGIN_PATH};
pub use session::{CookieJar, SessionStore, TokenStorage};
