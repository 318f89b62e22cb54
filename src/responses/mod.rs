pub mod asset;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, html_response_with_status};
pub use redirect::{redirect_with_body, see_other};
