// errors.rs
use crate::api::ApiError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, malformed requests, etc.) or the backend API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large: over {limit} bytes")]
    PayloadTooLarge { limit: u64 },
    #[error("Backend Error: {0}")]
    Upstream(#[from] ApiError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
