mod api_error;
mod client;
pub mod models;

pub use api_error::ApiError;
pub use client::{ApiClient, PortalApi};
pub use models::{
    CreatePropertyRequest, FilterLookupData, LoginRequest, LoginResponse, PhotoUpload, Property,
    RegisterRequest, UpdatePropertyRequest, UploadedPhoto,
};
