// api/client.rs
use crate::api::api_error::extract_message;
use crate::api::models::{
    CreatePropertyRequest, FilterLookupData, LoginRequest, LoginResponse, PhotoUpload, Property,
    RegisterRequest, UpdatePropertyRequest, UploadedPhoto,
};
use crate::api::ApiError;
use crate::paths::encode_segment;
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Everything the portal asks of the backend. Handlers only see this trait,
/// so tests can swap in a fake backend.
pub trait PortalApi: Send + Sync {
    fn register(&self, req: &RegisterRequest) -> Result<(), ApiError>;
    fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `query` is forwarded verbatim as the query string.
    fn list_properties(&self, query: &[(String, String)]) -> Result<Vec<Property>, ApiError>;
    fn get_property(&self, id: &str) -> Result<Property, ApiError>;
    fn lookup_data(&self) -> Result<FilterLookupData, ApiError>;

    fn create_property(
        &self,
        token: &str,
        req: &CreatePropertyRequest,
    ) -> Result<Property, ApiError>;
    fn update_property(
        &self,
        token: &str,
        id: &str,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, ApiError>;
    fn delete_property(&self, token: &str, id: &str) -> Result<(), ApiError>;
    fn upload_photo(&self, token: &str, photo: &PhotoUpload) -> Result<UploadedPhoto, ApiError>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        debug!(url = %resp.url(), %status, "backend responded");

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        warn!(%status, "backend request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }

    fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.send(builder)?
            .json::<T>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PortalApi for ApiClient {
    fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.send(self.client.post(self.url("/auth/register")).json(req))?;
        Ok(())
    }

    fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(self.client.post(self.url("/auth/login")).json(req))
    }

    fn list_properties(&self, query: &[(String, String)]) -> Result<Vec<Property>, ApiError> {
        self.send_json(self.client.get(self.url("/properties")).query(query))
    }

    fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.send_json(self.client.get(self.url(&format!("/properties/{}", encode_segment(id)))))
    }

    fn lookup_data(&self) -> Result<FilterLookupData, ApiError> {
        self.send_json(self.client.get(self.url("/properties/lookup-data")))
    }

    fn create_property(
        &self,
        token: &str,
        req: &CreatePropertyRequest,
    ) -> Result<Property, ApiError> {
        self.send_json(
            self.client
                .post(self.url("/properties"))
                .bearer_auth(token)
                .json(req),
        )
    }

    fn update_property(
        &self,
        token: &str,
        id: &str,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, ApiError> {
        self.send_json(
            self.client
                .put(self.url(&format!("/properties/{}", encode_segment(id))))
                .bearer_auth(token)
                .json(req),
        )
    }

    fn delete_property(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.send(
            self.client
                .delete(self.url(&format!("/properties/{}", encode_segment(id))))
                .bearer_auth(token),
        )?;
        Ok(())
    }

    fn upload_photo(&self, token: &str, photo: &PhotoUpload) -> Result<UploadedPhoto, ApiError> {
        let part = multipart::Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone())
            .mime_str(&photo.content_type)
            .map_err(|e| ApiError::Network(format!("invalid photo content type: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        self.send_json(
            self.client
                .post(self.url("/properties/upload-photo"))
                .bearer_auth(token)
                .multipart(form),
        )
    }
}
