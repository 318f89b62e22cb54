// src/domain/create.rs
use crate::api::{ApiError, CreatePropertyRequest, PhotoUpload, PortalApi, Property};
use crate::auth::session::{SessionStore, TokenStorage};
use thiserror::Error;
use tracing::{error, info};

pub const CREATE_ERROR: &str = "Something went wrong while adding the property.";

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("not signed in")]
    NotAuthenticated,
    #[error("photo upload failed: {0}")]
    Upload(ApiError),
    #[error("property create failed: {0}")]
    Create(ApiError),
}

impl CreateError {
    pub fn user_message(&self) -> String {
        match self {
            CreateError::NotAuthenticated => "You need to sign in first.".to_string(),
            CreateError::Upload(e) | CreateError::Create(e) => e.user_message(CREATE_ERROR),
        }
    }
}

/// Create a listing, uploading its photo first when one was chosen.
///
/// The create call is only made after the upload has returned its URL; a
/// failed upload ends the submission, so a listing never exists without the
/// photo the user picked. Without a session nothing is sent at all.
pub fn submit_new_property<S: TokenStorage>(
    api: &dyn PortalApi,
    session: &SessionStore<S>,
    mut draft: CreatePropertyRequest,
    photo: Option<&PhotoUpload>,
) -> Result<Property, CreateError> {
    let token = session.get_token().ok_or(CreateError::NotAuthenticated)?;

    draft.photos = match photo {
        Some(photo) => {
            let uploaded = api.upload_photo(&token, photo).map_err(|e| {
                error!("photo upload failed: {e}");
                CreateError::Upload(e)
            })?;
            vec![uploaded.file_url]
        }
        None => Vec::new(),
    };

    let created = api.create_property(&token, &draft).map_err(|e| {
        error!("property create failed: {e}");
        CreateError::Create(e)
    })?;

    info!(id = %created.id, photos = draft.photos.len(), "property created");
    Ok(created)
}
