use crate::api::PhotoUpload;
use crate::errors::ServerError;
use crate::forms::FormData;

/// Browser `multipart/form-data` submission: the text fields plus the
/// optional file chosen in `file_field`.
pub struct MultipartForm {
    pub fields: FormData,
    pub file: Option<PhotoUpload>,
}

pub fn read_multipart(
    content_type: &str,
    body: Vec<u8>,
    file_field: &str,
) -> Result<MultipartForm, ServerError> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| ServerError::BadRequest(format!("invalid multipart body: {e}")))?;

    let stream = futures::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    futures::executor::block_on(async {
        let mut fields = FormData::default();
        let mut file = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ServerError::BadRequest(format!("invalid multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field
                .content_type()
                .map(|m| m.to_string())
                .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::BadRequest(format!("invalid multipart body: {e}")))?;

            match file_name {
                // An empty file input still posts a part, just with no name and no bytes.
                Some(file_name) if name == file_field => {
                    if !file_name.is_empty() && !bytes.is_empty() {
                        file = Some(PhotoUpload {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    fields.push(name, text);
                }
            }
        }

        Ok(MultipartForm { fields, file })
    })
}
