use crate::api::{
    ApiError, CreatePropertyRequest, FilterLookupData, LoginRequest, LoginResponse, PhotoUpload,
    PortalApi, Property, RegisterRequest, UpdatePropertyRequest, UploadedPhoto,
};
use crate::config::Config;
use crate::geos::builtin_lookup;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// A backend call as the fake saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register(String),
    Login(String),
    List(Vec<(String, String)>),
    Get(String),
    Lookup,
    Create { token: String, photos: Vec<String> },
    Update { token: String, id: String },
    Delete { token: String, id: String },
    Upload { token: String, file_name: String },
}

/// In-process backend. Clones share the call log, so a test can keep one
/// handle and give the other to the router.
#[derive(Clone)]
pub struct FakeApi {
    pub properties: Vec<Property>,
    pub lookup: FilterLookupData,
    failures: HashMap<&'static str, (u16, Option<String>)>,
    delay: Option<Duration>,
    log: Arc<Mutex<Vec<Call>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            properties: sample_properties(),
            lookup: builtin_lookup(),
            failures: HashMap::new(),
            delay: None,
            log: Arc::default(),
            in_flight: Arc::default(),
            max_in_flight: Arc::default(),
        }
    }

    /// Make `op` ("list", "lookup", "login", "upload", ...) answer with `status`.
    pub fn failing(mut self, op: &'static str, status: u16, message: Option<&str>) -> Self {
        self.failures
            .insert(op, (status, message.map(str::to_string)));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn call<T>(&self, op: &'static str, call: Call, ok: impl FnOnce() -> Result<T, ApiError>) -> Result<T, ApiError> {
        self.log.lock().unwrap().push(call);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.failures.get(op) {
            Some((status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => ok(),
        }
    }
}

impl PortalApi for FakeApi {
    fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.call("register", Call::Register(req.username.clone()), || Ok(()))
    }

    fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call("login", Call::Login(req.username.clone()), || {
            Ok(LoginResponse {
                access_token: format!("tok-{}", req.username),
            })
        })
    }

    fn list_properties(&self, query: &[(String, String)]) -> Result<Vec<Property>, ApiError> {
        self.call("list", Call::List(query.to_vec()), || Ok(self.properties.clone()))
    }

    fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        self.call("get", Call::Get(id.to_string()), || {
            self.properties
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ApiError::Status {
                    status: 404,
                    message: Some("Property not found".into()),
                })
        })
    }

    fn lookup_data(&self) -> Result<FilterLookupData, ApiError> {
        self.call("lookup", Call::Lookup, || Ok(self.lookup.clone()))
    }

    fn create_property(&self, token: &str, req: &CreatePropertyRequest) -> Result<Property, ApiError> {
        let call = Call::Create {
            token: token.to_string(),
            photos: req.photos.clone(),
        };
        self.call("create", call, || {
            Ok(Property {
                id: "new-1".into(),
                title: Some(req.title.clone()),
                price: Some(req.price),
                photos: req.photos.clone(),
                ..Default::default()
            })
        })
    }

    fn update_property(
        &self,
        token: &str,
        id: &str,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, ApiError> {
        let call = Call::Update {
            token: token.to_string(),
            id: id.to_string(),
        };
        self.call("update", call, || {
            Ok(Property {
                id: id.to_string(),
                title: req.title.clone(),
                ..Default::default()
            })
        })
    }

    fn delete_property(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let call = Call::Delete {
            token: token.to_string(),
            id: id.to_string(),
        };
        self.call("delete", call, || Ok(()))
    }

    fn upload_photo(&self, token: &str, photo: &PhotoUpload) -> Result<UploadedPhoto, ApiError> {
        let call = Call::Upload {
            token: token.to_string(),
            file_name: photo.file_name.clone(),
        };
        self.call("upload", call, || {
            Ok(UploadedPhoto {
                file_url: format!("https://cdn.test/{}", photo.file_name),
            })
        })
    }
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "p1".into(),
            title: Some("Sea view flat".into()),
            price: Some(1250000.0),
            location: Some("Konyaaltı, Antalya".into()),
            district: Some("Konyaaltı".into()),
            neighborhood: Some("Liman".into()),
            listing_type: Some("sale".into()),
            property_type: Some("apartment".into()),
            ..Default::default()
        },
        Property {
            id: "p2".into(),
            title: Some("Garden villa".into()),
            price: Some(4500.0),
            location: Some("Lara, Antalya".into()),
            listing_type: Some("rental".into()),
            property_type: Some("villa".into()),
            ..Default::default()
        },
        Property {
            id: "p3".into(),
            ..Default::default()
        },
        Property {
            id: "p4".into(),
            title: Some("Olive grove plot".into()),
            property_type: Some("land".into()),
            ..Default::default()
        },
    ]
}

pub fn state_with(api: &FakeApi) -> AppState {
    AppState::new(
        Box::new(api.clone()),
        Config {
            static_dir: "static".into(),
            ..Config::default()
        },
    )
}

pub fn get(uri: &str, token: Option<&str>) -> Request {
    request(Method::GET, uri, token, None, Body::empty())
}

pub fn post_form(uri: &str, form: &str, token: Option<&str>) -> Request {
    request(
        Method::POST,
        uri,
        token,
        Some("application/x-www-form-urlencoded"),
        Body::from(form.as_bytes().to_vec()),
    )
}

pub const BOUNDARY: &str = "----portaltestboundary";

/// `multipart/form-data` body with text `fields` and an optional file part.
pub fn post_multipart(
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
    token: Option<&str>,
) -> Request {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    request(Method::POST, uri, token, Some(&content_type), Body::from(body))
}

fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: Body,
) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Cookie", format!("access_token={token}"));
    }
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    builder.body(body).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
