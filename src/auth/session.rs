// src/auth/session.rs
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use tracing::warn;

/// Cookie the browser keeps the backend's access token in.
pub const TOKEN_KEY: &str = "access_token";

/// Key-value storage the session token lives in.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Cookies sent with the current request, plus the `Set-Cookie` lines that
/// must go back out on the response.
#[derive(Debug, Default)]
pub struct CookieJar {
    incoming: HashMap<String, String>,
    pending: Vec<String>,
    secure: bool,
}

impl CookieJar {
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        let mut incoming = HashMap::new();

        for value in headers.get_all(COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for pair in raw.split(';') {
                if let Some((k, v)) = pair.trim().split_once('=') {
                    incoming.insert(k.trim().to_string(), decode_cookie_value(v.trim()));
                }
            }
        }

        Self {
            incoming,
            pending: Vec::new(),
            secure,
        }
    }

    fn cookie_attrs(&self) -> &'static str {
        if self.secure {
            "Path=/; HttpOnly; SameSite=Lax; Secure"
        } else {
            "Path=/; HttpOnly; SameSite=Lax"
        }
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}

impl TokenStorage for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        self.incoming.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.pending
            .push(format!("{key}={encoded}; {}", self.cookie_attrs()));
        self.incoming.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.pending
            .push(format!("{key}=; Max-Age=0; {}", self.cookie_attrs()));
        self.incoming.remove(key);
    }
}

fn decode_cookie_value(raw: &str) -> String {
    url::form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}

/// Session token access. Without a storage (no request to read cookies
/// from) every operation is a no-op and nobody is authenticated.
pub struct SessionStore<S: TokenStorage = CookieJar> {
    storage: Option<S>,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    pub fn set_token(&mut self, token: &str) {
        if let Some(storage) = self.storage.as_mut() {
            storage.set(TOKEN_KEY, token);
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage
            .as_ref()?
            .get(TOKEN_KEY)
            .filter(|t| !t.is_empty())
    }

    pub fn remove_token(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            storage.remove(TOKEN_KEY);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }
}

impl SessionStore<CookieJar> {
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        Self::new(CookieJar::from_headers(headers, secure))
    }

    /// Copy queued cookie changes onto the outgoing response headers.
    pub fn write_cookies(&self, headers: &mut HeaderMap) {
        let Some(jar) = self.storage.as_ref() else {
            return;
        };
        for line in jar.pending() {
            match HeaderValue::from_str(line) {
                Ok(value) => {
                    headers.append(SET_COOKIE, value);
                }
                Err(e) => warn!("dropping unencodable cookie: {e}"),
            }
        }
    }
}
