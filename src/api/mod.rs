//! HTTP API Client
//!
//! Typed wrappers for the Monedero REST API: one function per endpoint,
//! grouped per resource. Every wrapper returns the deserialized body on
//! success and a human-readable message on failure; mutating wrappers never
//! touch local state, callers re-fetch the affected list afterwards.

pub mod auth;
pub mod categories;
pub mod expenses;
pub mod users;

use gloo_net::http::Response;

use crate::state::session::Session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

const API_URL_KEY: &str = "monedero_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize: remove trailing slash
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Error body shape the backend uses across resources
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Injected HTTP client carrying the base URL and the session that provides
/// the Bearer header.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: normalize_base(base_url),
            session,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.session.token().unwrap_or_default())
    }

    /// Check a response from an authenticated endpoint. A 401 means the
    /// session expired: tear it down so the route guard redirects to login.
    pub(crate) async fn verify(&self, response: Response) -> Result<Response, String> {
        if response.status() == 401 {
            self.session.clear();
            return Err("Sesión expirada".to_string());
        }
        ensure_ok(response).await
    }
}

/// Check a response without touching the session. Login and registration
/// failures are credential errors, not expiry.
pub(crate) async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiError>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    };
    Err(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base("http://localhost:3000"), "http://localhost:3000");
    }
}
