//! Auth endpoints: credential exchange and token identity.

use gloo_net::http::Request;

use super::{ensure_ok, ApiClient};
use crate::state::global::User;

/// Successful login body. The token is the session credential; newer backend
/// builds also include the user profile.
#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Identity behind a Bearer token
#[derive(Debug, serde::Deserialize)]
pub struct Identity {
    pub email: String,
}

impl ApiClient {
    /// Exchange credentials for a token
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        #[derive(serde::Serialize)]
        struct LoginRequest {
            email: String,
            password: String,
        }

        let response = Request::post(&self.url("/auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = ensure_ok(response).await?;

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Resolve the authenticated identity behind the stored token
    pub async fn me(&self) -> Result<Identity, String> {
        let response = Request::get(&self.url("/user/me"))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = self.verify(response).await?;

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }
}
