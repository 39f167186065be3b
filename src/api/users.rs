//! User endpoints: profile lookup and registration.

use gloo_net::http::Request;

use super::{ApiClient, ApiError};
use crate::state::global::User;

/// Registration payload. `user_name` defaults to the email's local part on
/// the login page.
#[derive(Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub user_status: String,
}

impl ApiClient {
    /// Fetch a user profile. The backend keys this route by the same value
    /// the category routes use as owner, so callers pass the authenticated
    /// email as the id segment.
    pub async fn fetch_user(&self, id: &str) -> Result<User, String> {
        let response = Request::get(&self.url(&format!("/user/{}", urlencoding::encode(id))))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = self.verify(response).await?;

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Register a new account. Surfaces the backend's error message when it
    /// supplies one, else a generic failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), String> {
        let response = Request::post(&self.url("/user/addUser"))
            .json(request)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|_| "No se pudo crear la cuenta".to_string())?;

        if !response.ok() {
            let message = match response.json::<ApiError>().await {
                Ok(body) => body.error,
                Err(_) => "No se pudo crear la cuenta".to_string(),
            };
            return Err(message);
        }

        Ok(())
    }
}
