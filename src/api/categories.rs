//! Category endpoints. Listing is keyed by owner email; rename and delete
//! are keyed by category id.

use gloo_net::http::Request;

use super::ApiClient;
use crate::state::global::Category;

impl ApiClient {
    /// List the categories owned by an email. A body that is not a JSON
    /// array deserializes to the empty list rather than failing.
    pub async fn categories_by_email(&self, email: &str) -> Result<Vec<Category>, String> {
        let response = Request::get(
            &self.url(&format!("/categories/email/{}", urlencoding::encode(email))),
        )
        .header("Authorization", &self.bearer())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

        let response = self.verify(response).await?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if !body.is_array() {
            return Ok(Vec::new());
        }

        serde_json::from_value(body).map_err(|e| format!("Parse error: {}", e))
    }

    /// Create a category owned by an email
    pub async fn create_category(&self, email: &str, name: &str) -> Result<(), String> {
        #[derive(serde::Serialize)]
        struct CreateCategoryRequest {
            email: String,
            name: String,
        }

        let response = Request::post(&self.url("/categories/addCategories"))
            .header("Authorization", &self.bearer())
            .json(&CreateCategoryRequest {
                email: email.to_string(),
                name: name.to_string(),
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }

    /// Rename a category
    pub async fn rename_category(&self, id: &str, name: &str) -> Result<(), String> {
        #[derive(serde::Serialize)]
        struct RenameCategoryRequest {
            name: String,
        }

        let response = Request::put(&self.url(&format!("/categories/id/{}", id)))
            .header("Authorization", &self.bearer())
            .json(&RenameCategoryRequest {
                name: name.to_string(),
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }

    /// Delete a category
    pub async fn delete_category(&self, id: &str) -> Result<(), String> {
        let response = Request::delete(&self.url(&format!("/categories/id/{}", id)))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }
}
