//! Expense endpoints.

use gloo_net::http::Request;

use super::ApiClient;
use crate::state::global::Expense;

/// Fields accepted by the expense create and update routes
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExpensePayload {
    pub name: String,
    pub category_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ApiClient {
    /// List the expenses recorded under a category
    pub async fn expenses_by_category(&self, category_id: &str) -> Result<Vec<Expense>, String> {
        let response = Request::get(&self.url(&format!("/expenses/{}", category_id)))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let response = self.verify(response).await?;

        response.json().await.map_err(|e| format!("Parse error: {}", e))
    }

    /// Create an expense
    pub async fn create_expense(&self, payload: &ExpensePayload) -> Result<(), String> {
        let response = Request::post(&self.url("/expense"))
            .header("Authorization", &self.bearer())
            .json(payload)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }

    /// Update an expense
    pub async fn update_expense(&self, id: &str, payload: &ExpensePayload) -> Result<(), String> {
        let response = Request::put(&self.url(&format!("/expense/{}", id)))
            .header("Authorization", &self.bearer())
            .json(payload)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }

    /// Delete an expense
    pub async fn delete_expense(&self, id: &str) -> Result<(), String> {
        let response = Request::delete(&self.url(&format!("/expense/{}", id)))
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        self.verify(response).await?;
        Ok(())
    }
}
