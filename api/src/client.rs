//! Todo API client implementation

use crate::{
    error::ApiError,
    types::{ListTodosResponse, NewTodo, Todo, TodoId, TodoPatch},
};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Backend address used when `TASKWIRE_API_URL` is not set
const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Client for the todo backend
#[derive(Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

/// Body of the completion toggle endpoint
#[derive(Serialize)]
struct CompleteBody {
    completed: bool,
}

/// Error body shape optionally returned by the server
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl TodoApiClient {
    /// Create a client with the base URL from the environment
    ///
    /// Reads `TASKWIRE_API_URL`, falling back to `http://localhost:3001`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TASKWIRE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    /// Create a client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch all todos in server order
    ///
    /// An absent `todos` key in the response is treated as an empty list.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .client
            .get(format!("{}/todos", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let envelope = response
            .json::<ListTodosResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(envelope.todos)
    }

    /// Create a todo
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        let response = self
            .client
            .post(format!("{}/todos", self.base_url))
            .json(todo)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Apply a partial update to a todo
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let response = self
            .client
            .put(format!("{}/todos/{id}", self.base_url))
            .json(patch)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Delete a todo
    ///
    /// Empty success responses (204) are accepted; any body is discarded.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or API errors
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::check_status(response).await?;

        Ok(())
    }

    /// Set the completion flag of a todo
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn toggle_complete(&self, id: TodoId, completed: bool) -> Result<Todo, ApiError> {
        let response = self
            .client
            .patch(format!("{}/todos/{id}/complete", self.base_url))
            .json(&CompleteBody { completed })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<Todo>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Turn a non-success response into [`ApiError::Api`]
    ///
    /// The body is probed for `{ "detail": string }`; when absent the
    /// message falls back to `HTTP error! status: {n}`.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail);
        let message = detail.unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
