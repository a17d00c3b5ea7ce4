use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use shared_types::{
    format_date, AppError, CreateTodoRequest, DeadlineResponse, MessageResponse,
    SetDeadlineRequest, Todo, UpdateTodoRequest,
};
use uuid::Uuid;

/// Used when `TODO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Remote calls the client makes. One method per endpoint.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn list_todos(&self, date: NaiveDate) -> Result<Vec<Todo>, AppError>;
    async fn create_todo(&self, req: &CreateTodoRequest) -> Result<Todo, AppError>;
    async fn update_todo(&self, id: Uuid, req: &UpdateTodoRequest) -> Result<Todo, AppError>;
    async fn delete_todo(&self, id: Uuid) -> Result<MessageResponse, AppError>;
    async fn get_deadline(&self) -> Result<DeadlineResponse, AppError>;
    async fn set_deadline(&self, req: &SetDeadlineRequest) -> Result<DeadlineResponse, AppError>;
}

/// `TodoApi` over HTTP.
#[derive(Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at compile time via `TODO_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Read a response body, turning non-2xx statuses into the server's error.
async fn decode<T: DeserializeOwned>(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, AppError> {
    let response = response.map_err(|e| AppError::transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::transport(e.to_string()))?;

    if !status.is_success() {
        return Err(AppError::from_response(status.as_u16(), &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::internal(format!("Unexpected response body: {e}")))
}

impl TodoApi for HttpTodoApi {
    async fn list_todos(&self, date: NaiveDate) -> Result<Vec<Todo>, AppError> {
        let response = self
            .client
            .get(self.url("/todos"))
            .query(&[("date", format_date(date))])
            .send()
            .await;
        decode(response).await
    }

    async fn create_todo(&self, req: &CreateTodoRequest) -> Result<Todo, AppError> {
        let response = self.client.post(self.url("/todos")).json(req).send().await;
        decode(response).await
    }

    async fn update_todo(&self, id: Uuid, req: &UpdateTodoRequest) -> Result<Todo, AppError> {
        let response = self
            .client
            .put(self.url(&format!("/todo/{id}")))
            .json(req)
            .send()
            .await;
        decode(response).await
    }

    async fn delete_todo(&self, id: Uuid) -> Result<MessageResponse, AppError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await;
        decode(response).await
    }

    async fn get_deadline(&self) -> Result<DeadlineResponse, AppError> {
        let response = self.client.get(self.url("/metadata/deadline")).send().await;
        decode(response).await
    }

    async fn set_deadline(&self, req: &SetDeadlineRequest) -> Result<DeadlineResponse, AppError> {
        let response = self
            .client
            .post(self.url("/metadata/deadline"))
            .json(req)
            .send()
            .await;
        decode(response).await
    }
}
