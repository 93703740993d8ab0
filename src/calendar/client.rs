use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;
use super::event::{CreatedEvent, Event, EventId, EventInput, Identity};
use crate::config::ServerConfig;

/// The REST resources the app consumes. `HttpClient` is the real one; tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// `GET /api/events`
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// `POST /api/events`
    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError>;

    /// `PUT /api/events/{id}`
    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<(), ApiError>;

    /// `DELETE /api/events/{id}`
    async fn delete_event(&self, id: EventId) -> Result<(), ApiError>;

    /// `GET /api/me`
    async fn current_user(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Health {
    status: String,
}

impl HttpClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = config.session_cookie.as_deref() {
            headers.insert(COOKIE, HeaderValue::from_str(cookie)?);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`, returning the reported status string.
    pub async fn health(&self) -> Result<String, ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        let health: Health = read_json(response).await?;
        Ok(health.status)
    }
}

#[async_trait]
impl EventsApi for HttpClient {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        debug!(url = %self.base_url, "GET /api/events");
        let response = self.client.get(self.url("/api/events")).send().await?;
        read_json(response).await
    }

    async fn create_event(&self, input: &EventInput) -> Result<Event, ApiError> {
        debug!(name = %input.name, "POST /api/events");
        let response = self
            .client
            .post(self.url("/api/events"))
            .json(input)
            .send()
            .await?;
        let created: CreatedEvent = read_json(response).await?;
        Ok(created.into_event())
    }

    async fn update_event(&self, id: EventId, input: &EventInput) -> Result<(), ApiError> {
        debug!(id, "PUT /api/events/{}", id);
        let response = self
            .client
            .put(self.url(&format!("/api/events/{id}")))
            .json(input)
            .send()
            .await?;
        expect_success(response).await
    }

    async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        debug!(id, "DELETE /api/events/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("/api/events/{id}")))
            .send()
            .await?;
        expect_success(response).await
    }

    async fn current_user(&self) -> Result<String, ApiError> {
        let response = self.client.get(self.url("/api/me")).send().await?;
        let identity: Identity = read_json(response).await?;
        Ok(identity.username)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(server_error(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await?;
    Err(server_error(status.as_u16(), &body))
}

fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error);
    ApiError::Server { status, message }
}
