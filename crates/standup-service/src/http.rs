use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, warn};

use crate::{Dispatcher, ServiceError, WebhookPayload};

/// Zoho Cliq incoming-bot endpoint. The secret token goes in `zapikey`.
pub const DEFAULT_WEBHOOK_URL: &str = "https://cliq.zoho.com/api/v2/bots/sans/incoming";

/// Async webhook client.
pub struct WebhookService {
    url: String,
    token: Option<String>,
    client: Client,
}

impl WebhookService {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            token: None,
            client: Client::new(),
        }
    }

    pub fn with_token(url: &str, token: String) -> Self {
        Self {
            url: url.trim().to_string(),
            token: Some(token),
            client: Client::new(),
        }
    }

    /// Endpoint URL, without the token.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn with_token_query(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.query(&[("zapikey", token.as_str())]),
            None => builder,
        }
    }

    /// POST `{"text": ...}` and decode the reply.
    pub async fn send_text(&self, text: &str) -> Result<serde_json::Value, ServiceError> {
        let payload = WebhookPayload {
            text: text.to_string(),
        };
        debug!(url = %self.url, bytes = text.len(), "posting status message");

        let builder = self.client.post(&self.url).json(&payload);
        let resp = self
            .with_token_query(builder)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.without_url().to_string()))?;

        handle_response(resp).await
    }
}

#[async_trait]
impl Dispatcher for WebhookService {
    async fn dispatch(&self, text: &str) -> Result<serde_json::Value, ServiceError> {
        self.send_text(text).await
    }
}

async fn handle_response(resp: reqwest::Response) -> Result<serde_json::Value, ServiceError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ServiceError::Transport(format!("read body: {}", e.without_url())))?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "webhook rejected status message");
        return Err(status_error(status, body));
    }

    debug!(status = status.as_u16(), "webhook accepted status message");
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ServiceError::Decode(format!("json decode: {e}")))
}

fn status_error(status: StatusCode, body: String) -> ServiceError {
    ServiceError::Status {
        status: status.as_u16(),
        body,
    }
}
