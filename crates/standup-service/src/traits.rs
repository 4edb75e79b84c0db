use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The webhook answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("webhook request failed: {0}")]
    Transport(String),

    #[error("invalid webhook response: {0}")]
    Decode(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl ServiceError {
    /// HTTP status code, when the failure came from the webhook itself.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// JSON body accepted by the chat webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub text: String,
}

/// Delivers a rendered status message.
///
/// One call issues exactly one outbound request. There is no retry; a
/// failed delivery is returned to the caller as-is.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, text: &str) -> Result<serde_json::Value, ServiceError>;
}
