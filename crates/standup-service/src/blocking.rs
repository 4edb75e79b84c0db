use tokio::runtime::Runtime;

use crate::{ServiceError, WebhookService};

/// Blocking wrapper around the async `WebhookService`.
///
/// Owns a tokio runtime and uses `block_on()` for each call, for sync
/// callers like the TUI. Must not be used from inside another runtime.
pub struct BlockingWebhookService {
    inner: WebhookService,
    rt: Runtime,
}

impl BlockingWebhookService {
    pub fn new(inner: WebhookService) -> Result<Self, ServiceError> {
        let rt = Runtime::new()
            .map_err(|e| ServiceError::Runtime(format!("failed to create tokio runtime: {e}")))?;
        Ok(Self { inner, rt })
    }

    pub fn url(&self) -> &str {
        self.inner.url()
    }

    pub fn dispatch(&self, text: &str) -> Result<serde_json::Value, ServiceError> {
        self.rt.block_on(self.inner.send_text(text))
    }
}
