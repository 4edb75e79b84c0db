mod blocking;
mod http;
mod traits;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use blocking::BlockingWebhookService;
pub use http::{WebhookService, DEFAULT_WEBHOOK_URL};
pub use traits::{Dispatcher, ServiceError, WebhookPayload};
