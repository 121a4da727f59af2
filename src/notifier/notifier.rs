use crate::error::NotifyError;

use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Best-effort delivery; the caller decides what to do with a failure.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
