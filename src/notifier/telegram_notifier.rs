use super::Notifier;
use crate::error::NotifyError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts messages to a single chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    send_message_url: Url,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_url: &Url,
        token: &str,
        chat_id: String,
        request_timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        let send_message_url = Url::parse(&format!(
            "{}/bot{}/sendMessage",
            api_url.as_str().trim_end_matches('/'),
            token
        ))?;

        Ok(Self {
            client,
            send_message_url,
            chat_id,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip_all)]
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url.clone())
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
                parse_mode: "Markdown",
                disable_web_page_preview: true,
            })
            .send()
            .await?;

        // error replies carry the reason in `description`, keep it when present
        let status = response.status();
        let body = response.bytes().await?;
        let reply = match serde_json::from_slice::<SendMessageResponse>(&body) {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => return Err(NotifyError::Status(status)),
            Err(err) => return Err(err.into()),
        };

        if !reply.ok || !status.is_success() {
            let description = reply
                .description
                .unwrap_or_else(|| format!("status {}", status));
            return Err(NotifyError::Rejected(description));
        }

        debug!(chat_id = %self.chat_id, "message delivered");

        Ok(())
    }
}
