use crate::error::LookupError;

use alloy::primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

#[async_trait]
pub trait VerificationLookup: Send + Sync {
    /// Whether the block explorer has published source for `address`.
    /// Resolves to `false` on any failure.
    async fn is_verified(&self, address: Address) -> bool;
}

#[derive(Deserialize)]
struct GetSourceCodeResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: Vec<SourceCodeEntry>,
}

#[derive(Deserialize)]
struct SourceCodeEntry {
    #[serde(rename = "SourceCode", default)]
    source_code: String,
}

/// Interprets an Etherscan `getsourcecode` response body.
fn parse_get_source_code_response(body: &[u8]) -> Result<bool, LookupError> {
    let response: GetSourceCodeResponse = serde_json::from_slice(body)?;

    if response.status != "1" {
        return Err(LookupError::Status {
            status: response.status,
            message: response.message,
        });
    }

    Ok(response
        .result
        .first()
        .is_some_and(|entry| !entry.source_code.trim().is_empty()))
}

pub struct EtherscanVerificationProvider {
    client: reqwest::Client,
    api_url: Url,
    api_key: String,
    chain_id: u64,
    request_timeout: Duration,
}

impl EtherscanVerificationProvider {
    pub fn new(
        api_url: Url,
        api_key: String,
        chain_id: u64,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
            chain_id,
            request_timeout,
        })
    }

    async fn get_source_code(&self, address: Address) -> Result<bool, LookupError> {
        let request = async {
            let response = self
                .client
                .get(self.api_url.clone())
                .query(&[
                    ("chainid", self.chain_id.to_string()),
                    ("module", "contract".to_string()),
                    ("action", "getsourcecode".to_string()),
                    ("address", address.to_string()),
                    ("apikey", self.api_key.clone()),
                ])
                .send()
                .await?
                .error_for_status()?;

            let body = response.bytes().await?;
            parse_get_source_code_response(&body)
        };

        tokio::time::timeout(self.request_timeout, request)
            .await
            .map_err(|_| LookupError::Timeout(self.request_timeout))?
    }
}

#[async_trait]
impl VerificationLookup for EtherscanVerificationProvider {
    #[instrument(skip(self))]
    async fn is_verified(&self, address: Address) -> bool {
        match self.get_source_code(address).await {
            Ok(verified) => {
                debug!(verified = verified, "getsourcecode resolved");
                verified
            }
            Err(err) => {
                warn!("getsourcecode failed, treating as unverified: {}", err);
                false
            }
        }
    }
}
