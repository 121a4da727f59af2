use alloy::transports::TransportError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure talking to the chain node. The poller backs off and retries the
/// same block range.
#[derive(Error, Debug)]
pub enum ConnectivityError {
    #[error("rpc transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("rpc request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to abi decode PairCreated log: {0}")]
    Abi(#[from] alloy::sol_types::Error),
    #[error("log is missing its block number")]
    MissingBlockNumber,
}

/// Raised inside the verification and liquidity lookups only; callers never
/// see it, the lookups resolve to a safe default instead.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsuccessful response status {status}: {message}")]
    Status { status: String, message: String },
    #[error("contract call failed: {0}")]
    Call(#[from] alloy::contract::Error),
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed telegram response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("telegram responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("telegram rejected message: {0}")]
    Rejected(String),
    #[error("invalid telegram api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
