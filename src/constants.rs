use alloy::primitives::{address, Address};
use std::time::Duration;

// Uniswap V2 on Ethereum mainnet
pub const UNISWAP_V2_FACTORY_ADDRESS: Address =
    address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(15);
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";
pub const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
