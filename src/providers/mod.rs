pub use chain_client::{ChainClient, RpcChainClient};
pub use liquidity_provider::{LiquidityLookup, UniswapV2LiquidityProvider};
pub use verification_provider::{EtherscanVerificationProvider, VerificationLookup};

mod chain_client;
mod liquidity_provider;
mod verification_provider;
