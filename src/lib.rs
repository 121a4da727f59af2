pub use config::{Config, PollerConfig};
pub use error::{ConfigError, ConnectivityError, DecodeError, LookupError, NotifyError};

pub use notifier::{Notifier, PairCreatedMessage, TelegramNotifier};
pub use poller::{CycleOutcome, EventPoller, PollCursor, PollerState};
pub use primitives::{EnrichedPair, PairCreatedEvent, ReserveSnapshot};
pub use providers::{
    ChainClient, EtherscanVerificationProvider, LiquidityLookup, RpcChainClient,
    UniswapV2LiquidityProvider, VerificationLookup,
};

mod abi;
mod error;
mod notifier;
mod poller;
mod primitives;
mod providers;

pub mod config;
pub mod constants;

#[cfg(test)]
mod test_utils;
