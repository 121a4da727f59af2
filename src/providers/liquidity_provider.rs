use crate::{abi::IUniswapV2Pair, error::LookupError, primitives::ReserveSnapshot};

use alloy::{primitives::Address, providers::Provider};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::{instrument, warn};

#[async_trait]
pub trait LiquidityLookup: Send + Sync {
    /// Current reserves of the pair, or an empty snapshot on any failure.
    async fn get_reserves(&self, pair_address: Address) -> ReserveSnapshot;
}

pub struct UniswapV2LiquidityProvider<P> {
    inner: Arc<P>,
    request_timeout: Duration,
}

impl<P> UniswapV2LiquidityProvider<P>
where
    P: Provider + 'static,
{
    pub fn new(inner: Arc<P>, request_timeout: Duration) -> Self {
        Self {
            inner,
            request_timeout,
        }
    }

    pub async fn get_uniswap_v2_pair_reserves(
        &self,
        pair_address: Address,
    ) -> Result<ReserveSnapshot, LookupError> {
        let pair = IUniswapV2Pair::new(pair_address, Arc::clone(&self.inner));
        let call = pair.getReserves();

        let reserves = tokio::time::timeout(self.request_timeout, call.call())
            .await
            .map_err(|_| LookupError::Timeout(self.request_timeout))??;

        // uint112 always fits
        Ok(ReserveSnapshot::new(
            reserves.reserve0.to::<u128>(),
            reserves.reserve1.to::<u128>(),
        ))
    }
}

#[async_trait]
impl<P> LiquidityLookup for UniswapV2LiquidityProvider<P>
where
    P: Provider + 'static,
{
    #[instrument(skip(self))]
    async fn get_reserves(&self, pair_address: Address) -> ReserveSnapshot {
        self.get_uniswap_v2_pair_reserves(pair_address)
            .await
            .unwrap_or_else(|err| {
                warn!("getReserves failed, reporting empty reserves: {}", err);
                ReserveSnapshot::default()
            })
    }
}
