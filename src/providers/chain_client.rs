use crate::{
    abi::IUniswapV2Factory, constants::UNISWAP_V2_FACTORY_ADDRESS, error::ConnectivityError,
};

use alloy::{
    primitives::BlockNumber,
    providers::Provider,
    rpc::types::eth::{Filter, Log},
    sol_types::SolEvent,
};
use async_trait::async_trait;
use std::{future::IntoFuture, sync::Arc, time::Duration};
use tracing::instrument;

#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn current_height(&self) -> Result<BlockNumber, ConnectivityError>;

    /// Raw factory `PairCreated` logs for the inclusive range. An inverted
    /// range yields no logs.
    async fn get_pair_created_logs(
        &self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, ConnectivityError>;
}

pub struct RpcChainClient<P> {
    inner: Arc<P>,
    request_timeout: Duration,
}

impl<P> RpcChainClient<P>
where
    P: Provider + 'static,
{
    pub fn new(inner: Arc<P>, request_timeout: Duration) -> Self {
        Self {
            inner,
            request_timeout,
        }
    }

    async fn with_timeout<F, T>(&self, request: F) -> Result<T, ConnectivityError>
    where
        F: IntoFuture<Output = alloy::transports::TransportResult<T>>,
    {
        tokio::time::timeout(self.request_timeout, request)
            .await
            .map_err(|_| ConnectivityError::Timeout(self.request_timeout))?
            .map_err(ConnectivityError::from)
    }
}

#[async_trait]
impl<P> ChainClient for RpcChainClient<P>
where
    P: Provider + 'static,
{
    #[instrument(skip(self))]
    async fn current_height(&self) -> Result<BlockNumber, ConnectivityError> {
        self.with_timeout(self.inner.get_block_number()).await
    }

    #[instrument(skip(self))]
    async fn get_pair_created_logs(
        &self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<Vec<Log>, ConnectivityError> {
        if from_block > to_block {
            return Ok(Vec::new());
        }

        let filter = Filter::new()
            .address(UNISWAP_V2_FACTORY_ADDRESS)
            .event_signature(IUniswapV2Factory::PairCreated::SIGNATURE_HASH)
            .from_block(from_block)
            .to_block(to_block);

        self.with_timeout(self.inner.get_logs(&filter)).await
    }
}
