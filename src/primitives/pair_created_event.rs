use crate::{abi::IUniswapV2Factory, error::DecodeError};

use alloy::{
    primitives::{Address, BlockNumber, U256},
    rpc::types::eth::Log as RpcLog,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCreatedEvent {
    pub token0: Address,
    pub token1: Address,
    pub pair: Address,
    pub pair_index: U256,
    pub block_number: BlockNumber,
}

impl PairCreatedEvent {
    pub fn new(
        token0: Address,
        token1: Address,
        pair: Address,
        pair_index: U256,
        block_number: BlockNumber,
    ) -> Self {
        Self {
            token0,
            token1,
            pair,
            pair_index,
            block_number,
        }
    }
}

impl TryFrom<&RpcLog> for PairCreatedEvent {
    type Error = DecodeError;

    fn try_from(log: &RpcLog) -> Result<Self, Self::Error> {
        let block_number = log.block_number.ok_or(DecodeError::MissingBlockNumber)?;
        let decoded = log.log_decode::<IUniswapV2Factory::PairCreated>()?;
        let event = decoded.inner.data;

        Ok(Self::new(
            event.token0,
            event.token1,
            event.pair,
            event.pairIndex,
            block_number,
        ))
    }
}
