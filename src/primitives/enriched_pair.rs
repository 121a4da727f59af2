use super::{PairCreatedEvent, ReserveSnapshot};

/// A decoded PairCreated event together with its best-effort lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPair {
    pub event: PairCreatedEvent,
    pub token0_verified: bool,
    pub token1_verified: bool,
    pub reserves: ReserveSnapshot,
}

impl EnrichedPair {
    pub fn new(
        event: PairCreatedEvent,
        token0_verified: bool,
        token1_verified: bool,
        reserves: ReserveSnapshot,
    ) -> Self {
        Self {
            event,
            token0_verified,
            token1_verified,
            reserves,
        }
    }
}
