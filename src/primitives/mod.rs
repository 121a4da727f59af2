pub use enriched_pair::EnrichedPair;
pub use pair_created_event::PairCreatedEvent;
pub use reserve_snapshot::ReserveSnapshot;

mod enriched_pair;
mod pair_created_event;
mod reserve_snapshot;
