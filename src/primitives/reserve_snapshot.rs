use std::fmt;

/// Pair reserves at the time of the lookup. The pair stores them as
/// `uint112`, so `u128` holds them without loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveSnapshot {
    pub reserve0: u128,
    pub reserve1: u128,
}

impl ReserveSnapshot {
    pub fn new(reserve0: u128, reserve1: u128) -> Self {
        Self { reserve0, reserve1 }
    }

    pub fn is_empty(&self) -> bool {
        self.reserve0 == 0 && self.reserve1 == 0
    }
}

impl fmt::Display for ReserveSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.reserve0, self.reserve1)
    }
}
