use alloy::primitives::BlockNumber;

/// Last fully processed block height. Empty until the first successful
/// height read; never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollCursor(Option<BlockNumber>);

impl PollCursor {
    pub fn at(block_number: BlockNumber) -> Self {
        Self(Some(block_number))
    }

    pub fn get(&self) -> Option<BlockNumber> {
        self.0
    }

    /// Inclusive range of blocks not yet processed, if `current_height` is
    /// ahead of the cursor.
    pub fn next_range(&self, current_height: BlockNumber) -> Option<(BlockNumber, BlockNumber)> {
        match self.0 {
            Some(cursor) if current_height > cursor => Some((cursor + 1, current_height)),
            _ => None,
        }
    }

    pub fn advance(&mut self, block_number: BlockNumber) {
        self.0 = Some(match self.0 {
            Some(cursor) => cursor.max(block_number),
            None => block_number,
        });
    }
}
