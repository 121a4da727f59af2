use crate::primitives::EnrichedPair;

use alloy::primitives::Address;
use std::fmt;
use url::Url;

/// Markdown notification for a newly created pair.
pub struct PairCreatedMessage<'a> {
    pair: &'a EnrichedPair,
    explorer_url: &'a Url,
}

impl<'a> PairCreatedMessage<'a> {
    pub fn new(pair: &'a EnrichedPair, explorer_url: &'a Url) -> Self {
        Self { pair, explorer_url }
    }

    fn address_link(&self, address: &Address) -> String {
        format!(
            "[{}]({}/address/{})",
            address,
            self.explorer_url.as_str().trim_end_matches('/'),
            address
        )
    }
}

fn verification_label(verified: bool) -> &'static str {
    if verified {
        "✅ Verified"
    } else {
        "❌ Not verified"
    }
}

impl fmt::Display for PairCreatedMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = &self.pair.event;

        writeln!(f, "🆕 *New Uniswap V2 pair created!*")?;
        writeln!(
            f,
            "• Token0: {} - {}",
            self.address_link(&event.token0),
            verification_label(self.pair.token0_verified)
        )?;
        writeln!(
            f,
            "• Token1: {} - {}",
            self.address_link(&event.token1),
            verification_label(self.pair.token1_verified)
        )?;
        writeln!(f, "• Pair: {}", self.address_link(&event.pair))?;
        writeln!(f, "• Initial liquidity: {}", self.pair.reserves)?;
        writeln!(f, "• Block: {}", event.block_number)?;
        write!(f, "⚠️ *Sniping newly created tokens is risky!*")
    }
}
