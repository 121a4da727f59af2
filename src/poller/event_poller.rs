use super::PollCursor;
use crate::{
    config::PollerConfig,
    notifier::{Notifier, PairCreatedMessage},
    primitives::{EnrichedPair, PairCreatedEvent},
    providers::{ChainClient, LiquidityLookup, VerificationLookup},
};

use alloy::primitives::{Address, BlockNumber};
use std::future::Future;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Polling,
    Enriching(Address),
    ErrorBackoff,
}

/// What the loop should wait for before the next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Idle,
    Backoff,
}

/// Discovers factory `PairCreated` events block range by block range,
/// enriches each one and hands the result to the notifier.
pub struct EventPoller<C, V, L, N> {
    chain_client: C,
    verification_lookup: V,
    liquidity_lookup: L,
    notifier: N,

    config: PollerConfig,
    explorer_url: Url,

    cursor: PollCursor,
    // range whose log fetch failed, retried verbatim before anything else
    retry_range: Option<(BlockNumber, BlockNumber)>,
    state: PollerState,
}

impl<C, V, L, N> EventPoller<C, V, L, N>
where
    C: ChainClient,
    V: VerificationLookup,
    L: LiquidityLookup,
    N: Notifier,
{
    pub fn new(
        config: &PollerConfig,
        explorer_url: &Url,
        chain_client: C,
        verification_lookup: V,
        liquidity_lookup: L,
        notifier: N,
    ) -> Self {
        Self {
            chain_client,
            verification_lookup,
            liquidity_lookup,
            notifier,
            config: config.clone(),
            explorer_url: explorer_url.clone(),
            cursor: PollCursor::default(),
            retry_range: None,
            state: PollerState::Idle,
        }
    }

    /// Resume from a known block instead of the chain head.
    pub fn with_cursor(mut self, block_number: BlockNumber) -> Self {
        self.cursor = PollCursor::at(block_number);
        self
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Polls until `shutdown` resolves. An in-flight cycle is abandoned on
    /// shutdown; the cursor only moves once a cycle completes.
    pub async fn run<S>(&mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!(
            poll_interval = ?self.config.poll_interval,
            error_backoff = ?self.config.error_backoff,
            "poller started"
        );

        loop {
            let outcome = tokio::select! {
                _ = &mut shutdown => break,
                outcome = self.poll_once() => outcome,
            };

            let wait = match outcome {
                CycleOutcome::Idle => self.config.poll_interval,
                CycleOutcome::Backoff => self.config.error_backoff,
            };

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(wait) => {}
            }
        }

        info!(cursor = ?self.cursor.get(), "poller stopped");
    }

    /// Runs a single cycle to completion.
    #[instrument(skip(self), fields(cursor = ?self.cursor.get()))]
    pub async fn poll_once(&mut self) -> CycleOutcome {
        self.state = PollerState::Polling;

        let (from_block, to_block) = match self.retry_range {
            Some(range) => range,
            None => {
                let current_height = match self.chain_client.current_height().await {
                    Ok(current_height) => current_height,
                    Err(err) => {
                        error!("current_height failed: {}", err);
                        return self.enter_backoff();
                    }
                };

                if self.cursor.get().is_none() {
                    info!(
                        block_number = current_height,
                        "starting from current chain height"
                    );
                    self.cursor.advance(current_height);
                    return self.enter_idle();
                }

                match self.cursor.next_range(current_height) {
                    Some(range) => range,
                    None => {
                        debug!(current_height = current_height, "no new blocks");
                        return self.enter_idle();
                    }
                }
            }
        };

        let logs = match self
            .chain_client
            .get_pair_created_logs(from_block, to_block)
            .await
        {
            Ok(logs) => logs,
            Err(err) => {
                error!(
                    from_block = from_block,
                    to_block = to_block,
                    "get_pair_created_logs failed, will retry range: {}",
                    err
                );
                self.retry_range = Some((from_block, to_block));
                return self.enter_backoff();
            }
        };
        self.retry_range = None;

        debug!(
            from_block = from_block,
            to_block = to_block,
            log_count = logs.len(),
            "fetched PairCreated logs"
        );

        for log in logs.iter() {
            match PairCreatedEvent::try_from(log) {
                Ok(event) => self.process_event(event).await,
                Err(err) => {
                    warn!(
                        block_number = ?log.block_number,
                        transaction_hash = ?log.transaction_hash,
                        log_index = ?log.log_index,
                        "skipping undecodable log: {}",
                        err
                    );
                }
            }
        }

        self.cursor.advance(to_block);
        self.enter_idle()
    }

    async fn process_event(&mut self, event: PairCreatedEvent) {
        self.state = PollerState::Enriching(event.pair);

        let enriched_pair = self.enrich(event).await;
        let text = PairCreatedMessage::new(&enriched_pair, &self.explorer_url).to_string();

        info!(
            pair = %enriched_pair.event.pair,
            block_number = enriched_pair.event.block_number,
            "{}",
            text
        );

        if let Err(err) = self.notifier.send(&text).await {
            error!(pair = %enriched_pair.event.pair, "notification failed: {}", err);
        }
    }

    async fn enrich(&self, event: PairCreatedEvent) -> EnrichedPair {
        let (token0_verified, token1_verified, reserves) = tokio::join!(
            self.verification_lookup.is_verified(event.token0),
            self.verification_lookup.is_verified(event.token1),
            self.liquidity_lookup.get_reserves(event.pair)
        );

        EnrichedPair::new(event, token0_verified, token1_verified, reserves)
    }

    fn enter_idle(&mut self) -> CycleOutcome {
        self.state = PollerState::Idle;
        CycleOutcome::Idle
    }

    fn enter_backoff(&mut self) -> CycleOutcome {
        self.state = PollerState::ErrorBackoff;
        CycleOutcome::Backoff
    }
}
