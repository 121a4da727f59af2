use pair_watcher::{
    Config, EtherscanVerificationProvider, EventPoller, RpcChainClient, TelegramNotifier,
    UniswapV2LiquidityProvider,
};

use alloy::providers::ProviderBuilder;
use eyre::{Result, WrapErr};
use std::{str::FromStr, sync::Arc};
use tracing::{info, instrument, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::from_str(&config.rust_log).unwrap_or_default();

    match &config.log_dir {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::hourly(log_dir, "pair-watcher.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(config.tracing_span_events.clone())
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(config.tracing_span_events.clone())
                .init();

            None
        }
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {:?}", err);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("shutdown signal received");
}

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    let _guard = init_tracing(&config);

    info!(
        rust_log = %config.rust_log,
        rpc_url = %config.rpc_url,
        chain_id = config.chain_id,
        "start"
    );

    let rpc_provider = Arc::new(ProviderBuilder::new().connect_http(config.rpc_url.clone()));

    let chain_client = RpcChainClient::new(Arc::clone(&rpc_provider), config.rpc_timeout);
    let liquidity_lookup =
        UniswapV2LiquidityProvider::new(Arc::clone(&rpc_provider), config.rpc_timeout);
    let verification_lookup = EtherscanVerificationProvider::new(
        config.etherscan_api_url.clone(),
        config.etherscan_api_key.clone(),
        config.chain_id,
        config.http_timeout,
    )
    .wrap_err("Failed to create etherscan client")?;
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        &config.telegram_token,
        config.telegram_chat_id.clone(),
        config.http_timeout,
    )
    .wrap_err("Failed to create telegram client")?;

    let mut poller = EventPoller::new(
        &config.poller,
        &config.explorer_url,
        chain_client,
        verification_lookup,
        liquidity_lookup,
        notifier,
    );

    poller.run(shutdown_signal()).await;

    info!("complete");

    Ok(())
}
