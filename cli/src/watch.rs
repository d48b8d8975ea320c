use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use console::style;

use bufferpool_crank::{
    CrankEventKind, CrankScheduler, CrankSchedulerConfig, EventSink, RpcFeed,
};
use bufferpool_sdk::PoolConfig;

use crate::Globals;

#[derive(Args, Debug)]
pub struct WatchCliCommand {
    /// Milliseconds between scan passes
    #[arg(long, default_value_t = 5000)]
    pub tick_interval_ms: u64,
    /// Override every buffer's on-chain update interval, in seconds
    #[arg(long)]
    pub min_interval_override: Option<i64>,
}

impl WatchCliCommand {
    pub fn execute(self, globals: &Globals) -> eyre::Result<()> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.watch(globals))
    }

    async fn watch(self, globals: &Globals) -> eyre::Result<()> {
        let config = PoolConfig::load(&globals.config)?;
        let queue = config.queue_pubkey()?;
        let handles = config.buffer_handles()?;

        let client = Arc::new(globals.client()?);
        let feed = Arc::new(RpcFeed::new(client, queue));
        let (events, mut rx) = EventSink::channel();

        let printer = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                match event.kind {
                    CrankEventKind::StateUpdated { result } => println!(
                        "{} {} updated: {}",
                        style("✔").green(),
                        event.handle,
                        String::from_utf8_lossy(&result)
                    ),
                    CrankEventKind::AttemptDispatched => {
                        log::info!("requesting update for {}", event.handle)
                    }
                    CrankEventKind::AttemptSucceeded { signature } => println!(
                        "{} {} open round {signature}",
                        style("✔").green(),
                        event.handle
                    ),
                    CrankEventKind::AttemptFailed { reason } => println!(
                        "{} {} open round failed: {reason}",
                        style("✗").red(),
                        event.handle
                    ),
                }
            }
        });

        let mut scheduler = CrankScheduler::bootstrap(
            feed,
            &handles,
            events,
            CrankSchedulerConfig {
                tick_interval: Duration::from_millis(self.tick_interval_ms),
                min_interval_override: self.min_interval_override,
                ..Default::default()
            },
        )
        .await?;

        let result = scheduler.run().await;
        printer.abort();
        result
    }
}
