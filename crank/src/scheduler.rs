use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use solana_sdk::pubkey::Pubkey;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::ChainClock;
use crate::error::CrankError;
use crate::events::{CrankEventKind, EventSink};
use crate::feed::ChainFeed;
use crate::listener::apply_account_update;
use crate::store::{ScheduleRecord, ScheduleStore, ScheduleUpdate};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(5000);
pub const DEFAULT_STALE_TICK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone)]
pub struct CrankSchedulerConfig {
    pub tick_interval: Duration,
    /// Overrides every buffer's on-chain min_update_delay_seconds.
    pub min_interval_override: Option<i64>,
    /// Warn after this many dispatches with no on-chain update in between.
    pub stale_tick_threshold: u32,
}

impl Default for CrankSchedulerConfig {
    fn default() -> Self {
        CrankSchedulerConfig {
            tick_interval: DEFAULT_TICK_INTERVAL,
            min_interval_override: None,
            stale_tick_threshold: DEFAULT_STALE_TICK_THRESHOLD,
        }
    }
}

/// Drives the pool: seeds per-buffer schedules from one-shot reads, keeps
/// them fresh from account subscriptions, and on every tick fires an update
/// request for each eligible buffer without waiting on the result.
pub struct CrankScheduler {
    feed: Arc<dyn ChainFeed>,
    store: Arc<ScheduleStore>,
    clock: Arc<ChainClock>,
    events: EventSink,
    config: CrankSchedulerConfig,
    tasks: Vec<JoinHandle<()>>,
}

impl CrankScheduler {
    /// Reads the chain clock and every configured buffer once, building the
    /// initial schedule. Any failed read aborts startup.
    pub async fn bootstrap(
        feed: Arc<dyn ChainFeed>,
        handles: &[Pubkey],
        events: EventSink,
        config: CrankSchedulerConfig,
    ) -> Result<CrankScheduler, CrankError> {
        if handles.is_empty() {
            return Err(CrankError::EmptyPool);
        }

        let now = feed
            .read_clock()
            .await
            .map_err(|err| CrankError::Bootstrap(format!("clock read failed: {err}")))?;
        let clock = Arc::new(ChainClock::new(now));

        let mut records = HashMap::new();
        for handle in handles {
            let buffer = feed.read_buffer(*handle).await.map_err(|err| {
                CrankError::Bootstrap(format!("buffer read failed for {handle}: {err}"))
            })?;
            let min_interval = config
                .min_interval_override
                .unwrap_or(buffer.min_update_delay_seconds as i64);
            records.insert(
                *handle,
                ScheduleRecord::new(buffer.current_round.round_open_timestamp, min_interval),
            );
        }

        Ok(CrankScheduler {
            feed,
            store: Arc::new(ScheduleStore::new(records)?),
            clock,
            events,
            config,
            tasks: Vec::new(),
        })
    }

    pub fn store(&self) -> Arc<ScheduleStore> {
        self.store.clone()
    }

    pub fn clock(&self) -> Arc<ChainClock> {
        self.clock.clone()
    }

    /// Starts the clock and buffer subscriptions, then scans on every tick
    /// until the task is cancelled.
    pub async fn run(&mut self) -> eyre::Result<()> {
        self.spawn_clock_listener().await?;
        for handle in self.store.handles() {
            self.spawn_buffer_listener(handle).await?;
        }

        let mut ticker = tokio::time::interval(self.config.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!(
            "crank started: {} buffers, tick every {:?}",
            self.store.handles().len(),
            self.config.tick_interval
        );

        loop {
            ticker.tick().await;
            self.tick_once();
        }
    }

    async fn spawn_clock_listener(&mut self) -> eyre::Result<()> {
        let mut timestamps = self.feed.subscribe_clock().await?;
        let clock = self.clock.clone();

        self.tasks.push(tokio::spawn(async move {
            while let Some(unix_timestamp) = timestamps.next().await {
                clock.set(unix_timestamp);
            }
            log::warn!("clock subscription ended");
        }));
        Ok(())
    }

    async fn spawn_buffer_listener(&mut self, handle: Pubkey) -> eyre::Result<()> {
        let mut updates = self.feed.subscribe_buffer(handle).await?;
        let store = self.store.clone();
        let events = self.events.clone();
        let min_interval_override = self.config.min_interval_override;

        self.tasks.push(tokio::spawn(async move {
            while let Some(bytes) = updates.next().await {
                apply_account_update(&store, &events, min_interval_override, handle, &bytes);
            }
            log::warn!("buffer subscription for {handle} ended");
        }));
        Ok(())
    }

    /// One scan pass. Reads the cached clock once, marks every due buffer
    /// as attempted, and hands each update request to its own task. The
    /// scan never waits on submissions.
    fn tick_once(&self) {
        let now = self.clock.now();

        for handle in self.store.due(now) {
            let record = self.store.upsert(&handle, ScheduleUpdate::Attempt { at: now });
            self.events.emit(handle, CrankEventKind::AttemptDispatched);

            if let Some(record) = record {
                if record.attempts_since_observation == self.config.stale_tick_threshold {
                    log::warn!(
                        "buffer {handle} attempted {} times with no on-chain update",
                        record.attempts_since_observation
                    );
                }
            }

            let feed = self.feed.clone();
            let events = self.events.clone();
            tokio::spawn(async move {
                match feed.open_round(handle).await {
                    Ok(signature) => {
                        events.emit(handle, CrankEventKind::AttemptSucceeded { signature })
                    }
                    Err(err) => events.emit(
                        handle,
                        CrankEventKind::AttemptFailed {
                            reason: err.to_string(),
                        },
                    ),
                }
            });
        }
    }
}

impl std::fmt::Debug for CrankScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrankScheduler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Drop for CrankScheduler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
