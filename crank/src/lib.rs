//! Tick-driven crank for a pool of buffer relayer accounts.
//!
//! The scheduler keeps one eligibility record per buffer and advances it
//! from on-chain observations pushed over websocket subscriptions. Whenever
//! the chain clock passes a buffer's next eligible time, an update request
//! is fired without waiting on the result.

pub mod clock;
pub mod error;
pub mod events;
pub mod feed;
pub mod listener;
pub mod rpc_feed;
pub mod scheduler;
pub mod store;

pub use crate::clock::ChainClock;
pub use crate::error::CrankError;
pub use crate::events::{CrankEvent, CrankEventKind, EventSink};
pub use crate::feed::{ChainFeed, MockChainFeed};
pub use crate::rpc_feed::RpcFeed;
pub use crate::scheduler::{CrankScheduler, CrankSchedulerConfig};
pub use crate::store::{ScheduleRecord, ScheduleStore, ScheduleUpdate};
