use async_trait::async_trait;
use futures::stream::BoxStream;
use mockall::automock;
use solana_sdk::{pubkey::Pubkey, signature::Signature};

use bufferpool_sdk::BufferRelayerState;

/// Everything the scheduler needs from the chain. One-shot reads cover
/// bootstrap; push subscriptions and round submission cover steady state.
#[automock]
#[async_trait]
pub trait ChainFeed: Send + Sync {
    async fn read_buffer(&self, handle: Pubkey) -> eyre::Result<BufferRelayerState>;
    async fn read_clock(&self) -> eyre::Result<i64>;

    /// Raw account bytes for every change to `handle`, for the life of the
    /// returned stream.
    async fn subscribe_buffer(&self, handle: Pubkey)
        -> eyre::Result<BoxStream<'static, Vec<u8>>>;

    /// Chain unix timestamps from the clock sysvar.
    async fn subscribe_clock(&self) -> eyre::Result<BoxStream<'static, i64>>;

    async fn open_round(&self, handle: Pubkey) -> eyre::Result<Signature>;
}
