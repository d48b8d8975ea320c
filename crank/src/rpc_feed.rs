use std::sync::Arc;

use async_trait::async_trait;
use base64::prelude::*;
use futures::stream::BoxStream;
use futures::StreamExt;
use solana_account_decoder::{UiAccountData, UiAccountEncoding};
use solana_client::nonblocking::pubsub_client::PubsubClient;
use solana_rpc_client_api::config::RpcAccountInfoConfig;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::{pubkey::Pubkey, signature::Signature, sysvar};
use tokio::sync::mpsc;

use bufferpool_sdk::commands::buffer::{get::GetBufferCommand, openround::OpenRoundCommand};
use bufferpool_sdk::{BufferRelayerState, OracleClient, SbClient, SolanaClock};

use crate::feed::ChainFeed;

/// Live [`ChainFeed`] backed by JSON-RPC reads and websocket account
/// subscriptions. Each subscription runs on its own connection so one
/// dropped socket cannot stall the others.
pub struct RpcFeed {
    client: Arc<SbClient>,
    queue: Pubkey,
    ws_url: String,
}

impl RpcFeed {
    pub fn new(client: Arc<SbClient>, queue: Pubkey) -> Self {
        let ws_url = client.get_ws().to_string();
        RpcFeed {
            client,
            queue,
            ws_url,
        }
    }

    fn account_config() -> RpcAccountInfoConfig {
        RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            commitment: Some(CommitmentConfig::confirmed()),
            min_context_slot: None,
        }
    }

    /// Subscribes to `account` on a dedicated connection and forwards the
    /// raw account bytes of every notification into the returned stream.
    async fn subscribe_account(&self, account: Pubkey) -> eyre::Result<BoxStream<'static, Vec<u8>>> {
        let ws_url = self.ws_url.clone();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let client = match PubsubClient::new(&ws_url).await {
                Ok(client) => client,
                Err(err) => {
                    log::error!("websocket connect failed for {account}: {err}");
                    return;
                }
            };
            let (mut notifications, _unsubscribe) = match client
                .account_subscribe(&account, Some(Self::account_config()))
                .await
            {
                Ok(subscription) => subscription,
                Err(err) => {
                    log::error!("account subscribe failed for {account}: {err}");
                    return;
                }
            };

            while let Some(response) = notifications.next().await {
                if let UiAccountData::Binary(data, UiAccountEncoding::Base64) = response.value.data
                {
                    match BASE64_STANDARD.decode(&data) {
                        Ok(bytes) => {
                            if tx.send(bytes).is_err() {
                                break;
                            }
                        }
                        Err(err) => log::warn!("bad account payload for {account}: {err}"),
                    }
                }
            }
            log::warn!("subscription for {account} ended");
        });

        Ok(futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|bytes| (bytes, rx))
        })
        .boxed())
    }
}

#[async_trait]
impl ChainFeed for RpcFeed {
    async fn read_buffer(&self, handle: Pubkey) -> eyre::Result<BufferRelayerState> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || {
            GetBufferCommand { pubkey: handle }.execute(client.as_ref())
        })
        .await?
    }

    async fn read_clock(&self) -> eyre::Result<i64> {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || Ok(client.get_clock()?.unix_timestamp)).await?
    }

    async fn subscribe_buffer(
        &self,
        handle: Pubkey,
    ) -> eyre::Result<BoxStream<'static, Vec<u8>>> {
        self.subscribe_account(handle).await
    }

    async fn subscribe_clock(&self) -> eyre::Result<BoxStream<'static, i64>> {
        let bytes = self.subscribe_account(sysvar::clock::id()).await?;

        Ok(bytes
            .filter_map(|data| async move {
                match SolanaClock::try_from(&data[..]) {
                    Ok(clock) => Some(clock.unix_timestamp),
                    Err(err) => {
                        log::warn!("bad clock sysvar payload: {err}");
                        None
                    }
                }
            })
            .boxed())
    }

    async fn open_round(&self, handle: Pubkey) -> eyre::Result<Signature> {
        let client = self.client.clone();
        let queue = self.queue;
        tokio::task::spawn_blocking(move || {
            OpenRoundCommand {
                buffer: handle,
                queue,
            }
            .execute(client.as_ref())
        })
        .await?
    }
}
