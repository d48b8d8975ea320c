use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::state::permission::PermissionFlag;

// Instructions the oracle program executes on behalf of the pool.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub enum OracleInstruction {
    None(),                                    // variant 0
    InitQueue(QueueInitArgs),                  // variant 1
    InitCrank(CrankInitArgs),                  // variant 2
    InitOracle(OracleInitArgs),                // variant 3
    InitPermission(PermissionInitArgs),        // variant 4
    SetPermission(PermissionSetArgs),          // variant 5
    InitJob(JobInitArgs),                      // variant 6
    InitBufferRelayer(BufferRelayerInitArgs),  // variant 7
    OpenRound(OpenRoundArgs),                  // variant 8
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct QueueInitArgs {
    pub name: String,
    pub reward: u64,
    pub min_stake: u64,
    pub unpermissioned_feeds: bool,
    pub enable_buffer_relayers: bool,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct CrankInitArgs {
    pub name: String,
    pub max_rows: u32,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct OracleInitArgs {
    pub name: String,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct PermissionInitArgs {
    pub granter: Pubkey,
    pub grantee: Pubkey,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct PermissionSetArgs {
    pub permission: PermissionFlag,
    pub enable: bool,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct JobInitArgs {
    pub name: String,
    pub data: Vec<u8>,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone)]
pub struct BufferRelayerInitArgs {
    pub name: String,
    pub min_update_delay_seconds: u32,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct OpenRoundArgs {}
