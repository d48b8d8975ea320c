use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

pub const PERMIT_ORACLE_HEARTBEAT: u32 = 1 << 0;
pub const PERMIT_ORACLE_QUEUE_USAGE: u32 = 1 << 1;

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[borsh(use_discriminant = true)]
pub enum PermissionFlag {
    OracleHeartbeat = 0,
    OracleQueueUsage = 1,
}

impl PermissionFlag {
    pub fn mask(&self) -> u32 {
        match self {
            PermissionFlag::OracleHeartbeat => PERMIT_ORACLE_HEARTBEAT,
            PermissionFlag::OracleQueueUsage => PERMIT_ORACLE_QUEUE_USAGE,
        }
    }
}

impl fmt::Display for PermissionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionFlag::OracleHeartbeat => write!(f, "oracle-heartbeat"),
            PermissionFlag::OracleQueueUsage => write!(f, "oracle-queue-usage"),
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct Permission {
    pub account_type: AccountType,
    pub granter: Pubkey,
    pub grantee: Pubkey,
    pub authority: Pubkey,
    pub permissions: u32,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "granter: {}, grantee: {}, authority: {}, permissions: {:#b}",
            self.granter, self.grantee, self.authority, self.permissions
        )
    }
}
