use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct OracleState {
    pub account_type: AccountType,
    pub name: String,
    pub authority: Pubkey,
    pub queue: Pubkey,
}

impl fmt::Display for OracleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, authority: {}, queue: {}",
            self.name, self.authority, self.queue
        )
    }
}
