use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct CrankState {
    pub account_type: AccountType,
    pub name: String,
    pub queue: Pubkey,
    pub max_rows: u32,
}

impl fmt::Display for CrankState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, queue: {}, max_rows: {}",
            self.name, self.queue, self.max_rows
        )
    }
}
