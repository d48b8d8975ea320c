use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct Job {
    pub account_type: AccountType,
    pub name: String,
    pub authority: Pubkey,
    pub data: Vec<u8>,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, authority: {}, data: {} bytes",
            self.name,
            self.authority,
            self.data.len()
        )
    }
}
