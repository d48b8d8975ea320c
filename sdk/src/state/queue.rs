use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct OracleQueue {
    pub account_type: AccountType,
    pub name: String,
    pub authority: Pubkey,
    pub reward: u64,
    pub min_stake: u64,
    pub unpermissioned_feeds: bool,
    pub enable_buffer_relayers: bool,
}

impl fmt::Display for OracleQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, authority: {}, reward: {}, min_stake: {}, unpermissioned_feeds: {}, enable_buffer_relayers: {}",
            self.name,
            self.authority,
            self.reward,
            self.min_stake,
            self.unpermissioned_feeds,
            self.enable_buffer_relayers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_queue_serialization() {
        let val = OracleQueue {
            account_type: AccountType::Queue,
            name: "buffer pool queue".to_string(),
            authority: Pubkey::new_unique(),
            reward: 0,
            min_stake: 0,
            unpermissioned_feeds: true,
            enable_buffer_relayers: true,
        };

        let data = borsh::to_vec(&val).unwrap();
        let val2 = borsh::from_slice::<OracleQueue>(&data).unwrap();
        assert_eq!(val, val2);
        assert_eq!(data[0], AccountType::Queue as u8);
    }
}
