use crate::error::OracleProgramError;
use crate::state::accounttype::AccountType;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;
use std::fmt;

/// One request/accept cycle of a buffer relayer, stamped with its open time.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct BufferRound {
    pub round_open_timestamp: i64,
    pub round_open_slot: u64,
    pub oracle: Pubkey,
    pub num_success: u32,
    pub num_error: u32,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct BufferRelayerState {
    pub account_type: AccountType,
    pub name: String,
    pub queue: Pubkey,
    pub authority: Pubkey,
    pub job: Pubkey,
    pub min_update_delay_seconds: u32,
    pub current_round: BufferRound,
    pub latest_result: Vec<u8>,
}

impl TryFrom<&[u8]> for BufferRelayerState {
    type Error = OracleProgramError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.first() != Some(&(AccountType::BufferRelayer as u8)) {
            return Err(OracleProgramError::InvalidAccountType);
        }
        borsh::from_slice(data).map_err(|_| OracleProgramError::MalformedAccountData)
    }
}

impl fmt::Display for BufferRelayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, queue: {}, job: {}, min_update_delay_seconds: {}, round_open_timestamp: {}, result: {} bytes",
            self.name,
            self.queue,
            self.job,
            self.min_update_delay_seconds,
            self.current_round.round_open_timestamp,
            self.latest_result.len(),
        )
    }
}
