use crate::error::OracleProgramError;
use borsh::{BorshDeserialize, BorshSerialize};
use std::fmt;

/// Decoded view of the well-known clock sysvar account. The `unix_timestamp`
/// field is the authoritative chain time the scheduler keys off.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Default)]
pub struct SolanaClock {
    pub slot: u64,
    pub epoch_start_timestamp: i64,
    pub epoch: u64,
    pub leader_schedule_epoch: u64,
    pub unix_timestamp: i64,
}

impl TryFrom<&[u8]> for SolanaClock {
    type Error = OracleProgramError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        borsh::from_slice(data).map_err(|_| OracleProgramError::MalformedAccountData)
    }
}

impl fmt::Display for SolanaClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot: {}, epoch: {}, unix_timestamp: {}",
            self.slot, self.epoch, self.unix_timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clock_layout() {
        // The sysvar serializes as five fixed-width little-endian words.
        let val = SolanaClock {
            slot: 7,
            epoch_start_timestamp: 1_600_000_000,
            epoch: 3,
            leader_schedule_epoch: 4,
            unix_timestamp: 1_600_000_123,
        };

        let data = borsh::to_vec(&val).unwrap();
        assert_eq!(data.len(), 40);
        assert_eq!(SolanaClock::try_from(&data[..]).unwrap(), val);
    }
}
