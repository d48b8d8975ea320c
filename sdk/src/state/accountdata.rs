use crate::error::OracleProgramError;
use crate::state::{
    accounttype::AccountType, buffer::BufferRelayerState, crankstate::CrankState, job::Job,
    oracle::OracleState, permission::Permission, queue::OracleQueue,
};

/// Any account owned by the oracle program, keyed by the account-type byte
/// every account carries as its first field.
#[derive(Debug, PartialEq, Clone, Default)]
pub enum AccountData {
    #[default]
    None,
    Queue(OracleQueue),
    Crank(CrankState),
    Oracle(OracleState),
    Permission(Permission),
    Job(Job),
    BufferRelayer(BufferRelayerState),
}

impl AccountData {
    pub fn get_name(&self) -> &str {
        match self {
            AccountData::None => "None",
            AccountData::Queue(_) => "Queue",
            AccountData::Crank(_) => "Crank",
            AccountData::Oracle(_) => "Oracle",
            AccountData::Permission(_) => "Permission",
            AccountData::Job(_) => "Job",
            AccountData::BufferRelayer(_) => "BufferRelayer",
        }
    }

    pub fn get_queue(&self) -> Result<OracleQueue, OracleProgramError> {
        if let AccountData::Queue(queue) = self {
            Ok(queue.clone())
        } else {
            Err(OracleProgramError::InvalidAccountType)
        }
    }

    pub fn get_buffer(&self) -> Result<BufferRelayerState, OracleProgramError> {
        if let AccountData::BufferRelayer(buffer) = self {
            Ok(buffer.clone())
        } else {
            Err(OracleProgramError::InvalidAccountType)
        }
    }

    pub fn get_permission(&self) -> Result<Permission, OracleProgramError> {
        if let AccountData::Permission(permission) = self {
            Ok(permission.clone())
        } else {
            Err(OracleProgramError::InvalidAccountType)
        }
    }
}

impl TryFrom<&[u8]> for AccountData {
    type Error = OracleProgramError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let tag = *data.first().ok_or(OracleProgramError::MalformedAccountData)?;
        let malformed = |_| OracleProgramError::MalformedAccountData;

        match AccountType::from(tag) {
            AccountType::None => Ok(AccountData::None),
            AccountType::Queue => Ok(AccountData::Queue(
                borsh::from_slice(data).map_err(malformed)?,
            )),
            AccountType::Crank => Ok(AccountData::Crank(
                borsh::from_slice(data).map_err(malformed)?,
            )),
            AccountType::Oracle => Ok(AccountData::Oracle(
                borsh::from_slice(data).map_err(malformed)?,
            )),
            AccountType::Permission => Ok(AccountData::Permission(
                borsh::from_slice(data).map_err(malformed)?,
            )),
            AccountType::Job => Ok(AccountData::Job(
                borsh::from_slice(data).map_err(malformed)?,
            )),
            AccountType::BufferRelayer => Ok(AccountData::BufferRelayer(
                borsh::from_slice(data).map_err(malformed)?,
            )),
        }
    }
}
