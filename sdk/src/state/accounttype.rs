use borsh::{BorshDeserialize, BorshSerialize};
use std::fmt;

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[borsh(use_discriminant = true)]
pub enum AccountType {
    #[default]
    None = 0,
    Queue = 1,
    Crank = 2,
    Oracle = 3,
    Permission = 4,
    Job = 5,
    BufferRelayer = 6,
}

impl From<u8> for AccountType {
    fn from(value: u8) -> Self {
        match value {
            1 => AccountType::Queue,
            2 => AccountType::Crank,
            3 => AccountType::Oracle,
            4 => AccountType::Permission,
            5 => AccountType::Job,
            6 => AccountType::BufferRelayer,
            _ => AccountType::None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::None => write!(f, "none"),
            AccountType::Queue => write!(f, "queue"),
            AccountType::Crank => write!(f, "crank"),
            AccountType::Oracle => write!(f, "oracle"),
            AccountType::Permission => write!(f, "permission"),
            AccountType::Job => write!(f, "job"),
            AccountType::BufferRelayer => write!(f, "bufferrelayer"),
        }
    }
}
