use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum OracleProgramError {
    #[error("Invalid Account Type")]
    InvalidAccountType,
    #[error("Malformed account data")]
    MalformedAccountData,
    #[error("Account not found")]
    AccountNotFound,
}
