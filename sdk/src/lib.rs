pub mod commands;
pub mod instructions;
pub mod pda;
pub mod seeds;
pub mod state;

mod client;
mod error;
mod jobdef;
mod oracleclient;
mod poolconfig;
mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::client::SbClient;
pub use crate::error::OracleProgramError;
pub use crate::jobdef::JobDefinition;
pub use crate::oracleclient::{MockOracleClient, OracleClient};
pub use crate::poolconfig::{PoolConfig, DEFAULT_POOL_CONFIG_FILE};
pub use crate::state::{
    accountdata::AccountData,
    accounttype::AccountType,
    buffer::{BufferRelayerState, BufferRound},
    clock::SolanaClock,
    crankstate::CrankState,
    job::Job,
    oracle::OracleState,
    permission::{Permission, PermissionFlag},
    queue::OracleQueue,
};
pub use crate::utils::{
    convert_url_to_ws, find_or_create_keypair, parse_pubkey, read_keypair_from_file,
    write_keypair_to_file,
};

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_PROGRAM_ID: &str = "2TfB33aLaneQb5TNVwyDz3jSZXS6jdW2ARw1Dgf84XCG";
