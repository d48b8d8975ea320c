use std::collections::HashMap;

use mockall::automock;
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::OracleInstruction;
use crate::state::{accountdata::AccountData, accounttype::AccountType, clock::SolanaClock};

#[automock]
pub trait OracleClient {
    fn get_program_id(&self) -> Pubkey;
    fn get_payer(&self) -> Pubkey;
    fn get_balance(&self) -> eyre::Result<u64>;

    fn get(&self, pubkey: Pubkey) -> eyre::Result<AccountData>;
    fn gets(&self, account_type: AccountType) -> eyre::Result<HashMap<Pubkey, AccountData>>;
    fn get_clock(&self) -> eyre::Result<SolanaClock>;

    fn execute_transaction(
        &self,
        instruction: OracleInstruction,
        accounts: Vec<AccountMeta>,
    ) -> eyre::Result<Signature>;
}
