use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{OracleInitArgs, OracleInstruction};
use crate::pda::get_oracle_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateOracleCommand {
    pub queue: Pubkey,
    pub name: String,
}

impl CreateOracleCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (oracle_pubkey, _) = get_oracle_pda(&client.get_program_id(), &self.queue);

        let signature = client.execute_transaction(
            OracleInstruction::InitOracle(OracleInitArgs {
                name: self.name.clone(),
            }),
            vec![
                AccountMeta::new(oracle_pubkey, false),
                AccountMeta::new_readonly(self.queue, false),
            ],
        )?;

        Ok((oracle_pubkey, signature))
    }
}
