use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{OpenRoundArgs, OracleInstruction};
use crate::pda::get_oracle_pda;
use crate::OracleClient;

/// Requests a new update round for a buffer relayer. The oracle assigned to
/// the queue picks the round up off-chain and writes the result back.
#[derive(Debug, PartialEq, Clone)]
pub struct OpenRoundCommand {
    pub buffer: Pubkey,
    pub queue: Pubkey,
}

impl OpenRoundCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<Signature> {
        let (oracle_pubkey, _) = get_oracle_pda(&client.get_program_id(), &self.queue);

        let signature = client.execute_transaction(
            OracleInstruction::OpenRound(OpenRoundArgs {}),
            vec![
                AccountMeta::new(self.buffer, false),
                AccountMeta::new_readonly(self.queue, false),
                AccountMeta::new_readonly(oracle_pubkey, false),
            ],
        )?;

        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_buffer_openround_command() {
        let mut client = create_test_client();

        let buffer = Pubkey::new_unique();
        let queue = Pubkey::new_unique();
        let (oracle_pubkey, _) = get_oracle_pda(&client.get_program_id(), &queue);

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::OpenRound(OpenRoundArgs {})),
                predicate::eq(vec![
                    AccountMeta::new(buffer, false),
                    AccountMeta::new_readonly(queue, false),
                    AccountMeta::new_readonly(oracle_pubkey, false),
                ]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = OpenRoundCommand { buffer, queue }.execute(&client);
        assert!(res.is_ok());
    }
}
