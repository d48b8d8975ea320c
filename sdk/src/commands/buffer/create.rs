use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{BufferRelayerInitArgs, OracleInstruction};
use crate::pda::get_buffer_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateBufferRelayerCommand {
    pub queue: Pubkey,
    pub job: Pubkey,
    pub index: u32,
    pub name: String,
    pub min_update_delay_seconds: u32,
}

impl CreateBufferRelayerCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (buffer_pubkey, _) = get_buffer_pda(&client.get_program_id(), &self.queue, self.index);

        let signature = client.execute_transaction(
            OracleInstruction::InitBufferRelayer(BufferRelayerInitArgs {
                name: self.name.clone(),
                min_update_delay_seconds: self.min_update_delay_seconds,
            }),
            vec![
                AccountMeta::new(buffer_pubkey, false),
                AccountMeta::new_readonly(self.queue, false),
                AccountMeta::new_readonly(self.job, false),
            ],
        )?;

        Ok((buffer_pubkey, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_buffer_create_command() {
        let mut client = create_test_client();

        let queue = Pubkey::new_unique();
        let job = Pubkey::new_unique();
        let (buffer_pubkey, _) = get_buffer_pda(&client.get_program_id(), &queue, 3);

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::InitBufferRelayer(
                    BufferRelayerInitArgs {
                        name: "btc-usd".to_string(),
                        min_update_delay_seconds: 30,
                    },
                )),
                predicate::eq(vec![
                    AccountMeta::new(buffer_pubkey, false),
                    AccountMeta::new_readonly(queue, false),
                    AccountMeta::new_readonly(job, false),
                ]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = CreateBufferRelayerCommand {
            queue,
            job,
            index: 3,
            name: "btc-usd".to_string(),
            min_update_delay_seconds: 30,
        }
        .execute(&client);

        assert!(res.is_ok());
        assert_eq!(res.unwrap().0, buffer_pubkey);
    }
}
