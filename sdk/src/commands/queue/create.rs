use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{OracleInstruction, QueueInitArgs};
use crate::pda::get_queue_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateQueueCommand {
    pub name: String,
    pub reward: u64,
    pub min_stake: u64,
    pub unpermissioned_feeds: bool,
    pub enable_buffer_relayers: bool,
}

impl CreateQueueCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (queue_pubkey, _) = get_queue_pda(&client.get_program_id());

        let signature = client.execute_transaction(
            OracleInstruction::InitQueue(QueueInitArgs {
                name: self.name.clone(),
                reward: self.reward,
                min_stake: self.min_stake,
                unpermissioned_feeds: self.unpermissioned_feeds,
                enable_buffer_relayers: self.enable_buffer_relayers,
            }),
            vec![AccountMeta::new(queue_pubkey, false)],
        )?;

        Ok((queue_pubkey, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_queue_create_command() {
        let mut client = create_test_client();

        let (queue_pubkey, _) = get_queue_pda(&client.get_program_id());

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::InitQueue(QueueInitArgs {
                    name: "buffer pool queue".to_string(),
                    reward: 0,
                    min_stake: 0,
                    unpermissioned_feeds: true,
                    enable_buffer_relayers: true,
                })),
                predicate::eq(vec![AccountMeta::new(queue_pubkey, false)]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = CreateQueueCommand {
            name: "buffer pool queue".to_string(),
            reward: 0,
            min_stake: 0,
            unpermissioned_feeds: true,
            enable_buffer_relayers: true,
        }
        .execute(&client);

        assert!(res.is_ok());
        assert_eq!(res.unwrap().0, queue_pubkey);
    }
}
