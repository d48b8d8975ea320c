use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{JobInitArgs, OracleInstruction};
use crate::pda::get_job_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateJobCommand {
    pub queue: Pubkey,
    pub index: u32,
    pub name: String,
    pub data: Vec<u8>,
}

impl CreateJobCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (job_pubkey, _) = get_job_pda(&client.get_program_id(), &self.queue, self.index);

        let signature = client.execute_transaction(
            OracleInstruction::InitJob(JobInitArgs {
                name: self.name.clone(),
                data: self.data.clone(),
            }),
            vec![
                AccountMeta::new(job_pubkey, false),
                AccountMeta::new_readonly(self.queue, false),
            ],
        )?;

        Ok((job_pubkey, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_job_create_command() {
        let mut client = create_test_client();

        let queue = Pubkey::new_unique();
        let (job_pubkey, _) = get_job_pda(&client.get_program_id(), &queue, 0);

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::InitJob(JobInitArgs {
                    name: "btc-usd".to_string(),
                    data: vec![1, 2, 3],
                })),
                predicate::eq(vec![
                    AccountMeta::new(job_pubkey, false),
                    AccountMeta::new_readonly(queue, false),
                ]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = CreateJobCommand {
            queue,
            index: 0,
            name: "btc-usd".to_string(),
            data: vec![1, 2, 3],
        }
        .execute(&client);

        assert!(res.is_ok());
        assert_eq!(res.unwrap().0, job_pubkey);
    }
}
