use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{CrankInitArgs, OracleInstruction};
use crate::pda::get_crank_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateCrankCommand {
    pub queue: Pubkey,
    pub name: String,
    pub max_rows: u32,
}

impl CreateCrankCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (crank_pubkey, _) = get_crank_pda(&client.get_program_id(), &self.queue);

        let signature = client.execute_transaction(
            OracleInstruction::InitCrank(CrankInitArgs {
                name: self.name.clone(),
                max_rows: self.max_rows,
            }),
            vec![
                AccountMeta::new(crank_pubkey, false),
                AccountMeta::new_readonly(self.queue, false),
            ],
        )?;

        Ok((crank_pubkey, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_crank_create_command() {
        let mut client = create_test_client();

        let queue = Pubkey::new_unique();
        let (crank_pubkey, _) = get_crank_pda(&client.get_program_id(), &queue);

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::InitCrank(CrankInitArgs {
                    name: "buffer pool crank".to_string(),
                    max_rows: 100,
                })),
                predicate::eq(vec![
                    AccountMeta::new(crank_pubkey, false),
                    AccountMeta::new_readonly(queue, false),
                ]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = CreateCrankCommand {
            queue,
            name: "buffer pool crank".to_string(),
            max_rows: 100,
        }
        .execute(&client);

        assert!(res.is_ok());
        assert_eq!(res.unwrap().0, crank_pubkey);
    }
}
