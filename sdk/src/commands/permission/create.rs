use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{OracleInstruction, PermissionInitArgs};
use crate::pda::get_permission_pda;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreatePermissionCommand {
    pub granter: Pubkey,
    pub grantee: Pubkey,
}

impl CreatePermissionCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<(Pubkey, Signature)> {
        let (permission_pubkey, _) =
            get_permission_pda(&client.get_program_id(), &self.granter, &self.grantee);

        let signature = client.execute_transaction(
            OracleInstruction::InitPermission(PermissionInitArgs {
                granter: self.granter,
                grantee: self.grantee,
            }),
            vec![
                AccountMeta::new(permission_pubkey, false),
                AccountMeta::new_readonly(self.granter, false),
                AccountMeta::new_readonly(self.grantee, false),
            ],
        )?;

        Ok((permission_pubkey, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_permission_create_command() {
        let mut client = create_test_client();

        let granter = Pubkey::new_unique();
        let grantee = Pubkey::new_unique();
        let (permission_pubkey, _) =
            get_permission_pda(&client.get_program_id(), &granter, &grantee);

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::InitPermission(PermissionInitArgs {
                    granter,
                    grantee,
                })),
                predicate::eq(vec![
                    AccountMeta::new(permission_pubkey, false),
                    AccountMeta::new_readonly(granter, false),
                    AccountMeta::new_readonly(grantee, false),
                ]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = CreatePermissionCommand { granter, grantee }.execute(&client);

        assert!(res.is_ok());
        assert_eq!(res.unwrap().0, permission_pubkey);
    }
}
