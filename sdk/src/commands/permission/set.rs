use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::instructions::{OracleInstruction, PermissionSetArgs};
use crate::state::permission::PermissionFlag;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct SetPermissionCommand {
    pub permission: Pubkey,
    pub flag: PermissionFlag,
    pub enable: bool,
}

impl SetPermissionCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<Signature> {
        let signature = client.execute_transaction(
            OracleInstruction::SetPermission(PermissionSetArgs {
                permission: self.flag,
                enable: self.enable,
            }),
            vec![AccountMeta::new(self.permission, false)],
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
    fn test_commands_permission_set_command() {
        let mut client = create_test_client();

        let permission = Pubkey::new_unique();

        client
            .expect_execute_transaction()
            .with(
                predicate::eq(OracleInstruction::SetPermission(PermissionSetArgs {
                    permission: PermissionFlag::OracleHeartbeat,
                    enable: true,
                })),
                predicate::eq(vec![AccountMeta::new(permission, false)]),
            )
            .returning(|_, _| Ok(Signature::new_unique()));

        let res = SetPermissionCommand {
            permission,
            flag: PermissionFlag::OracleHeartbeat,
            enable: true,
        }
        .execute(&client);

        assert!(res.is_ok());
    }
}
