use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;

use crate::state::accounttype::AccountType;
use crate::state::buffer::BufferRelayerState;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct ListBuffersCommand;

impl ListBuffersCommand {
    pub fn execute(
        &self,
        client: &dyn OracleClient,
    ) -> eyre::Result<HashMap<Pubkey, BufferRelayerState>> {
        let accounts = client.gets(AccountType::BufferRelayer)?;

        Ok(accounts
            .into_iter()
            .filter_map(|(pubkey, data)| Some((pubkey, data.get_buffer().ok()?)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::accountdata::AccountData;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_buffer_list_command() {
        let mut client = create_test_client();

        let pubkey = Pubkey::new_unique();
        let buffer = BufferRelayerState {
            account_type: AccountType::BufferRelayer,
            name: "btc-usd".to_string(),
            ..Default::default()
        };

        let buffer2 = buffer.clone();
        client
            .expect_gets()
            .with(predicate::eq(AccountType::BufferRelayer))
            .returning(move |_| {
                Ok(HashMap::from([(
                    pubkey,
                    AccountData::BufferRelayer(buffer2.clone()),
                )]))
            });

        let res = ListBuffersCommand.execute(&client).unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[&pubkey], buffer);
    }
}
