use solana_sdk::pubkey::Pubkey;

use crate::state::buffer::BufferRelayerState;
use crate::OracleClient;

#[derive(Debug, PartialEq, Clone)]
pub struct GetBufferCommand {
    pub pubkey: Pubkey,
}

impl GetBufferCommand {
    pub fn execute(&self, client: &dyn OracleClient) -> eyre::Result<BufferRelayerState> {
        Ok(client.get(self.pubkey)?.get_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::accountdata::AccountData;
    use crate::state::accounttype::AccountType;
    use crate::tests::utils::create_test_client;
    use mockall::predicate;

    #[test]
    fn test_commands_buffer_get_command() {
        let mut client = create_test_client();

        let pubkey = Pubkey::new_unique();
        let buffer = BufferRelayerState {
            account_type: AccountType::BufferRelayer,
            name: "btc-usd".to_string(),
            min_update_delay_seconds: 30,
            ..Default::default()
        };

        let buffer2 = buffer.clone();
        client
            .expect_get()
            .with(predicate::eq(pubkey))
            .returning(move |_| Ok(AccountData::BufferRelayer(buffer2.clone())));

        let res = GetBufferCommand { pubkey }.execute(&client);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), buffer);
    }

    #[test]
    fn test_commands_buffer_get_command_wrong_type() {
        let mut client = create_test_client();
        client.expect_get().returning(|_| Ok(AccountData::None));

        assert!(GetBufferCommand {
            pubkey: Pubkey::new_unique()
        }
        .execute(&client)
        .is_err());
    }
}
