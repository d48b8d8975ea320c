pub mod utils {
    use solana_sdk::pubkey::Pubkey;

    use crate::MockOracleClient;

    pub fn create_test_client() -> MockOracleClient {
        let mut client = MockOracleClient::new();

        // Payer
        let payer = Pubkey::new_unique();
        client.expect_get_payer().returning(move || payer);
        // Program ID
        let program_id = Pubkey::new_unique();
        client.expect_get_program_id().returning(move || program_id);

        client
    }
}
