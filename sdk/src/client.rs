use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::{eyre, OptionExt};
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, MemcmpEncodedBytes, RpcFilterType},
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_program, sysvar,
    transaction::Transaction,
};

use crate::instructions::OracleInstruction;
use crate::oracleclient::OracleClient;
use crate::state::{accountdata::AccountData, accounttype::AccountType, clock::SolanaClock};
use crate::utils::{convert_url_to_ws, read_keypair_from_file};
use crate::{DEFAULT_PROGRAM_ID, DEFAULT_RPC_URL};

pub struct SbClient {
    rpc_url: String,
    rpc_ws_url: String,
    client: RpcClient,
    payer: Option<Keypair>,
    program_id: Pubkey,
}

impl SbClient {
    pub fn new(
        rpc_url: Option<String>,
        websocket_url: Option<String>,
        program_id: Option<String>,
        keypair: Option<PathBuf>,
    ) -> eyre::Result<SbClient> {
        let rpc_url = rpc_url.unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let rpc_ws_url = websocket_url.unwrap_or_else(|| convert_url_to_ws(&rpc_url));

        let client = RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());

        let payer = match keypair {
            Some(path) => Some(read_keypair_from_file(&path)?),
            None => None,
        };

        let program_id = Pubkey::from_str(program_id.as_deref().unwrap_or(DEFAULT_PROGRAM_ID))
            .map_err(|_| eyre!("Invalid program ID"))?;

        Ok(SbClient {
            rpc_url,
            rpc_ws_url,
            client,
            payer,
            program_id,
        })
    }

    pub fn get_rpc(&self) -> &String {
        &self.rpc_url
    }

    pub fn get_ws(&self) -> &String {
        &self.rpc_ws_url
    }
}

impl OracleClient for SbClient {
    fn get_program_id(&self) -> Pubkey {
        self.program_id
    }

    fn get_payer(&self) -> Pubkey {
        match self.payer.as_ref() {
            Some(keypair) => keypair.pubkey(),
            None => Pubkey::default(),
        }
    }

    fn get_balance(&self) -> eyre::Result<u64> {
        let payer = self.payer.as_ref().ok_or_eyre("No signer configured")?;
        self.client
            .get_balance(&payer.pubkey())
            .map_err(|e| eyre!(e))
    }

    fn get(&self, pubkey: Pubkey) -> eyre::Result<AccountData> {
        match self.client.get_account(&pubkey) {
            Ok(account) => {
                if account.owner == self.program_id {
                    Ok(AccountData::try_from(&account.data[..])?)
                } else {
                    Ok(AccountData::None)
                }
            }
            Err(e) => Err(eyre!(e)),
        }
    }

    fn gets(&self, account_type: AccountType) -> eyre::Result<HashMap<Pubkey, AccountData>> {
        let filters = vec![RpcFilterType::Memcmp(Memcmp::new(
            0,
            MemcmpEncodedBytes::Bytes(vec![account_type as u8]),
        ))];
        let config = RpcProgramAccountsConfig {
            filters: Some(filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                data_slice: None,
                commitment: None,
                min_context_slot: None,
            },
            with_context: None,
            sort_results: None,
        };

        let mut list: HashMap<Pubkey, AccountData> = HashMap::new();
        let accounts = self
            .client
            .get_program_accounts_with_config(&self.program_id, config)?;

        for (pubkey, account) in accounts {
            list.insert(pubkey, AccountData::try_from(&account.data[..])?);
        }

        Ok(list)
    }

    fn get_clock(&self) -> eyre::Result<SolanaClock> {
        let account = self
            .client
            .get_account(&sysvar::clock::id())
            .map_err(|e| eyre!(e))?;
        Ok(SolanaClock::try_from(&account.data[..])?)
    }

    fn execute_transaction(
        &self,
        instruction: OracleInstruction,
        accounts: Vec<AccountMeta>,
    ) -> eyre::Result<Signature> {
        let payer = self
            .payer
            .as_ref()
            .ok_or_eyre("No default signer found, run \"buffer-pool setup\" to create one")?;
        let data = borsh::to_vec(&instruction)?;

        let mut transaction = Transaction::new_with_payer(
            &[Instruction::new_with_bytes(
                self.program_id,
                &data,
                [
                    accounts,
                    vec![
                        AccountMeta::new(payer.pubkey(), true),
                        AccountMeta::new_readonly(system_program::id(), false),
                    ],
                ]
                .concat(),
            )],
            Some(&payer.pubkey()),
        );

        let blockhash = self.client.get_latest_blockhash().map_err(|e| eyre!(e))?;
        transaction.sign(&[payer], blockhash);

        let result = self
            .client
            .simulate_transaction(&transaction)
            .map_err(|e| eyre!(e))?;
        if result.value.err.is_some() {
            for line in result.value.logs.unwrap_or_default() {
                log::error!("program log: {line}");
            }
            return Err(eyre!("Error in transaction"));
        }

        self.client
            .send_and_confirm_transaction(&transaction)
            .map_err(|e| eyre!(e))
    }
}
