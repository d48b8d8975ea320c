use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use std::{fs, thread};

use eyre::eyre;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

pub fn read_keypair_from_file(path: &Path) -> eyre::Result<Keypair> {
    let file_content = fs::read_to_string(path)?;
    let secret_key_bytes: Vec<u8> = serde_json::from_str(&file_content)?;
    let keypair = Keypair::from_bytes(&secret_key_bytes).map_err(|e| eyre!(e))?;

    Ok(keypair)
}

pub fn write_keypair_to_file(keypair: &Keypair, path: &Path) -> eyre::Result<()> {
    let bytes: Vec<u8> = keypair.to_bytes().to_vec();
    fs::write(path, serde_json::to_string(&bytes)?)?;
    Ok(())
}

/// Loads the payer keypair, generating and funding a fresh one when the file
/// does not exist yet.
pub fn find_or_create_keypair(rpc_url: &str, path: &Path) -> eyre::Result<Keypair> {
    if path.exists() {
        return read_keypair_from_file(path);
    }

    let keypair = Keypair::new();
    write_keypair_to_file(&keypair, path)?;

    let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());
    let signature = client
        .request_airdrop(&keypair.pubkey(), 2 * LAMPORTS_PER_SOL)
        .map_err(|e| eyre!(e))?;
    while !client.confirm_transaction(&signature).map_err(|e| eyre!(e))? {
        thread::sleep(Duration::from_millis(500));
    }

    Ok(keypair)
}

pub fn parse_pubkey(input: &str) -> Option<Pubkey> {
    if input.len() < 40 || input.len() > 44 {
        return None;
    }

    Pubkey::from_str(input).ok()
}

pub fn convert_url_to_ws(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{url}")
    }
}
