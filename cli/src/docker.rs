use std::path::Path;

use solana_sdk::pubkey::Pubkey;

/// Compose file for running a Switchboard oracle node against the pool.
pub fn render_oracle_compose(rpc_url: &str, oracle: &Pubkey, keypair: &Path) -> String {
    format!(
        r#"version: "3.3"
services:
  oracle:
    image: "switchboardlabs/node:dev-v2-09-19-22"
    network_mode: host
    secrets:
      - PAYER_SECRETS
    environment:
      # Logging
      - VERBOSE=1
      - DEBUG=1
      # Oracle
      - CHAIN=solana
      # Solana
      - CLUSTER=devnet
      - RPC_URL=${{RPC_URL:-{rpc_url}}}
      - ORACLE_KEY={oracle}
      # Task runner, needs a mainnet RPC
      - TASK_RUNNER_SOLANA_RPC=${{TASK_RUNNER_SOLANA_RPC:-https://api.mainnet-beta.solana.com}}
secrets:
  PAYER_SECRETS:
    file: {keypair}
"#,
        keypair = keypair.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_docker_compose_carries_oracle_and_keypair() {
        let oracle = Pubkey::new_unique();
        let rendered = render_oracle_compose(
            "https://api.devnet.solana.com",
            &oracle,
            &PathBuf::from("buffer-pool-keypair.json"),
        );

        assert!(rendered.contains(&format!("ORACLE_KEY={oracle}")));
        assert!(rendered.contains("file: buffer-pool-keypair.json"));
        assert!(rendered.contains("RPC_URL=${RPC_URL:-https://api.devnet.solana.com}"));
    }
}
