use std::fs;

use clap::Args;
use console::style;
use solana_sdk::signature::Signer;

use bufferpool_sdk::commands::crank::create::CreateCrankCommand;
use bufferpool_sdk::commands::oracle::create::CreateOracleCommand;
use bufferpool_sdk::commands::permission::{
    create::CreatePermissionCommand, set::SetPermissionCommand,
};
use bufferpool_sdk::commands::queue::create::CreateQueueCommand;
use bufferpool_sdk::{find_or_create_keypair, OracleClient, PermissionFlag, PoolConfig};

use crate::docker::render_oracle_compose;
use crate::Globals;

#[derive(Args, Debug)]
pub struct SetupCliCommand {
    /// Per-round oracle reward in lamports
    #[arg(long, default_value_t = 0)]
    pub reward: u64,
    /// Minimum oracle stake in lamports
    #[arg(long, default_value_t = 0)]
    pub min_stake: u64,
    /// Skip writing docker-compose.oracle.yml
    #[arg(long)]
    pub no_docker: bool,
}

impl SetupCliCommand {
    pub fn execute(self, globals: &Globals) -> eyre::Result<()> {
        let payer = find_or_create_keypair(&globals.rpc_url(), &globals.keypair)?;
        log::info!("payer: {}", payer.pubkey());

        let client = globals.client()?;
        log::info!("payer balance: {} lamports", client.get_balance()?);

        let mut config = PoolConfig::load(&globals.config)?;

        let (queue, _) = CreateQueueCommand {
            name: "buffer pool queue".to_string(),
            reward: self.reward,
            min_stake: self.min_stake,
            unpermissioned_feeds: true,
            enable_buffer_relayers: true,
        }
        .execute(&client)?;
        println!("{} Created Oracle Queue {queue}", style("✔").green());

        let (crank, _) = CreateCrankCommand {
            queue,
            name: "buffer pool crank".to_string(),
            max_rows: 100,
        }
        .execute(&client)?;
        println!("{} Created Crank {crank}", style("✔").green());

        let (oracle, _) = CreateOracleCommand {
            queue,
            name: "buffer pool oracle".to_string(),
        }
        .execute(&client)?;
        println!("{} Created Oracle {oracle}", style("✔").green());

        let (permission, _) = CreatePermissionCommand {
            granter: queue,
            grantee: oracle,
        }
        .execute(&client)?;
        SetPermissionCommand {
            permission,
            flag: PermissionFlag::OracleHeartbeat,
            enable: true,
        }
        .execute(&client)?;
        println!(
            "{} Created Oracle Permissions {permission}",
            style("✔").green()
        );

        if !self.no_docker {
            fs::write(
                "docker-compose.oracle.yml",
                render_oracle_compose(&globals.rpc_url(), &oracle, &globals.keypair),
            )?;
            println!("{} Wrote docker-compose.oracle.yml", style("✔").green());
        }

        config.queue = Some(queue.to_string());
        config.crank = Some(crank.to_string());
        config.oracle = Some(oracle.to_string());
        config.oracle_permission = Some(permission.to_string());
        config.save(&globals.config)?;

        Ok(())
    }
}
