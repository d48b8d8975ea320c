use std::path::PathBuf;

use clap::Args;
use console::style;

use bufferpool_sdk::commands::buffer::create::CreateBufferRelayerCommand;
use bufferpool_sdk::commands::job::create::CreateJobCommand;
use bufferpool_sdk::commands::permission::{
    create::CreatePermissionCommand, set::SetPermissionCommand,
};
use bufferpool_sdk::{JobDefinition, PermissionFlag, PoolConfig};

use crate::Globals;

#[derive(Args, Debug)]
pub struct AddCliCommand {
    /// Path to the job definition file
    pub job_definition: PathBuf,
    /// Minimum seconds between open round calls
    #[arg(default_value_t = 30)]
    pub update_interval: u32,
}

impl AddCliCommand {
    pub fn execute(self, globals: &Globals) -> eyre::Result<()> {
        let client = globals.client()?;
        let mut config = PoolConfig::load(&globals.config)?;
        let queue = config.queue_pubkey()?;

        let job_def = JobDefinition::load(&self.job_definition)?;
        let name = job_def.name.clone().unwrap_or_default();
        let index = config.buffers.len() as u32;

        let (job, _) = CreateJobCommand {
            queue,
            index,
            name: name.clone(),
            data: job_def.to_bytes()?,
        }
        .execute(&client)?;
        println!("{} Created Job {job}", style("✔").green());

        let (buffer, _) = CreateBufferRelayerCommand {
            queue,
            job,
            index,
            name,
            min_update_delay_seconds: self.update_interval,
        }
        .execute(&client)?;
        println!("{} Created Buffer {buffer}", style("✔").green());

        let (permission, _) = CreatePermissionCommand {
            granter: queue,
            grantee: buffer,
        }
        .execute(&client)?;
        SetPermissionCommand {
            permission,
            flag: PermissionFlag::OracleQueueUsage,
            enable: true,
        }
        .execute(&client)?;
        println!("{} Created Permission {permission}", style("✔").green());

        config.buffers.push(buffer.to_string());
        config.save(&globals.config)?;

        Ok(())
    }
}
