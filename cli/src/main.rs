use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bufferpool_sdk::{SbClient, DEFAULT_POOL_CONFIG_FILE, DEFAULT_RPC_URL};

mod add;
mod docker;
mod setup;
mod update;
mod watch;

use add::AddCliCommand;
use setup::SetupCliCommand;
use update::UpdateCliCommand;
use watch::WatchCliCommand;

#[derive(Parser)]
#[command(
    name = "buffer-pool",
    version,
    about = "Provision and crank a pool of buffer relayer accounts"
)]
struct App {
    /// RPC endpoint
    #[arg(short = 'u', long, global = true)]
    url: Option<String>,
    /// Websocket endpoint, derived from the RPC endpoint when omitted
    #[arg(long, global = true)]
    ws: Option<String>,
    /// Oracle program id
    #[arg(long, global = true)]
    program_id: Option<String>,
    /// Payer keypair file
    #[arg(
        short = 'k',
        long,
        global = true,
        default_value = "buffer-pool-keypair.json"
    )]
    keypair: PathBuf,
    /// Pool config file
    #[arg(short = 'c', long, global = true, default_value = DEFAULT_POOL_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the queue, crank, oracle and oracle permission
    Setup(SetupCliCommand),
    /// Add a buffer relayer backed by a job definition file
    Add(AddCliCommand),
    /// Request one update round for a buffer relayer
    Update(UpdateCliCommand),
    /// Run the crank scheduler over every configured buffer
    Watch(WatchCliCommand),
}

pub struct Globals {
    pub url: Option<String>,
    pub ws: Option<String>,
    pub program_id: Option<String>,
    pub keypair: PathBuf,
    pub config: PathBuf,
}

impl Globals {
    pub fn rpc_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string())
    }

    pub fn client(&self) -> eyre::Result<SbClient> {
        SbClient::new(
            self.url.clone(),
            self.ws.clone(),
            self.program_id.clone(),
            Some(self.keypair.clone()),
        )
    }
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let app = App::parse();
    let globals = Globals {
        url: app.url,
        ws: app.ws,
        program_id: app.program_id,
        keypair: app.keypair,
        config: app.config,
    };

    match app.command {
        Commands::Setup(cmd) => cmd.execute(&globals),
        Commands::Add(cmd) => cmd.execute(&globals),
        Commands::Update(cmd) => cmd.execute(&globals),
        Commands::Watch(cmd) => cmd.execute(&globals),
    }
}
