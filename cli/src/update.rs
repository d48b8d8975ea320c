use clap::Args;
use console::style;
use eyre::OptionExt;

use bufferpool_sdk::commands::buffer::{get::GetBufferCommand, openround::OpenRoundCommand};
use bufferpool_sdk::{parse_pubkey, OracleClient};

use crate::Globals;

#[derive(Args, Debug)]
pub struct UpdateCliCommand {
    /// Public key of the buffer relayer account
    pub buffer: String,
}

impl UpdateCliCommand {
    pub fn execute(self, globals: &Globals) -> eyre::Result<()> {
        let client = globals.client()?;
        let pubkey = parse_pubkey(&self.buffer).ok_or_eyre("Invalid buffer pubkey")?;

        let buffer = GetBufferCommand { pubkey }.execute(&client)?;
        let clock = client.get_clock()?;

        let round_open = buffer.current_round.round_open_timestamp;
        println!("Current Solana Time: {}", clock.unix_timestamp);
        println!(
            "Next Available Update Time: {}",
            round_open + buffer.min_update_delay_seconds as i64
        );
        println!("Time Delta: {}", round_open - clock.unix_timestamp);

        let signature = OpenRoundCommand {
            buffer: pubkey,
            queue: buffer.queue,
        }
        .execute(&client)?;
        println!("{} Open Round Signature {signature}", style("✔").green());

        Ok(())
    }
}
