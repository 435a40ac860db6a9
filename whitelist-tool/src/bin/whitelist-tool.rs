// Off-chain driver for Merkle whitelists.
// 4 sub-commands
// - root: root to publish via the whitelist contract's setter
// - proof: proof a member submits with its claim/mint transaction
// - verify: pre-check a proof before spending gas on it
// - dump: root plus every member's proof, for hosting next to a frontend
use clap::Parser;
use log::error;
use std::process::ExitCode;
use whitelist_tool::common::{cli, commands, utils};

fn main() -> ExitCode {
    utils::init_logging("info");
    let args = cli::WhitelistCli::parse();
    match commands::run(&args) {
        Ok(output) => {
            println!("{}", output.text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
