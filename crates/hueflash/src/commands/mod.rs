//! Command dispatch: bridges CLI args -> hub flows -> output formatting.

pub mod alert;
pub mod config_cmd;
pub mod connect;
pub mod forget;
pub mod lights;
pub mod watch;
pub mod watchlist;

use std::path::PathBuf;

use hueflash_config::Config;
use hueflash_core::{AlertMode, Hub};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command that needs the loaded config.
pub async fn dispatch(cmd: Command, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Connect(args) => connect::handle(&build_hub(config)?, args, global).await,
        Command::Test => alert::handle(&build_hub(config)?, AlertMode::Sustained, global).await,
        Command::Pulse => alert::handle(&build_hub(config)?, AlertMode::Pulse, global).await,
        Command::Lights => lights::handle(&build_hub(config)?, global).await,
        Command::Watch(args) => {
            watch::handle(&build_hub(config)?, &config.helper, args, global).await
        }
        Command::Watchlist(args) => watchlist::handle(args, config, global),
        Command::Forget => forget::handle(config, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

fn build_hub(config: &Config) -> Result<Hub, CliError> {
    Ok(Hub::new(config.to_hub_config()?)?)
}

/// The config file in use: `--config` or the platform default.
pub fn config_file(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(hueflash_config::config_path)
}
