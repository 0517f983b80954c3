//! Watch-list command handlers.

use serde::Serialize;
use tabled::Tabled;

use hueflash_config::Config;
use hueflash_core::{WatchListStore, WatchedLight};

use crate::cli::{GlobalOpts, WatchlistArgs, WatchlistCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled, Serialize)]
struct WatchRow {
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&WatchedLight> for WatchRow {
    fn from(w: &WatchedLight) -> Self {
        Self {
            name: w.name.clone(),
        }
    }
}

/// Names are matched exactly against the bridge, so surrounding
/// whitespace is kept; only an all-blank name is rejected.
fn validate_name(name: &str) -> Result<&str, CliError> {
    if name.trim().is_empty() {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "light name cannot be empty".into(),
        });
    }
    Ok(name)
}

pub fn handle(args: WatchlistArgs, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let store = WatchListStore::new(config.watch_list_path());

    match args.command {
        WatchlistCommand::List => {
            let lights = store.load()?;
            let out = output::render_list(
                &global.output,
                &lights,
                |w| WatchRow::from(w),
                |w| w.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WatchlistCommand::Add { name } => {
            let name = validate_name(&name)?;
            if store.add(name)? {
                output::success(global, &format!("Watching '{name}'"));
            } else {
                output::notice(global, &format!("'{name}' is already on the watch-list"));
            }
            Ok(())
        }

        WatchlistCommand::Remove { name } => {
            let name = validate_name(&name)?;
            if store.remove(name)? {
                output::success(global, &format!("No longer watching '{name}'"));
                Ok(())
            } else {
                Err(CliError::NotWatched { name: name.into() })
            }
        }
    }
}
