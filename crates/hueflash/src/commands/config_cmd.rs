//! Config subcommand handlers.

use std::fmt::Write;

use hueflash_config::{self as config, Config, ConfigError};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::config_file;

/// TOML of the effective config, followed by the resolved storage paths.
fn format_effective(cfg: &Config) -> Result<String, CliError> {
    let mut out = toml::to_string_pretty(cfg)?;
    let _ = writeln!(out);
    let _ = writeln!(out, "# credential file: {}", cfg.credential_path().display());
    let _ = writeln!(out, "# watch-list file: {}", cfg.watch_list_path().display());
    Ok(out)
}

pub fn handle(
    args: ConfigArgs,
    loaded: Result<Config, ConfigError>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let path = config_file(global);

    match args.command {
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = loaded?;
            let text = format_effective(&cfg)?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| text.clone(),
                |c| c.credential_path().display().to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            config::save_config(&Config::default(), &path)?;
            output::success(global, &format!("Wrote {}", path.display()));
            Ok(())
        }
    }
}
