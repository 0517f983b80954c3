mod cli;
mod commands;
mod error;
mod output;

use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hueflash_config::{Config, ConfigError};

use crate::cli::{Cli, Command};
use crate::error::{CliError, exit_code};

const LOG_FILE_NAME: &str = "hueflash.log";

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Config decides whether a log file is written, so load it first
    let config = hueflash_config::load_config(cli.global.config.as_deref());
    let log_dir = config
        .as_ref()
        .ok()
        .and_then(|cfg| cfg.logging.directory.clone());
    let guard = init_tracing(cli.global.verbose, log_dir.as_deref());

    // Dispatch and handle errors with proper exit codes
    let code = match run(cli, config).await {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            code
        }
    };

    // Flush the file writer; process::exit skips destructors
    drop(guard);
    std::process::exit(code);
}

/// Console logging to stderr, plus an append-only `hueflash.log` when a
/// log directory is configured. A directory that cannot be opened only
/// disables the file layer. The returned guard flushes the file writer
/// on drop.
fn init_tracing(verbosity: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => match RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(dir)
        {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "warning: file logging disabled, cannot open {}: {e}",
                    dir.display()
                );
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

async fn run(cli: Cli, config: Result<Config, ConfigError>) -> Result<(), CliError> {
    match cli.command {
        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "hueflash", &mut std::io::stdout());
            Ok(())
        }

        // Config commands must work even when the file doesn't parse
        Command::Config(args) => commands::config_cmd::handle(args, config, &cli.global),

        cmd => {
            let config = config?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &config, &cli.global).await
        }
    }
}
