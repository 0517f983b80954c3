//! Acceptance helper supervision.
//!
//! Runs the configured helper to completion and reacts to its exit code:
//! success pulses the watched lights, the configured cancel code stops
//! the loop, anything else is a failure.

use std::path::Path;

use tracing::{debug, error, info};

use hueflash_config::HelperSection;
use hueflash_core::Hub;

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

use super::{alert, config_file};

#[derive(Debug, PartialEq, Eq)]
enum HelperOutcome {
    Accepted,
    Cancelled,
    Failed(String),
}

fn classify(code: Option<i32>, cancelled_exit_code: i32) -> HelperOutcome {
    match code {
        Some(0) => HelperOutcome::Accepted,
        Some(c) if c == cancelled_exit_code => HelperOutcome::Cancelled,
        Some(c) => HelperOutcome::Failed(format!("exit code {c}")),
        None => HelperOutcome::Failed("terminated by signal".into()),
    }
}

async fn run_helper(command: &Path, helper: &HelperSection) -> Result<HelperOutcome, CliError> {
    debug!(command = %command.display(), args = ?helper.args, "starting acceptance helper");
    let status = tokio::process::Command::new(command)
        .args(&helper.args)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| CliError::HelperFailed {
            status: format!("could not start {}: {e}", command.display()),
        })?;
    Ok(classify(status.code(), helper.cancelled_exit_code))
}

pub async fn handle(
    hub: &Hub,
    helper: &HelperSection,
    args: WatchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let Some(command) = helper.command.as_deref() else {
        return Err(CliError::HelperNotConfigured {
            path: config_file(global).display().to_string(),
        });
    };

    // A failed connect still runs the helper; accepted matches just won't flash.
    if let Err(err) = hub.connect().await {
        let err = CliError::from(err);
        output::notice(global, &format!("{err}; lights will not flash"));
    }

    loop {
        match run_helper(command, helper).await? {
            HelperOutcome::Accepted => {
                info!("match accepted");
                let report = hub.on_game_accepted().await;
                alert::print_report(&report, global)?;
            }
            HelperOutcome::Cancelled => {
                info!("operation cancelled");
                return Err(CliError::HelperCancelled);
            }
            HelperOutcome::Failed(status) => {
                error!(%status, "acceptance helper failed");
                return Err(CliError::HelperFailed { status });
            }
        }

        if args.once {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_to_outcomes() {
        assert_eq!(classify(Some(0), 2), HelperOutcome::Accepted);
        assert_eq!(classify(Some(2), 2), HelperOutcome::Cancelled);
        assert_eq!(
            classify(Some(1), 2),
            HelperOutcome::Failed("exit code 1".into())
        );
        assert_eq!(
            classify(None, 2),
            HelperOutcome::Failed("terminated by signal".into())
        );
    }

    #[test]
    fn custom_cancel_code() {
        assert_eq!(classify(Some(2), 5), HelperOutcome::Failed("exit code 2".into()));
        assert_eq!(classify(Some(5), 5), HelperOutcome::Cancelled);
    }
}
