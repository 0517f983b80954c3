//! Connect command handler.

use hueflash_core::{AlertMode, ConnectSummary, Hub};

use crate::cli::{ConnectArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::alert;

fn detail(s: &ConnectSummary) -> String {
    [
        format!("Bridge:  {}", s.bridge_id),
        format!("Address: {}", s.network_address),
        format!(
            "Paired:  {}",
            if s.paired {
                "yes (new credential)"
            } else {
                "no (stored credential)"
            }
        ),
        format!(
            "Lights:  {}",
            s.lights.map_or_else(|| "-".into(), |n| n.to_string())
        ),
    ]
    .join("\n")
}

pub async fn handle(hub: &Hub, args: ConnectArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = hub.connect().await?;

    let out = output::render_single(&global.output, &summary, detail, |s| s.bridge_id.clone())?;
    output::print_output(&out, global.quiet);

    if summary.paired {
        output::success(
            global,
            &format!(
                "Paired; credential saved to {}",
                hub.credentials().path().display()
            ),
        );
    }
    if summary.lights.is_none() {
        output::notice(global, "The light catalog loads on the next connect");
    }

    if args.test {
        alert::flash(hub, AlertMode::Sustained, global).await?;
    }
    Ok(())
}
