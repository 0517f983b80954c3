//! Alert command handlers (`test`, `pulse`).

use hueflash_core::{AlertMode, AlertReport, Hub};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(r: &AlertReport) -> String {
    let mut lines = vec![format!("Alert:     {}", r.mode)];
    lines.push(format!(
        "Sent:      {}",
        if r.sent.is_empty() { "-".into() } else { r.sent.join(", ") }
    ));
    for f in &r.failed {
        lines.push(format!("Failed:    {} ({}): {}", f.name, f.device_id, f.reason));
    }
    if !r.unmatched.is_empty() {
        lines.push(format!("Not found: {}", r.unmatched.join(", ")));
    }
    lines.join("\n")
}

/// Print an alert outcome in the selected format.
pub fn print_report(report: &AlertReport, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.output, report, detail, |r| r.sent.join("\n"))?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Flash the watched lights on an already connected hub.
pub async fn flash(hub: &Hub, mode: AlertMode, global: &GlobalOpts) -> Result<(), CliError> {
    if hub.watch_list().load()?.is_empty() {
        output::notice(
            global,
            "The watch-list is empty. Add lights with: hueflash watchlist add <name>",
        );
    }

    let report = match mode {
        AlertMode::Pulse => hub.on_game_accepted().await,
        AlertMode::Sustained => hub.on_user_test_requested().await,
    };
    print_report(&report, global)
}

/// Connect, then flash the watched lights once.
pub async fn handle(hub: &Hub, mode: AlertMode, global: &GlobalOpts) -> Result<(), CliError> {
    hub.connect().await?;
    flash(hub, mode, global).await
}
