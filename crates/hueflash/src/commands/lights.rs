//! Light catalog listing.

use std::collections::HashSet;

use serde::Serialize;
use tabled::Tabled;

use hueflash_core::{Hub, LightRecord};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// A catalog entry annotated with watch-list membership.
#[derive(Serialize)]
struct LightView<'a> {
    #[serde(flatten)]
    light: &'a LightRecord,
    watched: bool,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Reachable")]
    reachable: String,
    #[tabled(rename = "On")]
    on: String,
    #[tabled(rename = "Brightness")]
    brightness: String,
    #[tabled(rename = "Alert")]
    alert: String,
    #[tabled(rename = "Watched")]
    watched: String,
}

fn yes_no(v: bool) -> String {
    if v { "yes".into() } else { "no".into() }
}

impl From<&LightView<'_>> for LightRow {
    fn from(v: &LightView<'_>) -> Self {
        let l = v.light;
        Self {
            id: l.device_id.clone(),
            name: l.name.clone(),
            reachable: yes_no(l.is_reachable),
            on: yes_no(l.state.on),
            brightness: l
                .state
                .brightness
                .map(|b| b.to_string())
                .unwrap_or_default(),
            alert: l.state.alert.clone().unwrap_or_default(),
            watched: if v.watched { "★".into() } else { String::new() },
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(hub: &Hub, global: &GlobalOpts) -> Result<(), CliError> {
    hub.connect().await?;
    let session = hub.session().ok_or(CliError::NotConnected)?;

    let Some(catalog) = session.catalog.as_ref() else {
        output::notice(
            global,
            "Paired just now; run the command again to load the light catalog",
        );
        return Ok(());
    };

    let watched = hub.watch_list().load()?;
    let names: HashSet<&str> = watched.iter().map(|w| w.name.as_str()).collect();

    let views: Vec<LightView<'_>> = catalog
        .iter()
        .map(|light| LightView {
            light,
            watched: names.contains(light.name.as_str()),
        })
        .collect();

    let out = output::render_list(
        &global.output,
        &views,
        |v| LightRow::from(v),
        |v| v.light.device_id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
