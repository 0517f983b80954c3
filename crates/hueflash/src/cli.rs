//! Clap derive structures for the `hueflash` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hueflash -- flash Philips Hue lights when a match is accepted
#[derive(Debug, Parser)]
#[command(
    name = "hueflash",
    version,
    about = "Flash Philips Hue lights when a match is accepted",
    long_about = "Pairs with the Hue bridge on your network and flashes a chosen set of\n\
        lights whenever the acceptance helper reports an accepted match.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to use instead of the platform default
    #[arg(long, env = "HUEFLASH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HUEFLASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the bridge, pair if needed, and load the light catalog
    Connect(ConnectArgs),

    /// Connect and run one alert cycle on the watched lights
    Test,

    /// Connect and pulse the watched lights, as on an accepted match
    Pulse,

    /// Connect and list the lights known to the bridge
    #[command(alias = "ls")]
    Lights,

    /// Run the acceptance helper and pulse the watched lights on success
    Watch(WatchArgs),

    /// Manage the names of the lights to flash
    #[command(alias = "wl")]
    Watchlist(WatchlistArgs),

    /// Delete the stored bridge credential so the next connect pairs again
    Forget,

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Connect / Watch ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConnectArgs {
    /// Flash the watched lights once after connecting
    #[arg(long)]
    pub test: bool,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run the helper a single time instead of looping
    #[arg(long)]
    pub once: bool,
}

// ── Watch-list ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WatchlistArgs {
    #[command(subcommand)]
    pub command: WatchlistCommand,
}

#[derive(Debug, Subcommand)]
pub enum WatchlistCommand {
    /// Show the watched light names
    #[command(alias = "ls")]
    List,

    /// Add a light name to the watch-list
    Add {
        /// Light name exactly as the bridge reports it
        name: String,
    },

    /// Remove a light name from the watch-list
    #[command(alias = "rm")]
    Remove {
        /// Light name to remove
        name: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
