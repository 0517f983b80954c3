//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use hueflash_config::ConfigError;
use hueflash_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const HELPER_CANCELLED: i32 = 10;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Bridge ───────────────────────────────────────────────────────

    #[error("No Hue bridge found: {reason}")]
    #[diagnostic(
        code(hueflash::bridge_not_found),
        help(
            "Make sure the bridge is powered on and this machine is online.\n\
             Discovery uses the cloud endpoint set in [bridge] discovery_url."
        )
    )]
    BridgeNotFound { reason: String },

    #[error("Could not reach the bridge: {reason}")]
    #[diagnostic(
        code(hueflash::connection_failed),
        help("Check that the bridge is powered on and on the same network.")
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Pairing refused by the bridge: {description}")]
    #[diagnostic(
        code(hueflash::pairing_denied),
        help("Press the link button on the bridge and run: hueflash connect")
    )]
    PairingDenied { description: String },

    #[error("The bridge rejected the stored credential: {description}")]
    #[diagnostic(
        code(hueflash::credential_rejected),
        help(
            "The credential may have been revoked from the bridge.\n\
             Run: hueflash forget, then press the link button and run: hueflash connect"
        )
    )]
    CredentialRejected { description: String },

    // ── Bridge responses ─────────────────────────────────────────────

    #[error("Unexpected response from the bridge: {message}")]
    #[diagnostic(code(hueflash::malformed_response))]
    MalformedResponse { message: String },

    #[error("The bridge refused the request: {description}")]
    #[diagnostic(code(hueflash::rejected))]
    Rejected { description: String },

    #[error("Not connected to a bridge")]
    #[diagnostic(code(hueflash::not_connected), help("Run: hueflash connect"))]
    NotConnected,

    // ── Storage ──────────────────────────────────────────────────────

    #[error("Cannot access {path}: {reason}")]
    #[diagnostic(
        code(hueflash::storage),
        help("Fix or delete the file. Deleting the credential file means pairing again.")
    )]
    Storage { path: String, reason: String },

    // ── Helper ───────────────────────────────────────────────────────

    #[error("No acceptance helper configured")]
    #[diagnostic(
        code(hueflash::helper_not_configured),
        help("Set [helper] command in {path}")
    )]
    HelperNotConfigured { path: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(hueflash::helper_cancelled))]
    HelperCancelled,

    #[error("Acceptance helper failed ({status})")]
    #[diagnostic(code(hueflash::helper_failed))]
    HelperFailed { status: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(hueflash::validation))]
    Validation { field: String, reason: String },

    #[error("'{name}' is not on the watch-list")]
    #[diagnostic(code(hueflash::not_watched), help("Run: hueflash watchlist list"))]
    NotWatched { name: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists at {path}")]
    #[diagnostic(code(hueflash::config_exists), help("Use --force to overwrite it."))]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(hueflash::config))]
    Config(Box<figment::Error>),

    #[error("failed to serialize config: {0}")]
    #[diagnostic(code(hueflash::config))]
    ConfigSerialize(#[from] toml::ser::Error),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON output: {0}")]
    #[diagnostic(code(hueflash::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BridgeNotFound { .. } | Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::PairingDenied { .. } | Self::CredentialRejected { .. } => exit_code::AUTH,
            Self::Validation { .. }
            | Self::HelperNotConfigured { .. }
            | Self::ConfigExists { .. }
            | Self::Config(_) => exit_code::USAGE,
            Self::HelperCancelled => exit_code::HELPER_CANCELLED,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Discovery { source } => CliError::BridgeNotFound {
                reason: source.to_string(),
            },
            CoreError::Transport { reason, .. } => CliError::ConnectionFailed { reason },
            CoreError::PairingDenied { description } => CliError::PairingDenied { description },
            CoreError::CredentialInvalid { description } => {
                CliError::CredentialRejected { description }
            }
            CoreError::MalformedResponse { message } => CliError::MalformedResponse { message },
            CoreError::Rejected { description } => CliError::Rejected { description },
            CoreError::Storage { path, reason } => CliError::Storage {
                path: path.display().to_string(),
                reason,
            },
            CoreError::NotReady => CliError::NotConnected,
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Serialization(e) => CliError::ConfigSerialize(e),
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_category() {
        let denied = CliError::from(CoreError::PairingDenied {
            description: "link button not pressed".into(),
        });
        assert_eq!(denied.exit_code(), exit_code::AUTH);

        let revoked = CliError::from(CoreError::CredentialInvalid {
            description: "unauthorized user".into(),
        });
        assert_eq!(revoked.exit_code(), exit_code::AUTH);

        assert_eq!(
            CliError::from(CoreError::NotReady).exit_code(),
            exit_code::GENERAL
        );
        assert_eq!(CliError::HelperCancelled.exit_code(), exit_code::HELPER_CANCELLED);
        assert_eq!(
            CliError::HelperNotConfigured { path: "x".into() }.exit_code(),
            exit_code::USAGE
        );
    }
}
