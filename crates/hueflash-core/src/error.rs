// ── Core error types ──
//
// User-facing errors from hueflash-core. The same bridge error means
// different things depending on which endpoint produced it, so the
// mapping from `hueflash_api::Error` is done per call site through the
// `CoreError::from_*` constructors rather than a blanket `From` impl.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connect flow ─────────────────────────────────────────────────
    /// No bridge could be located via the discovery endpoint.
    #[error("No reachable bridge: {source}")]
    Discovery {
        #[source]
        source: hueflash_api::Error,
    },

    /// The bridge refused to pair because its link button was not pressed.
    #[error("Pairing denied: {description}")]
    PairingDenied { description: String },

    /// Network, DNS, TLS or timeout failure talking to the bridge.
    #[error("Bridge unreachable: {reason}")]
    Transport {
        reason: String,
        #[source]
        source: hueflash_api::Error,
    },

    /// The stored credential was rejected by the bridge.
    #[error("Stored credential rejected by bridge: {description}")]
    CredentialInvalid { description: String },

    /// The bridge answered with a payload we could not interpret.
    #[error("Unexpected response from bridge: {message}")]
    MalformedResponse { message: String },

    /// The bridge rejected a state change.
    #[error("Bridge rejected request: {description}")]
    Rejected { description: String },

    // ── Local state ──────────────────────────────────────────────────
    /// Reading or writing a persisted file failed.
    #[error("Cannot access {}: {reason}", .path.display())]
    Storage { path: PathBuf, reason: String },

    /// An alert was requested before a connect flow reached `Ready`.
    #[error("Not connected to a bridge")]
    NotReady,

    /// Invalid runtime configuration.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Map an error from the discovery endpoint. Every failure there,
    /// including an empty or malformed answer, means "no bridge".
    pub fn from_discovery(source: hueflash_api::Error) -> Self {
        Self::Discovery { source }
    }

    /// Map an error from the pairing endpoint.
    pub fn from_pairing(err: hueflash_api::Error) -> Self {
        match err {
            hueflash_api::Error::Bridge { description, .. } => Self::PairingDenied { description },
            other => Self::from_transport(other),
        }
    }

    /// Map an error from the lights listing endpoint. Any error body
    /// there means the stored username is no longer accepted.
    pub fn from_catalog(err: hueflash_api::Error) -> Self {
        match err {
            hueflash_api::Error::Bridge { description, .. } => {
                Self::CredentialInvalid { description }
            }
            other => Self::from_transport(other),
        }
    }

    /// Map an error from a light state update.
    pub fn from_state_update(err: hueflash_api::Error) -> Self {
        match err {
            hueflash_api::Error::Bridge { description, .. } => Self::Rejected { description },
            other => Self::from_transport(other),
        }
    }

    /// Shared mapping for errors that are not bridge error bodies.
    fn from_transport(err: hueflash_api::Error) -> Self {
        match err {
            hueflash_api::Error::Deserialization { message, .. } => {
                Self::MalformedResponse { message }
            }
            hueflash_api::Error::Bridge { description, .. } => Self::Rejected { description },
            other => Self::Transport {
                reason: other.to_string(),
                source: other,
            },
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Storage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for network-level failures, as opposed to the bridge
    /// answering with a refusal.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Short reason suitable for `ConnectionState::Failed`.
    ///
    /// Bridge refusals report the bridge's own description verbatim.
    pub fn reason(&self) -> String {
        match self {
            Self::PairingDenied { description }
            | Self::CredentialInvalid { description }
            | Self::Rejected { description } => description.clone(),
            other => other.to_string(),
        }
    }

    /// What the user should do next.
    pub fn user_hint(&self) -> &'static str {
        match self {
            Self::Discovery { .. } => {
                "Check that the bridge is powered and on the same network, then connect again."
            }
            Self::PairingDenied { .. } => "Press the link button on the bridge and connect again.",
            Self::Transport { .. } => {
                "The bridge did not answer. Check the network connection and try again."
            }
            Self::CredentialInvalid { .. } => {
                "Delete the stored credential and connect again to pair a new one."
            }
            Self::MalformedResponse { .. } | Self::Rejected { .. } => {
                "The bridge answered unexpectedly. Try again, or restart the bridge."
            }
            Self::Storage { .. } => "Check the file's permissions and contents.",
            Self::NotReady => "Connect to the bridge first.",
            Self::Config { .. } => "Check the configuration file.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge(kind: u16, description: &str) -> hueflash_api::Error {
        hueflash_api::Error::Bridge {
            kind,
            address: "/".into(),
            description: description.into(),
        }
    }

    #[test]
    fn pairing_rejection_keeps_bridge_description() {
        let err = CoreError::from_pairing(bridge(101, "link button not pressed"));
        assert!(matches!(err, CoreError::PairingDenied { .. }));
        assert_eq!(err.reason(), "link button not pressed");
    }

    #[test]
    fn catalog_error_body_is_credential_invalid() {
        let err = CoreError::from_catalog(bridge(1, "unauthorized user"));
        assert!(matches!(err, CoreError::CredentialInvalid { .. }));
    }

    #[test]
    fn transport_failures_stay_distinct_from_refusals() {
        let err = CoreError::from_pairing(hueflash_api::Error::Tls("handshake".into()));
        assert!(err.is_transport());
        assert!(!CoreError::from_pairing(bridge(101, "x")).is_transport());
    }

    #[test]
    fn malformed_payloads_map_to_malformed_response() {
        let err = CoreError::from_catalog(hueflash_api::Error::Deserialization {
            message: "expected object".into(),
            body: "[]".into(),
        });
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }
}
