// Shared transport configuration for building reqwest::Client instances.
//
// The discovery client and the bridge client are built from the same
// config type, but with different TLS modes: discovery talks to a public
// cloud endpoint, the bridge presents a device-local certificate.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("hueflash/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// Use the built-in root certificate store.
    #[default]
    System,
    /// Accept any certificate. The bridge's certificate is issued by the
    /// device itself, so trust comes from LAN-local presence rather than
    /// a CA chain. Never use this for the cloud discovery endpoint.
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Per-request timeout. `None` keeps reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Config for a bridge on the local network.
    pub fn local_bridge(trust_local_certificate: bool) -> Self {
        Self {
            tls: if trust_local_certificate {
                TlsMode::DangerAcceptInvalid
            } else {
                TlsMode::System
            },
            timeout: None,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        match self.tls {
            TlsMode::System => {}
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_bridge_trust_flag_selects_tls_mode() {
        assert_eq!(
            TransportConfig::local_bridge(true).tls,
            TlsMode::DangerAcceptInvalid
        );
        assert_eq!(TransportConfig::local_bridge(false).tls, TlsMode::System);
    }

    #[test]
    fn default_has_no_timeout_override() {
        let config = TransportConfig::default();
        assert_eq!(config.tls, TlsMode::System);
        assert!(config.timeout.is_none());
        assert!(config.build_client().is_ok());
    }
}
