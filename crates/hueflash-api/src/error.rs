use thiserror::Error;

/// Bridge error type for "unauthorized user" (unknown or revoked username).
pub const BRIDGE_UNAUTHORIZED_USER: u16 = 1;

/// Bridge error type for "link button not pressed" during pairing.
pub const BRIDGE_LINK_BUTTON_NOT_PRESSED: u16 = 101;

/// Top-level error type for the `hueflash-api` crate.
///
/// Covers every failure mode of the two HTTP surfaces this crate talks to:
/// the cloud discovery endpoint and the bridge's local REST API.
/// `hueflash-core` maps these into the user-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS handshake, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to configure TLS for the HTTP client.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Non-success HTTP status. The bridge reports most failures with
    /// HTTP 200 and an error array, so this is rare outside discovery.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── Bridge ──────────────────────────────────────────────────────
    /// Structured error from the bridge (`[{"error":{type,address,description}}]`).
    #[error("Bridge error {kind} at {address}: {description}")]
    Bridge {
        kind: u16,
        address: String,
        description: String,
    },

    // ── Discovery ───────────────────────────────────────────────────
    /// The discovery endpoint answered with an empty candidate list.
    #[error("No bridges reported by discovery endpoint")]
    EmptyDiscovery,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` for a bridge error that means the username is not
    /// (or no longer) authorized.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Bridge {
                kind: BRIDGE_UNAUTHORIZED_USER,
                ..
            }
        )
    }

    /// Returns `true` if the bridge is waiting for its link button.
    pub fn is_link_button_required(&self) -> bool {
        matches!(
            self,
            Self::Bridge {
                kind: BRIDGE_LINK_BUTTON_NOT_PRESSED,
                ..
            }
        )
    }

    /// Returns `true` if the request never produced a usable HTTP exchange.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Tls(_))
    }

    /// Build a `Deserialization` error, keeping a bounded preview of the body.
    pub(crate) fn deserialization(err: &serde_json::Error, body: &str) -> Self {
        let preview: String = body.chars().take(200).collect();
        Self::Deserialization {
            message: format!("{err} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    }
}
