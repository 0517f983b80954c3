// ── Bridge credential ──

use secrecy::{ExposeSecret, SecretString};

/// An API identity issued by the bridge during pairing.
///
/// Immutable once obtained. The username is an unguessable token that
/// grants full control of the bridge, so it is held as a secret and
/// never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct Credential {
    username: SecretString,
}

impl Credential {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: SecretString::from(username.into()),
        }
    }

    /// The raw username, for building request paths and persisting.
    pub fn username(&self) -> &str {
        self.username.expose_secret()
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.username() == other.username()
    }
}

impl Eq for Credential {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_username() {
        let cred = Credential::new("super-secret-token");
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("super-secret-token"), "leaked: {rendered}");
        assert_eq!(cred.username(), "super-secret-token");
    }
}
