// Bridge pairing
//
// A new API identity is created by POSTing a device type to `/api`. The
// bridge only grants it within a short window after someone presses the
// physical link button; otherwise it answers with error type 101.

use tracing::debug;

use crate::bridge::client::BridgeClient;
use crate::bridge::models::{CreateUserRequest, CreatedUser};
use crate::error::Error;

impl BridgeClient {
    /// Ask the bridge to issue a username for `device_type`.
    ///
    /// Single attempt: a "link button not pressed" rejection is returned as
    /// [`Error::Bridge`] with type 101 and the bridge's description. Retrying
    /// is up to the caller.
    pub async fn create_user(&self, device_type: &str) -> Result<CreatedUser, Error> {
        let url = self.api_url("")?;
        debug!(device_type, "requesting bridge username");

        let users: Vec<CreatedUser> = self
            .post(
                url,
                &CreateUserRequest {
                    devicetype: device_type,
                },
            )
            .await?;

        users.into_iter().next().ok_or_else(|| Error::Deserialization {
            message: "pairing response carried no username".into(),
            body: String::new(),
        })
    }
}
