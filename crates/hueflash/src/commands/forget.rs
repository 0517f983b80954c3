//! Forget the stored bridge credential.

use hueflash_config::Config;
use hueflash_core::CredentialStore;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub fn handle(config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let store = CredentialStore::new(config.credential_path());
    if store.clear()? {
        output::success(
            global,
            &format!(
                "Removed {}; the next connect pairs again",
                store.path().display()
            ),
        );
    } else {
        output::notice(global, "No stored credential");
    }
    Ok(())
}
