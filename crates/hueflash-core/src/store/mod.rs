// ── Durable local state ──
//
// Two small JSON files: the paired credential and the watch-list. A
// missing file is a valid state for both; anything else that goes wrong
// is surfaced as `CoreError::Storage`.

mod credential;
mod watch_list;

pub use credential::CredentialStore;
pub use watch_list::WatchListStore;

use std::io::ErrorKind;
use std::path::Path;

use crate::error::CoreError;

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, CoreError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CoreError::storage(path, e)),
    }
}

/// Write via a sibling temp file and rename, so readers never observe a
/// half-written file.
fn write_atomic(path: &Path, contents: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::storage(parent, e))?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    std::fs::write(&tmp, contents).map_err(|e| CoreError::storage(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| CoreError::storage(path, e))
}
