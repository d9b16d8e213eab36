//! Lookup strategy for the dialog front-end binary.

use log::debug;
use std::path::{Path, PathBuf};

/// Binary name of the dialog front-end.
pub const DIALOG_BINARY_NAME: &str = "confer-dialog";

/// Resolve the path of the dialog binary.
///
/// An explicit path is trusted as-is with no existence check. Otherwise a
/// `confer-dialog` binary sitting next to the server executable wins (dev
/// builds put both in the same target directory), then a `$PATH` lookup.
/// The bare binary name is the last resort; a missing binary surfaces later
/// as a launch failure rather than here.
pub fn resolve_dialog_binary(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("dialog binary set explicitly (path={})", path.display());
        return path.to_path_buf();
    }

    let name = format!("{DIALOG_BINARY_NAME}{}", std::env::consts::EXE_SUFFIX);
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        let sibling = dir.join(&name);
        if sibling.exists() {
            debug!("dialog binary found beside server (path={})", sibling.display());
            return sibling;
        }
    }

    match which::which(DIALOG_BINARY_NAME) {
        Ok(found) => {
            debug!("dialog binary found on PATH (path={})", found.display());
            found
        }
        Err(_) => {
            debug!("dialog binary not found, falling back to bare name");
            PathBuf::from(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DIALOG_BINARY_NAME, resolve_dialog_binary};
    use pretty_assertions::assert_eq;
    use std::path::{Path, PathBuf};

    #[test]
    fn explicit_path_wins_without_existence_check() {
        let path = Path::new("/nowhere/custom-dialog");
        assert_eq!(
            resolve_dialog_binary(Some(path)),
            PathBuf::from("/nowhere/custom-dialog")
        );
    }

    #[test]
    fn fallback_keeps_the_binary_name() {
        let resolved = resolve_dialog_binary(None);
        let name = resolved
            .file_name()
            .and_then(|name| name.to_str())
            .expect("file name");
        assert_eq!(name.starts_with(DIALOG_BINARY_NAME), true);
    }
}
