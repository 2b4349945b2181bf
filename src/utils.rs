use std::{fs, path::Path};

use anyhow::Error;
use tracing::debug;

/// Creates `dir` and any missing parents. A directory that already exists is left alone.
pub fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if dir.is_dir() {
        debug!(dir = %dir.display(), "output directory already exists");
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| {
        Error::msg(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    debug!(dir = %dir.display(), "created output directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories_and_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("assets").join("icons");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn fails_when_a_file_is_in_the_way() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("icons");
        fs::write(&blocker, b"not a directory").unwrap();

        assert!(ensure_dir(&blocker.join("nested")).is_err());
    }
}
