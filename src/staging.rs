use std::ops::Deref;
use std::path::Path;

use camino::Utf8Path;
use camino::Utf8PathBuf;

use crate::fs;

/// Reserved name for the staging directory nested under the source directory.
///
/// Any path containing this name is excluded from the staging copy, so a run can't copy an
/// earlier run's staging directory into itself.
pub const STAGING_DIR_NAME: &str = "git-publish-temp";

/// The staging directory for a single publish run.
///
/// Removed when dropped. Removal is best-effort; failures are logged and never change the
/// run's outcome.
#[derive(Debug)]
pub struct StagingDir {
    path: Utf8PathBuf,
}

impl StagingDir {
    /// Create the staging directory under `source`.
    ///
    /// A leftover staging directory from an earlier run is reused as-is.
    pub fn create(source: &Utf8Path) -> miette::Result<Self> {
        let path = source.join(STAGING_DIR_NAME);
        if !path.exists() {
            fs::create_dir(&path)?;
        }
        Ok(Self { path })
    }

    pub fn as_path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Deref for StagingDir {
    type Target = Utf8Path;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl AsRef<Utf8Path> for StagingDir {
    fn as_ref(&self) -> &Utf8Path {
        &self.path
    }
}

impl AsRef<Path> for StagingDir {
    fn as_ref(&self) -> &Path {
        self.path.as_std_path()
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_dir_all(&self.path) {
            tracing::warn!(
                %error,
                path = %self.path,
                "Failed to remove staging directory"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_dir_removed_on_drop() {
        let tempdir = tempfile::tempdir().unwrap();
        let source = Utf8Path::from_path(tempdir.path()).unwrap();

        let staging = StagingDir::create(source).unwrap();
        let path = staging.as_path().to_owned();
        assert!(path.is_dir());

        drop(staging);
        assert!(!path.exists());
    }

    #[test]
    fn test_staging_dir_reuses_leftover() {
        let tempdir = tempfile::tempdir().unwrap();
        let source = Utf8Path::from_path(tempdir.path()).unwrap();

        fs_err::create_dir(source.join(STAGING_DIR_NAME)).unwrap();
        fs_err::write(source.join(STAGING_DIR_NAME).join("leftover.txt"), "hi").unwrap();

        let staging = StagingDir::create(source).unwrap();
        assert!(staging.join("leftover.txt").exists());
        drop(staging);
        assert!(!source.join(STAGING_DIR_NAME).exists());
    }
}
