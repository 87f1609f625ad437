use std::ops::Deref;
use std::path::Path;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use miette::IntoDiagnostic;
use tempfile::TempDir;

/// A [`TempDir`] with a UTF-8 path.
#[derive(Debug)]
pub struct Utf8TempDir {
    #[allow(dead_code)]
    inner: TempDir,
    path: Utf8PathBuf,
}

impl Utf8TempDir {
    pub fn new() -> miette::Result<Self> {
        let inner = tempfile::tempdir().into_diagnostic()?;
        let path = inner.path().to_owned().try_into().into_diagnostic()?;
        Ok(Self { inner, path })
    }
}

impl Deref for Utf8TempDir {
    type Target = Utf8Path;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl AsRef<Path> for Utf8TempDir {
    fn as_ref(&self) -> &Path {
        self.path.as_std_path()
    }
}
