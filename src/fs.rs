//! Like [`fs_err`], but the functions are instrumented with [`macro@tracing::instrument`] and return
//! [`miette::Result`] instead of [`std::io::Result`].

use std::fmt::Debug;
use std::path::Path;

use miette::IntoDiagnostic;
use tracing::instrument;

#[instrument(level = "trace")]
pub fn create_dir<P>(path: P) -> miette::Result<()>
where
    P: AsRef<Path> + Debug,
{
    fs_err::create_dir(path).into_diagnostic()
}

#[instrument(level = "trace")]
pub fn create_dir_all<P>(path: P) -> miette::Result<()>
where
    P: AsRef<Path> + Debug,
{
    fs_err::create_dir_all(path).into_diagnostic()
}

#[instrument(level = "trace")]
pub fn remove_dir_all<P>(path: P) -> miette::Result<()>
where
    P: AsRef<Path> + Debug,
{
    fs_err::remove_dir_all(path).into_diagnostic()
}

#[instrument(level = "trace")]
pub fn copy<P, Q>(from: P, to: Q) -> miette::Result<u64>
where
    P: AsRef<Path> + Debug,
    Q: AsRef<Path> + Debug,
{
    fs_err::copy(from, to).into_diagnostic()
}
