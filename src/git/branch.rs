use std::fmt::Debug;

use camino::Utf8Path;
use command_error::CommandExt;
use command_error::OutputContext;
use miette::Context;
use tracing::instrument;
use utf8_command::Utf8Output;

use super::Git;

/// Git methods for dealing with branches.
#[repr(transparent)]
pub struct GitBranch<'a, C>(&'a Git<C>);

impl<C> Debug for GitBranch<'_, C>
where
    C: AsRef<Utf8Path>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitBranch")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, C> GitBranch<'a, C>
where
    C: AsRef<Utf8Path>,
{
    pub fn new(git: &'a Git<C>) -> Self {
        Self(git)
    }

    /// Create a branch and switch to it, like `git checkout -b`.
    ///
    /// Fails if the branch already exists.
    #[instrument(level = "trace")]
    pub fn checkout_new(&self, branch: &str) -> miette::Result<()> {
        self.0
            .command()
            .args(["checkout", "-b", branch])
            .output_checked_utf8()
            .wrap_err_with(|| format!("Failed to create branch {branch}"))?;
        Ok(())
    }

    /// Does a local branch exist?
    #[instrument(level = "trace")]
    pub fn exists_local(&self, branch: &str) -> miette::Result<bool> {
        Ok(self
            .0
            .command()
            .args(["show-ref", "--quiet", "--heads", branch])
            .output_checked_as(|context: OutputContext<Utf8Output>| {
                Ok::<_, command_error::Error>(context.status().success())
            })?)
    }

    /// The currently checked-out branch, or [`None`] if `HEAD` is detached.
    #[instrument(level = "trace")]
    pub fn current(&self) -> miette::Result<Option<String>> {
        Ok(self
            .0
            .command()
            .args(["symbolic-ref", "--quiet", "--short", "HEAD"])
            .output_checked_as(|context: OutputContext<Utf8Output>| {
                if context.status().success() {
                    Ok::<_, command_error::Error>(Some(
                        context.output().stdout.trim().to_owned(),
                    ))
                } else {
                    Ok(None)
                }
            })?)
    }
}
