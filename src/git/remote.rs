use std::fmt::Debug;

use camino::Utf8Path;
use command_error::CommandExt;
use tracing::instrument;

use super::Git;

/// Git methods for dealing with remotes.
#[repr(transparent)]
pub struct GitRemote<'a, C>(&'a Git<C>);

impl<C> Debug for GitRemote<'_, C>
where
    C: AsRef<Utf8Path>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("GitRemote")
            .field(&self.0.get_current_dir().as_ref())
            .finish()
    }
}

impl<'a, C> GitRemote<'a, C>
where
    C: AsRef<Utf8Path>,
{
    pub fn new(git: &'a Git<C>) -> Self {
        Self(git)
    }

    /// Force-push `branch` to `remote`, overwriting whatever the remote branch points to.
    ///
    /// Success is determined solely by the exit status; the push is never retried.
    #[instrument(level = "trace")]
    pub fn force_push(&self, remote: &str, branch: &str) -> miette::Result<()> {
        self.0
            .command()
            .args(["push", "--force", remote, branch])
            .status_checked()?;
        Ok(())
    }
}
