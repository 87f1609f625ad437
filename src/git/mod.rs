use std::fmt::Debug;
use std::process::Command;

use camino::Utf8Path;
use camino::Utf8PathBuf;

mod branch;
mod remote;

pub use branch::GitBranch;
pub use remote::GitRemote;

/// `git` CLI wrapper.
#[derive(Clone)]
pub struct Git<C = Utf8PathBuf> {
    current_dir: C,
    env_variables: Vec<(String, String)>,
}

impl<C> Debug for Git<C>
where
    C: AsRef<Utf8Path>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Git")
            .field(&self.current_dir.as_ref())
            .finish()
    }
}

impl<C> AsRef<Utf8Path> for Git<C>
where
    C: AsRef<Utf8Path>,
{
    fn as_ref(&self) -> &Utf8Path {
        self.current_dir.as_ref()
    }
}

impl<C> Git<C>
where
    C: AsRef<Utf8Path>,
{
    pub fn from_path(current_dir: C) -> Self {
        Self {
            current_dir,
            env_variables: Vec::new(),
        }
    }

    pub fn get_current_dir(&self) -> &C {
        &self.current_dir
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        let mut command = Command::new("git");
        command.current_dir(self.current_dir.as_ref());
        command.envs(self.env_variables.iter().map(|(key, value)| (key, value)));
        command
    }

    pub fn envs(&mut self, iter: impl IntoIterator<Item = (String, String)>) {
        self.env_variables.extend(iter);
    }

    /// Methods for dealing with Git branches.
    pub fn branch(&self) -> GitBranch<'_, C> {
        GitBranch::new(self)
    }

    /// Methods for dealing with Git remotes.
    pub fn remote(&self) -> GitRemote<'_, C> {
        GitRemote::new(self)
    }
}
