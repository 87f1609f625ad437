use std::ffi::OsString;
use std::process::Command;

use camino::Utf8PathBuf;
use clonable_command::Command as ClonableCommand;
use command_error::CommandExt;
use expect_test::Expect;
use fs_err as fs;
use git_publish::Git;
use git_publish::STAGING_DIR_NAME;
use miette::miette;
use miette::IntoDiagnostic;

mod utf8tempdir;

pub use utf8tempdir::Utf8TempDir;

/// `git-publish` session for integration testing.
pub struct GitPublish {
    command: ClonableCommand,
    tempdir: Utf8TempDir,
    git_publish: OsString,
    git_publish_args: Vec<String>,
}

impl GitPublish {
    pub fn new() -> miette::Result<Self> {
        let tempdir = Utf8TempDir::new()?;

        let gitconfig = tempdir.join(".gitconfig");
        fs::write(
            &gitconfig,
            "[user]\n\
            name = Puppy Doggy\n\
            email = dog@becca.ooo\n\
            \n\
            [init]\n\
            defaultBranch = main\n\
            ",
        )
        .into_diagnostic()?;

        let git_publish = test_bin::get_test_bin("git-publish").get_program().to_owned();

        let git_publish_args = vec![
            "--log".to_owned(),
            "debug,git_publish=trace".to_owned(),
        ];

        let command = ClonableCommand::new("")
            .envs([
                // > Whether to skip reading settings from the system-wide $(prefix)/etc/gitconfig file.
                ("GIT_CONFIG_NOSYSTEM", "1"),
                ("GIT_CONFIG_GLOBAL", gitconfig.as_str()),
                ("GIT_AUTHOR_DATE", "2019-07-06T18:25:00-0700"),
                ("GIT_COMMITTER_DATE", "2019-07-06T18:25:00-0700"),
                ("HOME", tempdir.as_str()),
            ])
            .current_dir(&tempdir);

        Ok(Self {
            git_publish,
            git_publish_args,
            command,
            tempdir,
        })
    }

    fn any_command(&self, program: &str) -> Command {
        let mut command = self.command.clone();
        command.name = program.into();
        command.to_std()
    }

    pub fn cmd(&self) -> Command {
        let mut command = self.command.clone();
        command.name = self.git_publish.clone();
        command = command.args(&self.git_publish_args);
        command.to_std()
    }

    pub fn path(&self, tail: &str) -> Utf8PathBuf {
        self.tempdir.join(tail)
    }

    pub fn sh(&self, script: &str) -> miette::Result<()> {
        let tempfile = tempfile::NamedTempFile::new().into_diagnostic()?;
        fs::write(
            &tempfile,
            format!(
                "set -ex\n\
                {script}"
            ),
        )
        .into_diagnostic()?;
        self.any_command("bash")
            .arg("--norc")
            .arg(tempfile.as_ref())
            .status_checked()
            .into_diagnostic()?;
        Ok(())
    }

    #[track_caller]
    pub fn git(&self, directory: &str) -> Git {
        let path = self.path(directory);
        if !path.exists() {
            panic!("A test requested a Git interface for a nonexistent path: {directory}");
        }
        let mut git = Git::from_path(path);
        git.envs(self.command.environment.iter().filter_map(|(key, value)| {
            value.as_ref().map(|value| {
                (
                    key.to_owned().into_string().unwrap(),
                    value.to_owned().into_string().unwrap(),
                )
            })
        }));
        git
    }

    /// Set up a repository in `path` with a single commit, cloned from a bare `origin` remote
    /// at `<path>-remote.git`.
    pub fn setup_repo_with_remote(&self, path: &str) -> miette::Result<Utf8PathBuf> {
        let repo = self.path(path);
        let repo_quoted = shell_words::quote(repo.as_str());
        let remote = self.remote_path(path);
        let remote_quoted = shell_words::quote(remote.as_str());
        self.sh(&format!(
            r#"
            git init --bare {remote_quoted}
            git clone {remote_quoted} {repo_quoted}
            cd {repo_quoted} || exit
            echo "puppy doggy" > index.html
            git add .
            git commit -m "Initial commit"
            git push origin main
            "#
        ))?;
        Ok(repo)
    }

    /// The path of the bare remote created by [`GitPublish::setup_repo_with_remote`].
    pub fn remote_path(&self, path: &str) -> Utf8PathBuf {
        self.path(&format!("{path}-remote.git"))
    }

    /// A [`Git`] for the bare remote created by [`GitPublish::setup_repo_with_remote`].
    #[track_caller]
    pub fn remote_git(&self, path: &str) -> Git {
        self.git(&format!("{path}-remote.git"))
    }

    pub fn rev_parse(&self, directory: &str, commitish: &str) -> miette::Result<String> {
        Ok(self
            .git(directory)
            .command()
            .args(["rev-parse", commitish])
            .output_checked_utf8()?
            .stdout
            .trim()
            .to_owned())
    }

    pub fn current_branch_in(&self, directory: &str) -> miette::Result<String> {
        self.git(directory)
            .branch()
            .current()?
            .ok_or_else(|| miette!("HEAD is detached in {directory}"))
    }

    #[track_caller]
    pub fn assert_contents(&self, contents: &[(&str, Expect)]) {
        for (path, expect) in contents {
            let actual = fs::read_to_string(self.path(path)).unwrap();
            expect.assert_eq(&actual);
        }
    }

    /// Assert that `directory` has no staging directory under it.
    #[track_caller]
    pub fn assert_no_staging(&self, directory: &str) {
        let staging = self.path(directory).join(STAGING_DIR_NAME);
        assert!(
            !staging.exists(),
            "Staging directory should not exist: {staging}"
        );
    }
}
