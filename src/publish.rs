use camino::Utf8PathBuf;
use miette::Context;
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing::instrument;
use which::which_global;

use crate::cli::PublishArgs;
use crate::copy_dir::copy_dir;
use crate::git::Git;
use crate::staging::StagingDir;
use crate::utf8absolutize::Utf8Absolutize;

/// A plan for publishing a directory to a branch on the `origin` remote.
#[derive(Debug, Clone)]
pub struct PublishPlan {
    source: Utf8PathBuf,
    branch: String,
}

impl PublishPlan {
    #[instrument(level = "trace")]
    pub fn new(args: &PublishArgs) -> miette::Result<Self> {
        which_global("git")
            .into_diagnostic()
            .wrap_err("Failed to find `git` executable")?;

        let source = args
            .directory
            .absolutize()
            .into_diagnostic()?
            .into_owned();

        Ok(Self {
            source,
            branch: args.branch.clone(),
        })
    }

    /// Copy the source into a staging checkout, create the branch there, and force-push it to
    /// `origin`.
    ///
    /// The staging directory is removed when the plan finishes, whether or not every stage
    /// succeeded.
    #[instrument(level = "trace")]
    pub fn execute(self) -> miette::Result<()> {
        let staging = StagingDir::create(&self.source)?;
        copy_dir(&self.source, staging.as_path())?;

        let git = Git::from_path(staging.as_path());
        git.branch().checkout_new(&self.branch)?;
        git.remote().force_push("origin", &self.branch)?;

        tracing::info!(
            "Published {} to {}",
            self.branch
                .if_supports_color(Stream::Stdout, |text| text.cyan()),
            "origin".if_supports_color(Stream::Stdout, |text| text.cyan()),
        );

        Ok(())
    }
}
