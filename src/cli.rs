use camino::Utf8PathBuf;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

/// Publish a directory to a branch of a git remote.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100, disable_help_subcommand = true)]
pub struct Cli {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GIT_PUBLISH_LOG")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Copy a directory into a staging checkout, create a branch there, and force-push it to
    /// `origin`.
    ///
    /// The `origin` remote is whatever is configured in the directory's own git metadata; the
    /// `.git` directory is copied into the staging checkout along with everything else.
    Publish(PublishArgs),
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::shells::Shell,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Directory to publish.
    #[arg(short = 'd', long = "directory")]
    pub directory: Utf8PathBuf,

    /// Branch to publish to.
    #[arg(short = 'b', long = "branch")]
    pub branch: String,
}
