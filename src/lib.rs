//! `git-publish` publishes the contents of a directory to a branch of a git remote.
//!
//! The `git-publish` Rust library is a convenience and shouldn't be depended on. I do not
//! consider this to be a public/stable API and will make breaking changes here in minor version
//! bumps.

mod app;
mod cli;
mod config;
mod copy_dir;
pub mod fs;
mod git;
mod install_tracing;
mod publish;
mod staging;
mod utf8absolutize;

pub use app::App;
pub use cli::PublishArgs;
pub use config::Config;
pub use copy_dir::copy_dir;
pub use git::Git;
pub use git::GitBranch;
pub use git::GitRemote;
pub use publish::PublishPlan;
pub use staging::StagingDir;
pub use staging::STAGING_DIR_NAME;
