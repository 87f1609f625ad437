use calm_io::stdout;
use clap::CommandFactory;
use miette::IntoDiagnostic;

use crate::cli;
use crate::config::Config;
use crate::publish::PublishPlan;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(self) -> miette::Result<()> {
        match &self.config.cli.command {
            cli::Command::Completions { shell } => {
                let mut clap_command = cli::Cli::command();
                clap_complete::generate(
                    *shell,
                    &mut clap_command,
                    "git-publish",
                    &mut std::io::stdout(),
                );
            }
            cli::Command::Publish(args) => {
                // Failures past argument parsing are reported but don't change the exit
                // status.
                if let Err(report) = PublishPlan::new(args).and_then(PublishPlan::execute) {
                    stdout!("{:?}", report).into_diagnostic()?;
                }
            }
        }

        Ok(())
    }
}
