use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::Cli;
use crate::install_tracing::install_tracing;

/// Command-line options, applied at startup.
///
/// There is no configuration file; everything comes from the command line.
#[derive(Debug)]
pub struct Config {
    /// Command-line options.
    pub cli: Cli,
}

impl Config {
    pub fn new() -> miette::Result<Self> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(error) => match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
                _ => {
                    // Usage errors exit with status 1, before any side effects.
                    let _ = error.print();
                    std::process::exit(1);
                }
            },
        };
        install_tracing(&cli.log)?;
        Ok(Self { cli })
    }
}
