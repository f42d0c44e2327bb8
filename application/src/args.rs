//! [`Args`] definitions.

use std::path::PathBuf;

use clap::Parser;

/// GraphQL server of the real estate agency website.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the content JSON file.
    ///
    /// Forces the `json` content source, overriding the configured one.
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
