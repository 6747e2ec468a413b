use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available assetpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the build configuration and print it as JSON
    ///
    /// The output is the complete configuration consumed by the bundler
    /// host: routing rules, plugins, optimization policy and output naming.
    Print(PrintArgs),

    /// Validate the composed configuration
    ///
    /// Checks structural invariants and that the copy sources (favicon and
    /// assets directory) exist under the project root.
    Check,

    /// Show which routing rule applies to each file
    ///
    /// Examples:
    ///   assetpack route src/styles/main.scss
    ///   assetpack route src/index.ts node_modules/lib/index.js
    Route(RouteArgs),

    /// Print the JSON schema of the emitted configuration
    Schema,
}

impl Command {
    /// Whether the command reads `assetpack.toml` and `ASSETPACK_*` settings.
    pub fn needs_settings(&self) -> bool {
        !matches!(self, Command::Schema)
    }
}

/// Arguments for the print command
#[derive(Args, Debug, Default)]
pub struct PrintArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Arguments for the route command
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Files to route
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
