//! Command-line interface definition for assetpack.
//!
//! # Command Structure
//!
//! - `assetpack print` - Compose the build configuration and emit it as JSON
//! - `assetpack check` - Validate the configuration and its copy sources
//! - `assetpack route` - Show which rule applies to the given files
//! - `assetpack schema` - Emit the JSON schema of the configuration

mod commands;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use assetpack_config::Mode;

pub use commands::{Command, PrintArgs, RouteArgs};

/// assetpack - build configuration composer for a static web-asset bundler
#[derive(Parser, Debug)]
#[command(
    name = "assetpack",
    version,
    about = "Compose bundler configuration for development or production",
    long_about = "assetpack decides which loader chains apply to each file type and which\n\
                  plugins take part in a build, based on a single mode signal.\n\
                  The mode is read from NODE_ENV unless --mode is given."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Build mode; overrides the NODE_ENV signal
    #[arg(long, global = true, value_enum, value_name = "MODE")]
    pub mode: Option<ModeArg>,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    #[value(name = "development")]
    Development,

    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
