//! assetpack CLI - compose static web-asset bundler configuration.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing with clap
//! - [`commands`] - `print`, `check`, `route` and `schema`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr
//!
//! Composition itself lives in `assetpack-config`; this crate only resolves
//! the mode once, loads settings and writes results.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
