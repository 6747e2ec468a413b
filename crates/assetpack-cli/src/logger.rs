//! Logging setup for the assetpack CLI.
//!
//! Logs always go to stderr so that stdout carries only command output
//! (configuration JSON, schema, routing tables).
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: debug for assetpack crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. `log_level` from the settings file
//! 5. warn for assetpack crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 3] = ["assetpack", "assetpack_cli", "assetpack_config"];

/// Build the filter directive string for one level across assetpack crates.
pub fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn select_filter(verbose: bool, quiet: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new(directives("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(directives(configured.unwrap_or("warn")))
        })
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, configured: Option<&str>) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(select_filter(verbose, quiet, configured))
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// terminal attached to stderr decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_every_crate() {
        assert_eq!(
            directives("debug"),
            "assetpack=debug,assetpack_cli=debug,assetpack_config=debug"
        );
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        let filter = select_filter(true, false, Some("error"));
        assert!(filter.to_string().contains("assetpack_config=debug"));
    }

    #[test]
    fn test_quiet_filter_is_error() {
        let filter = select_filter(false, true, None);
        assert!(filter.to_string().contains("assetpack=error"));
    }
}
