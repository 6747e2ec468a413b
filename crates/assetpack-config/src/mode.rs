//! Build mode resolution.
//!
//! The mode is read once at the program's entry point and passed by value to
//! every builder afterwards. Nothing else in this crate touches the process
//! environment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Environment variable carrying the mode signal.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

const DEVELOPMENT: &str = "development";

/// Two-valued build context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Fail-safe default when the signal is missing or unrecognized
    #[default]
    Production,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => DEVELOPMENT,
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view over the resolved mode.
///
/// # Example
///
/// ```
/// use assetpack_config::ModeContext;
///
/// let ctx = ModeContext::from_signal(Some("development"));
/// assert!(ctx.is_development());
///
/// let ctx = ModeContext::from_signal(None);
/// assert!(ctx.is_production());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeContext {
    mode: Mode,
}

impl ModeContext {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Resolve the mode from a raw signal value.
    ///
    /// Only the exact literal `"development"` selects development; anything
    /// else, including absence, resolves to production.
    pub fn from_signal(signal: Option<&str>) -> Self {
        let mode = match signal {
            Some(DEVELOPMENT) => Mode::Development,
            _ => Mode::Production,
        };
        Self { mode }
    }

    /// Read [`MODE_ENV_VAR`] from the process environment.
    ///
    /// Call this once, at startup. A value that is not valid unicode counts
    /// as unrecognized.
    pub fn from_env() -> Self {
        let signal = std::env::var(MODE_ENV_VAR).ok();
        let ctx = Self::from_signal(signal.as_deref());
        tracing::debug!(
            signal = signal.as_deref().unwrap_or("<unset>"),
            mode = %ctx.mode,
            "resolved build mode"
        );
        ctx
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    pub fn is_production(&self) -> bool {
        !self.is_development()
    }
}

impl From<Mode> for ModeContext {
    fn from(mode: Mode) -> Self {
        Self::new(mode)
    }
}
