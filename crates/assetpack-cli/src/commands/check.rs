//! Check command implementation.
//!
//! Validates the composed configuration without emitting it.

use assetpack_config::{ConfigValidator, FsValidator};

use crate::commands::Session;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Compose the configuration for the resolved mode
/// 2. Check structural invariants (plugin ordering, extraction wiring,
///    minimizers, routing patterns)
/// 3. Check that the copy sources exist under the project root
///
/// # Errors
///
/// Returns the first validation failure.
pub fn execute(session: &Session) -> Result<()> {
    let layout = session.layout();
    ui::info(&format!(
        "Checking {} configuration in {}",
        session.ctx.mode(),
        layout.root().display()
    ));

    let config = session.compose();
    FsValidator::new(&layout).validate(&config)?;

    ui::success(&format!(
        "{} rules and {} plugins are valid",
        config.rules.rules().len(),
        config.plugins.len()
    ));
    Ok(())
}
