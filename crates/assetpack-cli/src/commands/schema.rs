//! Schema command implementation.

use std::io::Write;

use assetpack_config::BuildConfig;

use crate::error::Result;

/// Write the JSON schema of [`BuildConfig`] to `out`.
pub fn execute(out: &mut impl Write) -> Result<()> {
    let schema = BuildConfig::json_schema();
    writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}
