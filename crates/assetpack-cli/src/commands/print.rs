//! Print command implementation.

use std::io::Write;

use crate::cli::PrintArgs;
use crate::commands::Session;
use crate::error::Result;

/// Compose the configuration and write it to `out` as JSON.
pub fn execute(session: &Session, args: &PrintArgs, out: &mut impl Write) -> Result<()> {
    let config = session.compose();
    let json = config.to_json(args.pretty)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetpack_config::{Mode, ModeContext, ToolSettings};
    use serde_json::Value;

    fn run(mode: Mode, pretty: bool) -> String {
        let session = Session::new(ModeContext::new(mode), ToolSettings::default());
        let mut out = Vec::new();
        execute(&session, &PrintArgs { pretty }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_single_json_document() {
        let output = run(Mode::Production, false);
        assert_eq!(output.lines().count(), 1);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "production");
        assert_eq!(value["optimization"]["minimizer"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_pretty_output_spans_lines() {
        let output = run(Mode::Development, true);
        assert!(output.lines().count() > 1);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["devtool"], "source-map");
    }
}
