//! Route command implementation.
//!
//! Prints one line per file: the path, the rule class and the loader chain
//! in declaration order, joined with `!` the way inline loader requests are
//! written. Files no rule matches are reported as `unrouted`.

use std::io::Write;

use assetpack_config::TransformChain;

use crate::cli::RouteArgs;
use crate::commands::Session;
use crate::error::Result;
use crate::ui;

/// Resolve each file against the routing table and write the result to `out`.
pub fn execute(session: &Session, args: &RouteArgs, out: &mut impl Write) -> Result<()> {
    let config = session.compose();
    let matcher = config.rules.matcher()?;

    let mut unrouted = 0usize;
    for file in &args.files {
        match matcher.route(file) {
            Some(rule) => writeln!(
                out,
                "{}\t{}\t{}",
                file.display(),
                rule.class,
                loader_request(&rule.chain)
            )?,
            None => {
                unrouted += 1;
                writeln!(out, "{}\tunrouted", file.display())?;
            }
        }
    }

    if unrouted > 0 {
        ui::warning(&format!("{unrouted} file(s) matched no routing rule"));
    }

    Ok(())
}

fn loader_request(chain: &TransformChain) -> String {
    chain.identifiers().join("!")
}
