//! parse command - Parse a repository reference
//!
//! Prints `owner/name` (or JSON with `--json`, which also carries the web
//! and clone URLs under the configured `web_base`). Rejected input exits
//! with status 1; `--explain` adds the rejection reason.

use crate::cli::Context;
use crate::core::reference::{parse_detailed, ParseOptions};
use crate::ui::output;
use anyhow::{bail, Result};
use serde_json::json;

/// Parse a repository reference.
pub fn parse(ctx: &Context, input: &str, options: ParseOptions, explain: bool) -> Result<()> {
    output::debug(
        format!("Parsing {:?} (whitespace: {})", input, options.whitespace.name()),
        ctx.verbosity,
    );

    let result = parse_detailed(input, &options);

    if ctx.json {
        let value = match &result {
            Ok(reference) => json!({
                "input": input,
                "reference": reference,
                "web_url": reference.web_url(ctx.config.web_base()),
                "clone_url": reference.clone_url(ctx.config.web_base()),
            }),
            Err(reason) => json!({
                "input": input,
                "reference": null,
                "reason": reason.to_string(),
            }),
        };
        output::json(&value)?;
    }

    match result {
        Ok(reference) => {
            if !ctx.json {
                output::print(&reference, ctx.verbosity);
            }
            Ok(())
        }
        Err(reason) => {
            output::debug(format!("Rejected: {}", reason), ctx.verbosity);
            if explain {
                bail!("not a repository reference: {:?} ({})", input, reason)
            } else {
                bail!("not a repository reference: {:?}", input)
            }
        }
    }
}
