//! `quay requires` command

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::RequiresArgs;
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest_path: Option<&Path>, args: RequiresArgs) -> Result<()> {
    let ws = super::load_workspace(ctx, manifest_path)?;
    let descriptor = ws.descriptor();

    if args.json {
        let refs = |deps: &[quay::Dependency]| -> Vec<String> {
            deps.iter().map(|d| d.reference()).collect()
        };
        let doc = json!({
            "requires": refs(descriptor.requires()),
            "tool_requires": refs(descriptor.tool_requires()),
        });
        let out = serde_json::to_string_pretty(&doc).context("failed to serialize requirements")?;
        println!("{}", out);
        return Ok(());
    }

    println!("Requires:");
    for dep in descriptor.requires() {
        println!("  {}", dep);
    }

    if !descriptor.tool_requires().is_empty() {
        println!();
        println!("Tool requires:");
        for dep in descriptor.tool_requires() {
            println!("  {}", dep);
        }
    }

    Ok(())
}
