//! `quay evaluate` command

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{EvaluateArgs, OutputFormat};
use quay::builder::cmake::render_toolchain_file;
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest_path: Option<&Path>, args: EvaluateArgs) -> Result<()> {
    let (_, evaluation) = super::load_evaluation(ctx, manifest_path, &args.settings)?;

    match args.format {
        OutputFormat::Text => {
            if evaluation.toolchain.is_empty() {
                eprintln!(
                    "No toolchain variables for `{}` (host build)",
                    evaluation.settings.arch
                );
            }
            for (name, value) in evaluation.toolchain.iter() {
                println!("{}={}", name, value);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&evaluation.toolchain)
                .context("failed to serialize toolchain variables")?;
            println!("{}", json);
        }
        OutputFormat::Cmake => {
            print!(
                "{}",
                render_toolchain_file(&evaluation.toolchain, &evaluation.settings)
            );
        }
    }

    Ok(())
}
