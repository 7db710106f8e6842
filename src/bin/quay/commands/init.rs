//! `quay init` command

use anyhow::Result;

use crate::cli::InitArgs;
use quay::ops::{init, InitOptions};
use quay::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => ctx.cwd().join(path),
        None => ctx.cwd().to_path_buf(),
    };

    let manifest_path = init(&InitOptions {
        path,
        name: args.name,
    })?;

    println!("Created {}", manifest_path.display());
    Ok(())
}
