//! Quay CLI - build descriptor evaluator

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quay::core::errors::ConfigError;
use quay::core::manifest::ManifestParseError;
use quay::util::diagnostic::emit;
use quay::GlobalContext;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        report(e, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("quay=debug")
    } else {
        EnvFilter::new("quay=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(cli.verbose);
    ctx.set_color(!cli.no_color);

    let manifest_path = cli.manifest_path.as_deref();

    match cli.command {
        Commands::Init(args) => commands::init::execute(&ctx, args),
        Commands::Evaluate(args) => commands::evaluate::execute(&ctx, manifest_path, args),
        Commands::Requires(args) => commands::requires::execute(&ctx, manifest_path, args),
        Commands::Options(args) => commands::options::execute(&ctx, manifest_path, args),
        Commands::Generate(args) => commands::generate::execute(&ctx, manifest_path, args),
        Commands::Toolchain(args) => commands::toolchain::execute(&ctx, manifest_path, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn report(err: anyhow::Error, color: bool) {
    let err = match err.downcast::<ManifestParseError>() {
        Ok(parse) => {
            eprintln!("{:?}", miette::Report::new(parse));
            return;
        }
        Err(err) => err,
    };

    match err.downcast_ref::<ConfigError>() {
        Some(config) => {
            let mut diag = config.to_diagnostic();
            // Keep outer context such as the manifest path
            for cause in err.chain().take_while(|c| c.downcast_ref::<ConfigError>().is_none()) {
                diag = diag.with_context(cause.to_string());
            }
            emit(&diag, color);
        }
        None => eprintln!("error: {:#}", err),
    }
}
