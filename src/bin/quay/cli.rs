//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Quay - evaluate a build descriptor into CMake toolchain inputs
#[derive(Parser)]
#[command(name = "quay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to Quay.toml (defaults to searching upward from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a Quay.toml with the default descriptor
    Init(InitArgs),

    /// Print the toolchain variables for a target
    Evaluate(EvaluateArgs),

    /// List pinned dependencies and build tools
    Requires(RequiresArgs),

    /// Show resolved package options for a target
    Options(OptionsArgs),

    /// Write the toolchain file and dependency artifact
    Generate(GenerateArgs),

    /// Show the compilers a target would use
    Toolchain(ToolchainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings shared by commands that evaluate the descriptor.
#[derive(Args)]
pub struct SettingsArgs {
    /// Target architecture (e.g. x86_64, armv8, armv7hf)
    #[arg(long, env = "QUAY_ARCH")]
    pub arch: Option<String>,

    /// Build type (Debug, Release, RelWithDebInfo, MinSizeRel)
    #[arg(long, env = "QUAY_BUILD_TYPE")]
    pub build_type: Option<String>,

    /// Override a package option, e.g. `opus:with_neon=true`
    #[arg(short = 'o', long = "option", value_name = "PKG:OPT=VALUE")]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Package name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `NAME=value` lines
    Text,
    /// JSON object
    Json,
    /// CMake toolchain file
    Cmake,
}

#[derive(Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RequiresArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output directory (defaults to build/<BuildType>/generators)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ToolchainArgs {
    /// Target architecture (e.g. x86_64, armv8, armv7hf)
    #[arg(long, env = "QUAY_ARCH")]
    pub arch: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
