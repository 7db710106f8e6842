//! High-level operations backing the CLI commands.

pub mod evaluate;
pub mod generate;
pub mod init;

pub use evaluate::{evaluate, resolve_settings, Evaluation};
pub use generate::{generate, GenerateOutcome};
pub use init::{init, InitOptions};
