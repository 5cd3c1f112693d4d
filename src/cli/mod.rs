//! CLI command handlers.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps failures to exit codes.

pub mod captcha;
pub mod common;
pub mod config;
pub mod inspect;
pub mod resolve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use captcha::CaptchaThemeArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;
