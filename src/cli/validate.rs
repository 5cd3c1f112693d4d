//! Validation command for screen payloads.

use crate::cli::common::{read_screen, to_json, CliError, CliResult};
use crate::validator::{validate_screen, PayloadIssue};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a branding payload for wrong-typed and suspicious values
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to screen payload JSON (`-` for stdin)
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize, Debug)]
struct ValidationResponse<'a> {
    valid: bool,
    errors: &'a [PayloadIssue],
    warnings: &'a [PayloadIssue],
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let screen = read_screen(&self.payload)?;
        let report = validate_screen(&screen);

        if self.json {
            let response = ValidationResponse {
                valid: report.is_valid(),
                errors: &report.errors,
                warnings: &report.warnings,
            };
            println!("{}", to_json(&response)?);
        } else {
            if report.is_valid() {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }
            if !report.is_clean() {
                println!();
                print!("{}", report.format_message());
            }
        }

        if !report.is_valid() {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
