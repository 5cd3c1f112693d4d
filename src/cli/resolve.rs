//! Resolve command: apply a payload and print the resulting properties.

use crate::cli::common::{describe, load_config, read_screen, CliError, CliResult};
use crate::config::{validate_selector, OutputFormat};
use crate::export::Stylesheet;
use crate::theme::{apply_theme, ApplyOutcome, ThemeCache};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Resolve a branding payload into CSS custom properties
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to screen payload JSON (`-` for stdin)
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Output format (css or json); defaults to the configured format
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Selector wrapping CSS output; defaults to the configured selector
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let format = match &self.format {
            Some(format) => format
                .parse::<OutputFormat>()
                .map_err(|e| CliError::usage(e.to_string()))?,
            None => config.output.format,
        };

        let selector = self.selector.as_deref().unwrap_or(&config.output.selector);
        validate_selector(selector).map_err(|e| CliError::usage(e.to_string()))?;

        let screen = read_screen(&self.payload)?;

        let mut cache = ThemeCache::new();
        let mut sheet = Stylesheet::new();
        match apply_theme(&screen, &mut cache, &mut sheet) {
            ApplyOutcome::NoBranding => info!("Payload has no branding"),
            ApplyOutcome::Unchanged => info!("Branding resolved to no properties"),
            ApplyOutcome::Applied { written } => info!(written, "Resolved theme properties"),
        }

        let rendered = match format {
            OutputFormat::Css => sheet.to_css(selector.trim()),
            OutputFormat::Json => {
                let json = sheet.to_json().map_err(|e| CliError::io(describe(&e)))?;
                format!("{json}\n")
            }
        };

        if let Some(path) = &self.output {
            std::fs::write(path, rendered).map_err(|e| {
                CliError::io(format!("Failed to write output file {}: {e}", path.display()))
            })?;
            println!("Wrote {} properties to {}", sheet.properties().len(), path.display());
        } else {
            print!("{rendered}");
        }

        Ok(())
    }
}
