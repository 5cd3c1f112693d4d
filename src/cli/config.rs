//! Configuration management CLI commands.

use crate::cli::common::{describe, load_config, to_json, CliError, CliResult};
use crate::config::{Config, OutputFormat};
use crate::constants::APP_NAME;
use crate::theme::ThemeMode;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default output format (css or json)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Default selector for CSS output
    #[arg(long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Default captcha theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    captcha_theme: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            println!("{}", to_json(&config)?);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.format.is_none() && self.selector.is_none() && self.captcha_theme.is_none() {
            return Err(CliError::usage(
                "At least one configuration option must be specified: --format, --selector, or --captcha-theme",
            ));
        }

        let mut config = load_config()?;

        if let Some(format) = &self.format {
            config.output.format = format
                .parse::<OutputFormat>()
                .map_err(|e| CliError::usage(e.to_string()))?;
        }

        if let Some(selector) = &self.selector {
            config
                .set_selector(selector)
                .map_err(|e| CliError::usage(e.to_string()))?;
        }

        if let Some(mode) = &self.captcha_theme {
            config.captcha.theme = mode
                .parse::<ThemeMode>()
                .map_err(|e| CliError::usage(e.to_string()))?;
        }

        config.save().map_err(|e| {
            CliError::io(format!("Failed to save configuration: {}", describe(&e)))
        })?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Output:");
    println!("  Format:   {}", config.output.format);
    println!("  Selector: {}", config.output.selector);
    println!();

    println!("Captcha:");
    println!("  Theme: {}", config.captcha.theme);
}
