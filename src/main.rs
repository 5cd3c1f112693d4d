//! ultheme - resolve Universal Login branding payloads into CSS custom properties.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ultheme::cli::{
    CaptchaThemeArgs, CliResult, ConfigArgs, ExitCode, InspectArgs, ResolveArgs, ValidateArgs,
};
use ultheme::constants::APP_BINARY_NAME;

/// Resolve Universal Login branding payloads into CSS custom properties
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a payload into CSS custom properties
    Resolve(ResolveArgs),
    /// Show each resolved property with the tier that supplied it
    Inspect(InspectArgs),
    /// Check a payload for wrong-typed and suspicious values
    Validate(ValidateArgs),
    /// Resolve the captcha widget theme
    CaptchaTheme(CaptchaThemeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Resolve(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::CaptchaTheme(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                ExitCode::Usage
            } else {
                // --help and --version
                ExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}
