//! Inspect command: show where every resolved property comes from.

use crate::cli::common::{read_screen, to_json, CliResult};
use crate::theme::{resolve_with_sources, ResolvedProperty};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Show each resolved property with the tier that supplied it
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to screen payload JSON (`-` for stdin)
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let screen = read_screen(&self.payload)?;

        // Nothing is applied without tenant branding, so nothing to attribute
        let properties = if screen.branding().is_some() {
            resolve_with_sources(&screen)
        } else {
            Vec::new()
        };

        if self.json {
            println!("{}", to_json(&properties)?);
        } else {
            print_table(&properties);
        }

        Ok(())
    }
}

fn print_table(properties: &[ResolvedProperty]) {
    if properties.is_empty() {
        println!("No branding properties resolved.");
        return;
    }

    let width = properties.iter().map(|p| p.name.len()).max().unwrap_or(0);

    println!("{} properties:", properties.len());
    for property in properties {
        let mut line = format!(
            "  {:width$}  {}  [{}]",
            property.name, property.value, property.tier
        );
        if !property.shadowed.is_empty() {
            let shadowed: Vec<&str> = property.shadowed.iter().map(|tier| tier.name()).collect();
            let _ = write!(line, " overrides {}", shadowed.join(", "));
        }
        println!("{line}");
    }
}
