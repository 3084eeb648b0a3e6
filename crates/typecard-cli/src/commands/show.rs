//! Card display command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::Result;
use clap::Args;
use console::style;
use tracing::info;
use typecard_core::{printer, Declaration, ReferenceCard, ToJson};

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry to show; the whole card when omitted
    #[arg(long)]
    pub entry: Option<String>,

    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the show command
pub fn show_command(args: ShowArgs, config: &CliConfig) -> Result<()> {
    let card = ReferenceCard::variables();
    let format = args.format.unwrap_or(config.output.format);

    match &args.entry {
        Some(name) => {
            let entry = card.lookup(name)?;
            info!("showing entry {}", name);
            match format {
                OutputFormat::Json => print_json(&entry.to_json()?)?,
                OutputFormat::Text => print_entry(entry),
            }
        }
        None => {
            info!("showing the {} card", card.title());
            match format {
                OutputFormat::Json => print_json(&card.to_json()?)?,
                OutputFormat::Text => print!("{}", printer::render_card(&card)?),
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &Declaration) {
    println!(
        "{} {} {}",
        style(&entry.name).cyan().bold(),
        style(entry.kind.name()).magenta(),
        style(format!("[{}]", entry.storage)).dim()
    );
    if let Some(lit) = entry.initializer() {
        println!("  literal: {}", style(lit.rendered()).yellow());
    }
    match entry.effective_value() {
        Ok(value) => println!("  value: {}", style(value.to_string()).cyan()),
        Err(e) => println!("  value: {}", style(format!("({})", e)).red()),
    }
    if let Some(note) = &entry.note {
        println!("  note: {}", style(note).dim());
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
