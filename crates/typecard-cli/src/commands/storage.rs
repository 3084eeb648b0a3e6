//! Storage class listing command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::Result;
use clap::Args;
use serde_json::json;
use typecard_core::{printer, StorageClass};

/// Arguments for the storage command
#[derive(Args, Debug)]
pub struct StorageArgs {
    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the storage command
pub fn storage_command(args: StorageArgs, config: &CliConfig) -> Result<()> {
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => print!("{}", printer::render_storage_classes()?),
        OutputFormat::Json => {
            let classes: Vec<_> = StorageClass::ALL
                .iter()
                .map(|class| {
                    json!({
                        "storage": class.name(),
                        "shared": class.is_shared(),
                        "reassignable": class.is_reassignable(),
                        "auto_initialized": class.auto_initialized(),
                        "description": class.describe(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&classes)?);
        }
    }

    Ok(())
}
