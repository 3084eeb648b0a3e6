//! Scalar kind listing command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::Result;
use clap::Args;
use serde_json::json;
use typecard_core::{printer, ScalarKind, ToJson};

/// Arguments for the kinds command
#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Execute the kinds command
pub fn kinds_command(args: KindsArgs, config: &CliConfig) -> Result<()> {
    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => print!("{}", printer::render_kinds()?),
        OutputFormat::Json => {
            let kinds = ScalarKind::ALL
                .iter()
                .map(|kind| {
                    Ok(json!({
                        "kind": kind.name(),
                        "width": kind.bit_width(),
                        "signed": kind.is_signed(),
                        "integer": kind.is_integer(),
                        "float": kind.is_float(),
                        "default": kind.default_value().to_json()?,
                        "description": kind.describe(),
                    }))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&kinds)?);
        }
    }

    Ok(())
}
