//! Literal spelling command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::Result;
use clap::{Args, ValueEnum};
use tracing::info;
use typecard_core::{printer, Literal, Notation, ToJson};

/// Arguments for the literal command
#[derive(Args, Debug)]
pub struct LiteralArgs {
    /// Integer to spell out (the configured default when omitted)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<i64>,

    /// Notation to render; all four when omitted
    #[arg(long, value_enum, conflicts_with = "all")]
    pub notation: Option<NotationArg>,

    /// Render every notation
    #[arg(long)]
    pub all: bool,

    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NotationArg {
    Decimal,
    Hex,
    Binary,
    Grouped,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Decimal => Notation::Decimal,
            NotationArg::Hex => Notation::Hex,
            NotationArg::Binary => Notation::Binary,
            NotationArg::Grouped => Notation::Grouped,
        }
    }
}

/// Execute the literal command
pub fn literal_command(args: LiteralArgs, config: &CliConfig) -> Result<()> {
    let value = args.value.unwrap_or(config.literal.default_value);
    let format = args.format.unwrap_or(config.output.format);
    info!("spelling out {}", value);

    match args.notation {
        Some(notation) => {
            let literal = Literal::with_notation(value, notation.into());
            match format {
                OutputFormat::Text => println!("{}", literal.rendered()),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&literal.to_json()?)?)
                }
            }
        }
        None => match format {
            OutputFormat::Text => print!("{}", printer::render_notations(value)?),
            OutputFormat::Json => {
                let spellings = Notation::ALL
                    .iter()
                    .map(|notation| Literal::with_notation(value, *notation).to_json())
                    .collect::<typecard_core::Result<Vec<_>>>()?;
                println!("{}", serde_json::to_string_pretty(&spellings)?);
            }
        },
    }

    Ok(())
}
