//! Shell completions command implementation

use crate::cli::CliConfig;
use crate::Result;
use clap::{Args, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
pub fn completions_command(args: CompletionsArgs, _config: &CliConfig) -> Result<()> {
    // Define the CLI structure for completion generation
    let mut cmd = Command::new("typecard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scalar type reference cards: kinds, defaults, literals, storage");

    generate(args.shell, &mut cmd, "typecard", &mut io::stdout());

    Ok(())
}
