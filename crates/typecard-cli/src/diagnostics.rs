//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::Diagnostic;
use thiserror::Error;
use typecard_core::error::Error as CoreError;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    // Install miette as the global error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// Enhanced diagnostic error for the typecard CLI
#[derive(Error, Debug, Diagnostic)]
pub enum CardDiagnostic {
    #[error("no entry named `{name}`")]
    #[diagnostic(
        code(typecard::unknown_entry),
        help("run `typecard show` to list every entry on the card")
    )]
    UnknownEntry { name: String },

    #[error("`{name}` is read-only")]
    #[diagnostic(
        code(typecard::read_only),
        help("read-only entries take exactly one assignment, at initialization")
    )]
    ReadOnlyEntry { name: String },

    #[error("kind mismatch: {message}")]
    #[diagnostic(
        code(typecard::kind_mismatch),
        help("a value can only be stored in an entry of its own kind")
    )]
    KindMismatch { message: String },

    #[error("local `{name}` has no value yet")]
    #[diagnostic(
        code(typecard::uninitialized_local),
        help("locals are never defaulted; initialize them before reading")
    )]
    UninitializedLocal { name: String },
}

/// Helper function to create an unknown entry diagnostic
pub fn unknown_entry(name: impl Into<String>) -> CardDiagnostic {
    CardDiagnostic::UnknownEntry { name: name.into() }
}

/// Helper function to create a read-only diagnostic
pub fn read_only_entry(name: impl Into<String>) -> CardDiagnostic {
    CardDiagnostic::ReadOnlyEntry { name: name.into() }
}

/// Helper function to create a kind mismatch diagnostic
pub fn kind_mismatch(message: impl Into<String>) -> CardDiagnostic {
    CardDiagnostic::KindMismatch {
        message: message.into(),
    }
}

/// Upgrade a card error to a diagnostic carrying remediation help.
/// Errors without a dedicated diagnostic return None and fall back to
/// plain logging.
pub fn card_diagnostic(err: &CoreError) -> Option<CardDiagnostic> {
    match err {
        CoreError::UnknownEntry(name) => Some(unknown_entry(name.clone())),
        CoreError::ReadOnlyAssignment(name) => Some(read_only_entry(name.clone())),
        CoreError::TypeMismatch { .. } => Some(kind_mismatch(err.to_string())),
        CoreError::UninitializedLocal(name) => Some(CardDiagnostic::UninitializedLocal {
            name: name.clone(),
        }),
        _ => None,
    }
}

/// Render a CLI error through miette, returning whether it was rendered
pub fn render_cli_error(err: &CliError) -> bool {
    match err {
        CliError::Card(core) => match card_diagnostic(core) {
            Some(diag) => {
                eprintln!("{:?}", miette::Report::new(diag));
                true
            }
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_entry_creation() {
        let error = unknown_entry("missing");

        match error {
            CardDiagnostic::UnknownEntry { name } => assert_eq!(name, "missing"),
            _ => panic!("Expected UnknownEntry"),
        }
    }

    #[test]
    fn test_card_errors_map_to_diagnostics() {
        let err = CoreError::UnknownEntry("missing".to_string());
        assert!(matches!(
            card_diagnostic(&err),
            Some(CardDiagnostic::UnknownEntry { .. })
        ));

        let err = CoreError::ReadOnlyAssignment("yet_another_number".to_string());
        assert!(matches!(
            card_diagnostic(&err),
            Some(CardDiagnostic::ReadOnlyEntry { .. })
        ));

        let err = CoreError::Generic("anything else".to_string());
        assert!(card_diagnostic(&err).is_none());
    }

    #[test]
    fn test_rendered_errors_report_as_handled() {
        let err = CliError::Card(CoreError::UnknownEntry("missing".to_string()));
        assert!(render_cli_error(&err));

        let err = CliError::InvalidInput("bad flag".to_string());
        assert!(!render_cli_error(&err));
    }
}
