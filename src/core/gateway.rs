//! Import/export gateway
//!
//! Bridges the typed document and its external JSON representation. The
//! gateway never mutates the store: callers apply a successful import through
//! [`PortfolioStore::replace`](super::store::PortfolioStore::replace).

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::schema::Portfolio;
use super::validate::{self, Violation};

/// Why an import failed. Every variant leaves the prior store state untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not well-formed JSON; carries the parser's own message.
    #[error("Invalid JSON: {0}")]
    Syntax(String),
    /// Well-formed but schema-violating; every violation is listed.
    #[error("Validation error:\n{}", format_violations(.0))]
    Validation(Vec<Violation>),
    /// Anything else; a bug signal rather than a user-actionable state.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a document as pretty-printed JSON with stable field order,
/// suitable for re-import and human diffing.
pub fn export_text(portfolio: &Portfolio) -> String {
    serde_json::to_string_pretty(portfolio).expect("portfolio serialization is infallible")
}

/// Parse and validate external text as a portfolio document.
pub fn import_text(text: &str) -> Result<Portfolio, ImportError> {
    let candidate: Value =
        serde_json::from_str(text).map_err(|e| ImportError::Syntax(e.to_string()))?;
    validate::validate(&candidate).map_err(ImportError::Validation)
}

/// Read and validate a portfolio file from disk.
pub fn read_portfolio_file(path: &Path) -> Result<Portfolio, ImportError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ImportError::Unknown(format!("Failed to read {}: {e}", path.display())))?;
    import_text(&text)
}

/// Write a portfolio file to disk.
pub fn write_portfolio_file(path: &Path, portfolio: &Portfolio) -> Result<(), ImportError> {
    std::fs::write(path, export_text(portfolio))
        .map_err(|e| ImportError::Unknown(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_then_import_reproduces_the_document() {
        let portfolio = Portfolio::default();
        let text = export_text(&portfolio);
        let imported = import_text(&text).unwrap();
        assert_eq!(imported, portfolio);
    }

    #[test]
    fn exported_text_is_reimportable_byte_for_byte() {
        let portfolio = Portfolio::default();
        let text = export_text(&portfolio);
        let reexported = export_text(&import_text(&text).unwrap());
        assert_eq!(reexported, text);
    }

    #[test]
    fn malformed_text_is_a_syntax_error() {
        let err = import_text("{ \"careerName\": ").unwrap_err();
        match err {
            ImportError::Syntax(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Syntax, got {other:?}"),
        }
    }

    #[test]
    fn validation_errors_list_every_violation() {
        let mut value = serde_json::to_value(Portfolio::default()).unwrap();
        value["contact"]["email"] = serde_json::json!("nope");
        value["presentation"] = serde_json::json!("y".repeat(1501));
        let err = import_text(&value.to_string()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("contact.email: Invalid email address"));
        assert!(message.contains("presentation: Presentation must be 1500 characters or less"));
    }

    #[test]
    fn missing_file_is_an_unknown_error() {
        let err = read_portfolio_file(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, ImportError::Unknown(_)));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        let portfolio = Portfolio::default();
        write_portfolio_file(&path, &portfolio).unwrap();
        assert_eq!(read_portfolio_file(&path).unwrap(), portfolio);
    }
}
