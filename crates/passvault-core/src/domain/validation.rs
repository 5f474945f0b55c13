//! Validation for import candidates.
//!
//! The reconciliation engine itself is total and accepts any record; rejecting
//! semantically useless rows (no username and no password) is the import
//! layer's job, and these helpers are what it calls before handing a batch to
//! the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ImportItem;

/// Severity of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning for a single candidate field.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ImportValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

fn is_blank(field: Option<&str>) -> bool {
    field.map_or(true, |s| s.trim().is_empty())
}

/// Validate an import candidate and return errors/warnings.
pub fn validate_import_item(item: &ImportItem) -> Vec<ImportValidationError> {
    let mut errors = Vec::new();

    // A row with neither username nor password cannot become a credential.
    if is_blank(item.username.as_deref()) && is_blank(item.password.as_deref()) {
        errors.push(ImportValidationError {
            field: "credentials".to_string(),
            message: "A username or password is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if is_blank(item.url.as_deref()) {
        errors.push(ImportValidationError {
            field: "url".to_string(),
            message: "A login URL is recommended".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if is_blank(item.name.as_deref()) {
        errors.push(ImportValidationError {
            field: "name".to_string(),
            message: "A display name is recommended".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    errors
}

/// Check if a candidate is importable (no error-severity findings).
pub fn is_importable(item: &ImportItem) -> bool {
    validate_import_item(item)
        .iter()
        .all(|e| e.severity != ValidationSeverity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_is_rejected() {
        let errors = validate_import_item(&ImportItem::default());
        assert!(errors
            .iter()
            .any(|e| e.field == "credentials" && e.severity == ValidationSeverity::Error));
        assert!(!is_importable(&ImportItem::default()));
    }

    #[test]
    fn password_only_row_is_importable() {
        let item = ImportItem {
            password: Some("hunter2".to_string()),
            ..ImportItem::default()
        };
        assert!(is_importable(&item));
        // Still warns about the missing URL and name.
        let errors = validate_import_item(&item);
        assert!(errors.iter().any(|e| e.field == "url"));
        assert!(errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let item = ImportItem {
            username: Some("   ".to_string()),
            ..ImportItem::default()
        };
        assert!(!is_importable(&item));
    }

    #[test]
    fn complete_item_is_clean() {
        let item = ImportItem::new("Email", "https://mail.example.com", "me", "pw");
        assert!(validate_import_item(&item).is_empty());
    }
}
