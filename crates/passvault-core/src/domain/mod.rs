//! Domain models shared across PassVault import and sync.

mod import_item;
mod validation;

pub use import_item::{ImportItem, ImportStatus};
pub use validation::{
    is_importable, validate_import_item, ImportValidationError, ValidationSeverity,
};
