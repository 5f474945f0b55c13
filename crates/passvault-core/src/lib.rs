//! passvault-core: Cross-platform core library for the PassVault password manager
//!
//! This library provides pure Rust implementations of:
//! - Credential import domain models
//! - Import batch reconciliation (exact-duplicate collapse and smart merge)
//! - Login URL domain normalization
//! - Import candidate validation
//!
//! The crate is deliberately free of I/O: storage, sync transport, secret
//! handling, and UI all live in the platform layers.

pub mod deduplication;
pub mod domain;

// Re-export main types for convenience
pub use deduplication::{normalize_domain, process_exact_duplicates, process_smart_merge};
pub use domain::{
    is_importable, validate_import_item, ImportItem, ImportStatus, ImportValidationError,
    ValidationSeverity,
};
