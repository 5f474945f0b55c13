//! Import candidate records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Provenance tag recorded on an import candidate.
///
/// Written by the reconciliation engine (`merged`) or by the import layer
/// (`new`); the engine never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    New,
    Duplicate,
    Merged,
}

/// A credential record produced by an import source, prior to being
/// committed to the vault.
///
/// All credential fields are optional: import sources (CSV exports, browser
/// dumps) routinely omit columns, and reconciliation treats a missing field
/// as the empty string rather than an error. Fields the engine does not
/// understand are captured in `extra` and carried through unchanged from
/// whichever record ends up representing a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportItem {
    /// Display label shown in the vault list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login URL as supplied by the source, unnormalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Free-text notes; grows by concatenation when records merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "_status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ImportStatus>,
    /// Back-reference to a prior record identity; informational only,
    /// passed through untouched.
    #[serde(
        rename = "_originalId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_id: Option<String>,
    /// Human-readable merge history, appended to on every fold into this
    /// record's group.
    #[serde(
        rename = "_mergeDetails",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub merge_details: Vec<String>,
    /// Source-specific fields the engine never inspects.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ImportItem {
    /// Create a fresh candidate the way an import parser hands it over.
    pub fn new(name: &str, url: &str, username: &str, password: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            status: Some(ImportStatus::New),
            ..Self::default()
        }
    }
}
