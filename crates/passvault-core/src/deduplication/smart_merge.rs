//! Fuzzy merge (phase two of import reconciliation).
//!
//! Records for the same logical account often arrive with differing URLs
//! (`www.site.com` vs `site.com/login`) or display metadata. Phase two
//! groups by normalized domain, username, and password, folds the divergent
//! metadata into one record, and logs every fold in `_mergeDetails`.
//! Passwords are part of the key on purpose: same-site records with
//! different passwords are rotated credentials, not duplicates.

use std::collections::HashMap;

use super::char_count;
use super::normalization::normalize_domain;
use crate::domain::{ImportItem, ImportStatus};

/// Marker prefixed to notes folded in from a merged record.
const MERGE_NOTE_MARKER: &str = "[Merged]: ";

/// Merge records that refer to the same logical account.
///
/// Groups are keyed by `normalize_domain(url)`, username, and password and
/// emitted in first-seen order. Colliding records fold into the group
/// representative field by field; non-colliding records pass through with
/// whatever status the caller gave them.
pub fn process_smart_merge(items: &[ImportItem]) -> Vec<ImportItem> {
    let mut reduced: Vec<ImportItem> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for item in items {
        let key = merge_fingerprint(item);
        match slots.get(&key) {
            Some(&slot) => merge_into(&mut reduced[slot], item),
            None => {
                slots.insert(key, reduced.len());
                reduced.push(item.clone());
            }
        }
    }

    reduced
}

/// Grouping key for fuzzy matching: normalized domain plus raw username
/// and password.
pub(crate) fn merge_fingerprint(item: &ImportItem) -> String {
    format!(
        "{}|{}|{}",
        normalize_domain(item.url.as_deref()),
        item.username.as_deref().unwrap_or(""),
        item.password.as_deref().unwrap_or("")
    )
}

/// Fold `incoming` into the group representative `base`.
///
/// Unlisted fields (custom columns, `_originalId`) stay with the base
/// record untouched.
fn merge_into(base: &mut ImportItem, incoming: &ImportItem) {
    // Longer display name is assumed more descriptive; ties keep the base.
    if char_count(incoming.name.as_deref()) > char_count(base.name.as_deref()) {
        base.name = incoming.name.clone();
    }

    let incoming_notes = incoming.notes.as_deref().unwrap_or("");
    if !incoming_notes.is_empty() {
        let existing = base.notes.clone().unwrap_or_default();
        if existing.is_empty() {
            base.notes = Some(incoming_notes.to_string());
        } else if !existing.contains(incoming_notes) {
            base.notes = Some(format!("{existing}\n\n{MERGE_NOTE_MARKER}{incoming_notes}"));
        }
    }

    // Longer URL is assumed more specific (a login path beats the bare
    // domain). Compared raw, unlike the fingerprint, which normalizes.
    if char_count(incoming.url.as_deref()) > char_count(base.url.as_deref()) {
        base.url = incoming.url.clone();
    }

    base.status = Some(ImportStatus::Merged);
    base.merge_details.push(format!(
        "Merged with \"{}\"",
        incoming.name.as_deref().unwrap_or("")
    ));
}
