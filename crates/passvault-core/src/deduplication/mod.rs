//! Two-phase reconciliation of imported credential batches.
//!
//! Phase one (`process_exact_duplicates`) collapses records that are
//! byte-identical on URL, username, and password. Phase two
//! (`process_smart_merge`) merges records for the same logical account
//! across URL and metadata variations. The phases share no state and are
//! independently callable; whether a pipeline runs one, the other, or both
//! (and in which order) is the caller's decision.

mod exact;
mod normalization;
mod smart_merge;

pub use exact::process_exact_duplicates;
pub use normalization::normalize_domain;
pub use smart_merge::process_smart_merge;

/// Character count of an optional field, absent counting as zero.
pub(crate) fn char_count(field: Option<&str>) -> usize {
    field.map_or(0, |s| s.chars().count())
}
