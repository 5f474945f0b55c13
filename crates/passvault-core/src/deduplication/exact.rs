//! Exact-duplicate collapse (phase one of import reconciliation).
//!
//! Records that agree byte-for-byte on URL, username, and password are the
//! same credential regardless of their display metadata. Collapsing them is
//! silent pruning: no status change and no merge history on the survivors.

use std::collections::HashMap;

use super::char_count;
use crate::domain::ImportItem;

/// Collapse exact duplicates in an imported batch.
///
/// Each distinct `(url, username, password)` triple keeps exactly one
/// representative, emitted in first-seen order. When a later record collides
/// with an earlier one, the more informative of the two survives in the
/// earlier record's slot.
pub fn process_exact_duplicates(items: &[ImportItem]) -> Vec<ImportItem> {
    let mut reduced: Vec<ImportItem> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for item in items {
        let key = exact_fingerprint(item);
        match slots.get(&key) {
            Some(&slot) => {
                // Strictly greater: ties keep the earlier record.
                if information_score(item) > information_score(&reduced[slot]) {
                    reduced[slot] = item.clone();
                }
            }
            None => {
                slots.insert(key, reduced.len());
                reduced.push(item.clone());
            }
        }
    }

    reduced
}

/// Grouping key for exact matching: raw URL, username, and password,
/// absent fields keyed as empty.
pub(crate) fn exact_fingerprint(item: &ImportItem) -> String {
    format!(
        "{}|{}|{}",
        item.url.as_deref().unwrap_or(""),
        item.username.as_deref().unwrap_or(""),
        item.password.as_deref().unwrap_or("")
    )
}

/// How much human-entered context a record carries. Used to pick the
/// representative among exact duplicates.
fn information_score(item: &ImportItem) -> usize {
    char_count(item.notes.as_deref()) + char_count(item.name.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImportStatus;

    fn item(name: &str, url: &str, username: &str, password: &str) -> ImportItem {
        ImportItem::new(name, url, username, password)
    }

    #[test]
    fn distinct_records_pass_through() {
        let items = vec![
            item("A", "https://a.example.com", "u", "p"),
            item("B", "https://b.example.com", "u", "p"),
        ];
        let reduced = process_exact_duplicates(&items);
        assert_eq!(reduced, items);
    }

    #[test]
    fn identical_triples_collapse_to_one() {
        let items = vec![
            item("Mail", "https://mail.example.com", "me", "pw"),
            item("Mail", "https://mail.example.com", "me", "pw"),
            item("Mail", "https://mail.example.com", "me", "pw"),
        ];
        let reduced = process_exact_duplicates(&items);
        assert_eq!(reduced.len(), 1);
    }

    #[test]
    fn more_informative_record_wins_the_slot() {
        let terse = item("M", "https://mail.example.com", "me", "pw");
        let mut verbose = item("Mail account", "https://mail.example.com", "me", "pw");
        verbose.notes = Some("recovery codes in safe".to_string());

        let reduced = process_exact_duplicates(&[terse.clone(), verbose.clone()]);
        assert_eq!(reduced, vec![verbose.clone()]);

        // Same winner regardless of arrival order.
        let reduced = process_exact_duplicates(&[verbose.clone(), terse]);
        assert_eq!(reduced, vec![verbose]);
    }

    #[test]
    fn score_ties_keep_the_earlier_record() {
        let mut first = item("Mail", "https://mail.example.com", "me", "pw");
        first.original_id = Some("first".to_string());
        let mut second = item("Mail", "https://mail.example.com", "me", "pw");
        second.original_id = Some("second".to_string());

        let reduced = process_exact_duplicates(&[first.clone(), second]);
        assert_eq!(reduced, vec![first]);
    }

    #[test]
    fn collapse_preserves_first_seen_order() {
        let items = vec![
            item("A", "https://a.example.com", "u", "p"),
            item("B", "https://b.example.com", "u", "p"),
            item("A longer duplicate", "https://a.example.com", "u", "p"),
            item("C", "https://c.example.com", "u", "p"),
        ];
        let reduced = process_exact_duplicates(&items);
        let names: Vec<_> = reduced.iter().map(|i| i.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["A longer duplicate", "B", "C"]);
    }

    #[test]
    fn missing_fields_key_as_empty() {
        let bare = ImportItem::default();
        let also_bare = ImportItem {
            url: Some(String::new()),
            ..ImportItem::default()
        };
        let reduced = process_exact_duplicates(&[bare, also_bare]);
        assert_eq!(reduced.len(), 1);
    }

    #[test]
    fn pruning_is_silent() {
        let items = vec![
            item("Mail", "https://mail.example.com", "me", "pw"),
            item("Mail", "https://mail.example.com", "me", "pw"),
        ];
        let reduced = process_exact_duplicates(&items);
        assert_eq!(reduced[0].status, Some(ImportStatus::New));
        assert!(reduced[0].merge_details.is_empty());
    }
}
