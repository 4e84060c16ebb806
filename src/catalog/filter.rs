//! Search filtering for the cake gallery.
//!
//! A pure display filter: it decides which cards match, and the gallery
//! flips their hidden flags. The store itself is never touched.

use crate::catalog::store::ProductRecord;

/// Normalize a raw query the way the search box expects: surrounding
/// whitespace trimmed, case folded.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether a record matches a normalized query: substring of the name or
/// of the category, case folded. The empty query matches everything.
pub fn record_matches(record: &ProductRecord, normalized: &str) -> bool {
    normalized.is_empty()
        || record.name.to_lowercase().contains(normalized)
        || record.category.to_lowercase().contains(normalized)
}
