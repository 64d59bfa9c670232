//! Search Logic
//!
//! Pure functions for filtering listing entries by the debounced search query.
//! Supports wildcard patterns using the glob crate.

use crate::api::FileRecord;

/// Match a search query against an entry name using wildcard patterns
///
/// # Pattern Rules
/// - "*" matches any sequence of characters
/// - Matches are case-insensitive
/// - A query without wildcards matches as a substring
///
/// # Examples
/// ```
/// use cloudtui::logic::search::search_matches;
///
/// assert!(search_matches("report", "Q3-report.pdf"));
/// assert!(search_matches("*.pdf", "Q3-report.pdf"));
/// assert!(!search_matches("*.png", "Q3-report.pdf"));
/// ```
pub fn search_matches(query: &str, name: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true; // Empty query matches everything
    }

    let query_lower = query.to_lowercase();
    let name_lower = name.to_lowercase();

    if query_lower.contains(['*', '?', '[']) {
        if let Ok(pattern) = glob::Pattern::new(&query_lower) {
            return pattern.matches(&name_lower);
        }
    }

    // Plain query or invalid glob pattern: substring match
    name_lower.contains(&query_lower)
}

/// Filter entries by search query
pub fn filter_records(items: &[FileRecord], query: &str) -> Vec<FileRecord> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| search_matches(query, &item.name))
        .cloned()
        .collect()
}
