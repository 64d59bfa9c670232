//! Sorting comparison logic
//!
//! Pure functions for comparing listing entries across different sort modes.

use crate::api::FileRecord;
use crate::SortMode;
use std::cmp::Ordering;

/// Compare two listing entries according to the given sort mode
///
/// # Sort Rules
/// - Folders always come before files
/// - Within same kind, apply sort mode
/// - Alphabetical tie-breaking for LastModified and FileSize
pub fn compare_records(a: &FileRecord, b: &FileRecord, sort_mode: SortMode, reverse: bool) -> Ordering {
    if a.is_folder() != b.is_folder() {
        return if a.is_folder() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());

    let result = match sort_mode {
        SortMode::Alphabetical => by_name(),
        // Newest first; ISO-8601 strings order lexically
        SortMode::LastModified => b.created_at.cmp(&a.created_at).then_with(by_name),
        // Largest first
        SortMode::FileSize => b.size.cmp(&a.size).then_with(by_name),
    };

    if reverse {
        result.reverse()
    } else {
        result
    }
}

/// Sort entries in place
pub fn sort_records(items: &mut [FileRecord], sort_mode: SortMode, reverse: bool) {
    items.sort_by(|a, b| compare_records(a, b, sort_mode, reverse));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryKind;

    fn make_file(name: &str, size: u64, created_at: &str) -> FileRecord {
        FileRecord {
            id: name.to_string(),
            name: name.to_string(),
            kind: EntryKind::File,
            size,
            mimetype: None,
            parent_id: None,
            created_at: Some(created_at.to_string()),
        }
    }

    fn make_dir(name: &str) -> FileRecord {
        FileRecord {
            kind: EntryKind::Folder,
            ..make_file(name, 0, "2023-01-01T00:00:00Z")
        }
    }

    #[test]
    fn test_compare_directories_before_files() {
        let dir = make_dir("dir");
        let file = make_file("file", 100, "2023-01-01T00:00:00Z");

        // Folder always comes first, regardless of sort mode or reverse
        assert_eq!(
            compare_records(&dir, &file, SortMode::Alphabetical, false),
            Ordering::Less
        );
        assert_eq!(
            compare_records(&file, &dir, SortMode::Alphabetical, false),
            Ordering::Greater
        );
        assert_eq!(
            compare_records(&dir, &file, SortMode::FileSize, true),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_alphabetical_case_insensitive() {
        let a = make_file("apple.txt", 100, "2023-01-01T00:00:00Z");
        let b = make_file("Banana.txt", 100, "2023-01-01T00:00:00Z");
        assert_eq!(compare_records(&a, &b, SortMode::Alphabetical, false), Ordering::Less);
        assert_eq!(compare_records(&a, &b, SortMode::Alphabetical, true), Ordering::Greater);
    }

    #[test]
    fn test_compare_last_modified_newest_first() {
        let old = make_file("a.txt", 1, "2023-01-01T00:00:00Z");
        let new = make_file("b.txt", 1, "2024-06-01T00:00:00Z");
        assert_eq!(compare_records(&new, &old, SortMode::LastModified, false), Ordering::Less);
    }

    #[test]
    fn test_compare_size_largest_first_with_name_tiebreak() {
        let big = make_file("z.bin", 1000, "2023-01-01T00:00:00Z");
        let small = make_file("a.bin", 10, "2023-01-01T00:00:00Z");
        let same = make_file("b.bin", 1000, "2023-01-01T00:00:00Z");
        assert_eq!(compare_records(&big, &small, SortMode::FileSize, false), Ordering::Less);
        assert_eq!(compare_records(&same, &big, SortMode::FileSize, false), Ordering::Less);
    }

    #[test]
    fn test_sort_records() {
        let mut items = vec![
            make_file("b.txt", 1, "2023-01-01T00:00:00Z"),
            make_dir("Zeta"),
            make_file("a.txt", 1, "2023-01-01T00:00:00Z"),
        ];
        sort_records(&mut items, SortMode::Alphabetical, false);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "a.txt", "b.txt"]);
    }
}
