//! Navigation Model
//!
//! This sub-model contains all state related to where the user is:
//! the breadcrumb path into the folder tree and which view is showing.

/// Label of the root breadcrumb
pub const ROOT_NAME: &str = "Home";

/// Which listing the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Folder,
    Recent,
}

/// One breadcrumb: a folder name and its id (`None` for root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub name: String,
    pub id: Option<String>,
}

impl PathEntry {
    pub fn root() -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            id: None,
        }
    }

    pub fn folder(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Some(id.into()),
        }
    }
}

/// Breadcrumb index outside the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Breadcrumb trail from root to the current folder.
///
/// Never empty; the first entry is always root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPath {
    entries: Vec<PathEntry>,
}

impl Default for NavigationPath {
    fn default() -> Self {
        Self::root()
    }
}

impl NavigationPath {
    pub fn root() -> Self {
        Self {
            entries: vec![PathEntry::root()],
        }
    }

    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> &PathEntry {
        // Non-empty by construction
        &self.entries[self.entries.len() - 1]
    }

    /// Id of the folder being viewed (`None` at root)
    pub fn current_folder_id(&self) -> Option<&str> {
        self.current().id.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.entries.len() == 1
    }

    pub fn push(&mut self, entry: PathEntry) {
        self.entries.push(entry);
    }

    /// Keep entries `0..=index`
    pub fn truncate_to(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.entries.len() {
            return Err(IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.truncate(index + 1);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }

    /// Names joined for display ("Home / Photos / 2024")
    pub fn display(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Navigation state (view mode + breadcrumb path)
#[derive(Clone, Debug, Default)]
pub struct NavigationModel {
    pub view_mode: ViewMode,
    pub path: NavigationPath,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_recent_view(&self) -> bool {
        self.view_mode == ViewMode::Recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep_path() -> NavigationPath {
        let mut path = NavigationPath::root();
        path.push(PathEntry::folder("Photos", "p1"));
        path.push(PathEntry::folder("2024", "p2"));
        path.push(PathEntry::folder("Summer", "p3"));
        path
    }

    #[test]
    fn test_root_path() {
        let path = NavigationPath::root();
        assert_eq!(path.len(), 1);
        assert!(path.is_root());
        assert!(!path.is_empty());
        assert_eq!(path.current(), &PathEntry::root());
        assert_eq!(path.current_folder_id(), None);
    }

    #[test]
    fn test_push_appends_only() {
        let mut path = deep_path();
        let before = path.entries().to_vec();
        path.push(PathEntry::folder("Beach", "p4"));

        assert_eq!(path.len(), before.len() + 1);
        assert_eq!(&path.entries()[..before.len()], before.as_slice());
        assert_eq!(path.current_folder_id(), Some("p4"));
    }

    #[test]
    fn test_truncate_to_every_valid_index() {
        let original = deep_path();
        for i in 0..original.len() {
            let mut path = original.clone();
            path.truncate_to(i).unwrap();
            assert_eq!(path.len(), i + 1);
            assert_eq!(path.entries(), &original.entries()[..=i]);
        }
    }

    #[test]
    fn test_truncate_out_of_range() {
        let mut path = deep_path();
        assert_eq!(
            path.truncate_to(4),
            Err(IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(path, deep_path());
    }

    #[test]
    fn test_reset_keeps_root() {
        let mut path = deep_path();
        path.reset();
        assert_eq!(path, NavigationPath::root());
    }

    #[test]
    fn test_display() {
        assert_eq!(deep_path().display(), "Home / Photos / 2024 / Summer");
    }

    #[test]
    fn test_navigation_model_defaults() {
        let model = NavigationModel::new();
        assert_eq!(model.view_mode, ViewMode::Folder);
        assert!(!model.in_recent_view());
        assert!(model.path.is_root());
    }
}
