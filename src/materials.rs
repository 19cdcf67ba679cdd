//! Static catalog of study materials: one book file per proficiency level.

use std::path::{Path, PathBuf};

/// Level labels exactly as they appear on the level keyboard.
pub const LEVELS: [&str; 6] = [
    "Beginner",
    "Elementary",
    "Pre-Intermediate",
    "Intermediate",
    "Upper Intermediate",
    "Advanced",
];

/// Level label -> book file name under the books directory.
const BOOK_FILES: [(&str, &str); 6] = [
    ("Beginner", "beginner.pdf"),
    ("Elementary", "elementary.pdf"),
    ("Pre-Intermediate", "pre-intermediate.pdf"),
    ("Intermediate", "intermediate.pdf"),
    ("Upper Intermediate", "upper-intermediate.pdf"),
    ("Advanced", "advanced.pdf"),
];

/// Read-only lookup from a level label to a document on disk. The lookup
/// itself never touches the filesystem; callers decide what a missing file
/// means for the user.
#[derive(Debug, Clone)]
pub struct MaterialLibrary {
    root: PathBuf,
}

impl MaterialLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_level(label: &str) -> bool {
        LEVELS.contains(&label)
    }

    /// Resolve a level label to the path of its book. Returns `None` for
    /// labels with no mapped file, including labels that are not levels.
    pub fn resolve(&self, level: &str) -> Option<PathBuf> {
        BOOK_FILES
            .iter()
            .find(|(label, _)| *label == level)
            .map(|(_, file)| self.root.join(file))
    }
}
