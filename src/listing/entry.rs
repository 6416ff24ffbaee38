//! Panel entry definition

use std::path::MAIN_SEPARATOR;

/// One row in a navigation listing
///
/// Kind is carried as data, never inferred back from label formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Synthetic "go up a directory" row, always first
    Parent,
    /// A child directory
    Folder(String),
    /// A child file
    File(String),
    /// Offer to create a file named by the pending text
    CreateFile(String),
    /// Offer to create a folder named by the pending text
    CreateFolder(String),
}

impl Entry {
    /// Panel label for this entry
    ///
    /// Folders carry a trailing separator to disambiguate them from
    /// files with the same name prefix.
    pub fn label(&self) -> String {
        match self {
            Entry::Parent => "..".to_string(),
            Entry::Folder(name) => format!("{name}{MAIN_SEPARATOR}"),
            Entry::File(name) => name.clone(),
            Entry::CreateFile(text) => format!("Create File {text}"),
            Entry::CreateFolder(text) => format!("Create Folder {text}{MAIN_SEPARATOR}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Entry::Parent.label(), "..");
        assert_eq!(
            Entry::Folder("src".into()).label(),
            format!("src{MAIN_SEPARATOR}")
        );
        assert_eq!(Entry::File("a.txt".into()).label(), "a.txt");
        assert_eq!(
            Entry::CreateFile("new.txt".into()).label(),
            "Create File new.txt"
        );
        assert_eq!(
            Entry::CreateFolder("newdir".into()).label(),
            format!("Create Folder newdir{MAIN_SEPARATOR}")
        );
    }
}
