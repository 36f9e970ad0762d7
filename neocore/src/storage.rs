//! Storage utilities for Neopix
//!
//! Directory browsing for the in-app save dialog and well-known
//! directory lookup.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("File name is empty")]
    EmptyName,
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Simple file browser state
#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
    pub filter_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
            filter_extensions: Vec::new(),
        };
        browser.refresh();
        browser
    }

    pub fn with_filter(mut self, extensions: Vec<String>) -> Self {
        self.filter_extensions = extensions;
        self.refresh();
        self
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        match read_entries(&self.current_dir, &self.filter_extensions) {
            Ok(entries) => self.entries.extend(entries),
            Err(e) => log::warn!("cannot list {}: {}", self.current_dir.display(), e),
        }
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    pub fn select_by_name(&mut self, name: &str) {
        self.selected_index = self.entries.iter().position(|e| e.name == name);
    }

    /// Directory a new file should be written into: the selected
    /// subdirectory if one is highlighted, otherwise the current one.
    pub fn save_directory(&self) -> PathBuf {
        match self.selected_entry() {
            Some(entry) if entry.is_directory && entry.name != ".." => entry.path.clone(),
            _ => self.current_dir.clone(),
        }
    }
}

/// List `dir`, directories first, each group sorted case-insensitively.
/// Hidden entries are skipped; files are kept only when their extension
/// is in `extensions` (an empty list keeps every file).
pub fn read_entries(dir: &Path, extensions: &[String]) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(StorageError::NotADirectory(dir.to_path_buf()));
    }

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let is_directory = path.is_dir();
        if !is_directory && !extensions.is_empty() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !extensions.iter().any(|f| f.to_lowercase() == ext) {
                continue;
            }
        }

        let entry = FileEntry { name, path, is_directory };
        if is_directory {
            dirs.push(entry);
        } else {
            files.push(entry);
        }
    }

    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());
    dirs.extend(files);
    Ok(dirs)
}

/// Join a user-typed file name onto `dir`, rejecting names that would
/// escape it.
pub fn resolve_save_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let name = file_name.trim();
    if name.is_empty() {
        return Err(StorageError::EmptyName);
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(dir.join(name))
}

/// Get the documents directory
pub fn documents_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("neocore-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_entries_sorted_dirs_first() {
        let dir = scratch_dir("sorted");
        fs::create_dir(dir.join("zeta")).unwrap();
        fs::write(dir.join("b.png"), b"").unwrap();
        fs::write(dir.join("A.png"), b"").unwrap();
        fs::write(dir.join(".hidden.png"), b"").unwrap();

        let names: Vec<String> = read_entries(&dir, &[]).unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["zeta", "A.png", "b.png"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_extension_filter() {
        let dir = scratch_dir("filter");
        fs::write(dir.join("art.PNG"), b"").unwrap();
        fs::write(dir.join("notes.txt"), b"").unwrap();

        let entries = read_entries(&dir, &["png".to_string()]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "art.PNG");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = std::env::temp_dir().join("neocore-definitely-missing-dir");
        assert!(matches!(read_entries(&dir, &[]), Err(StorageError::NotADirectory(_))));
    }

    #[test]
    fn test_browser_parent_entry_and_save_directory() {
        let dir = scratch_dir("browser");
        fs::create_dir(dir.join("sub")).unwrap();

        let mut browser = FileBrowser::new(dir.clone());
        assert_eq!(browser.entries[0].name, "..");
        assert_eq!(browser.save_directory(), dir);

        browser.select_by_name("sub");
        assert_eq!(browser.save_directory(), dir.join("sub"));

        browser.select_by_name("..");
        assert_eq!(browser.save_directory(), dir);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_save_path() {
        let dir = PathBuf::from("/tmp/art");
        assert_eq!(resolve_save_path(&dir, " untitled.png ").unwrap(), dir.join("untitled.png"));
        assert!(matches!(resolve_save_path(&dir, "   "), Err(StorageError::EmptyName)));
        assert!(matches!(resolve_save_path(&dir, "../x.png"), Err(StorageError::InvalidName(_))));
        assert!(matches!(resolve_save_path(&dir, ".."), Err(StorageError::InvalidName(_))));
    }
}
