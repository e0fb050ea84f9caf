//! Native filesystem implementation of [`FileTree`]

use super::FileTree;
use crate::error::{EsmError, Result};
use std::path::Path;

/// Filesystem-backed tree using `std::fs`
///
/// Directory listings are sorted by name so traversal order does not depend
/// on the platform's `read_dir` order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTree;

impl NativeTree {
    /// Create a new NativeTree instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileTree for NativeTree {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }
        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|e| EsmError::io(path, e))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| EsmError::io(parent, e))?;
        }
        std::fs::write(path, contents).map_err(|e| EsmError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn children(&self, path: &Path) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| EsmError::io(path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| EsmError::io(path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn children_are_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.js"), "").unwrap();
        fs::write(temp.path().join("a.js"), "").unwrap();
        fs::create_dir(temp.path().join("c")).unwrap();

        let tree = NativeTree::new();
        assert_eq!(
            tree.children(temp.path()).unwrap(),
            vec!["a.js", "b.js", "c"]
        );
    }

    #[test]
    fn read_directory_is_absent() {
        let temp = TempDir::new().unwrap();
        let tree = NativeTree::new();
        assert_eq!(tree.read(temp.path()).unwrap(), None);
        assert_eq!(tree.read(&temp.path().join("missing.js")).unwrap(), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let mut tree = NativeTree::new();
        let path = temp.path().join("src/lib/index.js");

        tree.write(&path, "export default 1;\n").unwrap();

        assert!(tree.is_file(&path));
        assert_eq!(
            tree.read(&path).unwrap().as_deref(),
            Some("export default 1;\n")
        );
    }
}
