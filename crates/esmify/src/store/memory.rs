//! In-memory implementation of [`FileTree`]

use super::FileTree;
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// A file tree held entirely in memory
///
/// Only files are stored; a directory exists while at least one file lives
/// beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// File contents, if the path is a file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Iterate over all files in path order
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file.as_path() != path && file.starts_with(path))
    }
}

impl FileTree for MemoryTree {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn children(&self, path: &Path) -> Result<Vec<String>> {
        // Keys are ordered component-wise, so entries sharing a first
        // component are adjacent.
        let mut names: Vec<String> = Vec::new();
        for file in self.files.keys() {
            let Ok(rest) = file.strip_prefix(path) else {
                continue;
            };
            if let Some(Component::Normal(first)) = rest.components().next() {
                let name = first.to_string_lossy();
                if names.last().map(String::as_str) != Some(name.as_ref()) {
                    names.push(name.into_owned());
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryTree {
        MemoryTree::new()
            .with_file("/repo/index.js", "a")
            .with_file("/repo/src/app.js", "b")
            .with_file("/repo/src/util/math.js", "c")
            .with_file("/repo/README.md", "d")
    }

    #[test]
    fn directories_are_implied() {
        let tree = sample();
        assert!(tree.exists(Path::new("/repo/src")));
        assert!(tree.exists(Path::new("/repo/src/util")));
        assert!(!tree.is_file(Path::new("/repo/src")));
        assert!(!tree.exists(Path::new("/repo/lib")));
    }

    #[test]
    fn children_lists_each_entry_once() {
        let tree = sample();
        assert_eq!(
            tree.children(Path::new("/repo")).unwrap(),
            vec!["README.md", "index.js", "src"]
        );
        assert_eq!(
            tree.children(Path::new("/repo/src")).unwrap(),
            vec!["app.js", "util"]
        );
    }

    #[test]
    fn sibling_with_shared_prefix_is_not_a_child() {
        let tree = MemoryTree::new()
            .with_file("/repo/src/a.js", "")
            .with_file("/repo/src-old/b.js", "");
        assert_eq!(tree.children(Path::new("/repo/src")).unwrap(), vec!["a.js"]);
    }

    #[test]
    fn write_then_read() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("/x/y.js"), "export default 1;").unwrap();
        assert_eq!(
            tree.read(Path::new("/x/y.js")).unwrap().as_deref(),
            Some("export default 1;")
        );
        assert_eq!(tree.read(Path::new("/x")).unwrap(), None);
    }
}
