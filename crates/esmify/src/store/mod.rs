//! File-tree abstraction consumed by the converter
//!
//! The converter never touches `std::fs` directly. It walks and rewrites a
//! [`FileTree`], which is implemented over the real filesystem by
//! [`NativeTree`] and in memory by [`MemoryTree`].

mod memory;
mod native;

pub use memory::MemoryTree;
pub use native::NativeTree;

use crate::error::Result;
use std::path::Path;

/// A mutable hierarchical file store
///
/// Any existing path that is not a file is a directory.
pub trait FileTree {
    /// Read a file as UTF-8 text, `None` if the path is absent or not a file
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Replace a file's contents, creating it if needed
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Entry names directly under a directory, in a stable order
    fn children(&self, path: &Path) -> Result<Vec<String>>;
}
