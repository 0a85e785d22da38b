// File Store Port
// Abstraction over the host's filesystem primitives

use std::path::Path;

use async_trait::async_trait;

use crate::domain::{FileContents, PathKind, ReadOptions};
use crate::error::Result;

/// File Store trait
///
/// Implementations:
/// - TokioFileStore (infra-system): real disk I/O via tokio::fs
/// - MockFileStore (below): in-memory tree for tests
#[async_trait]
pub trait FileStore: Send + Sync {
    /// List the immediate entry names of a directory. No recursion, no
    /// sorting, no hidden-entry exclusion; names come back verbatim in
    /// whatever order the native enumeration yields.
    ///
    /// # Errors
    /// - `HostIoError::NotFound` if the path does not exist
    /// - `HostIoError::Io` if the path is not a directory
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Classify a path without following symlinks.
    ///
    /// # Errors
    /// - `HostIoError::NotFound` if the path does not exist
    async fn describe(&self, path: &Path) -> Result<PathKind>;

    /// Read a whole file into memory: raw bytes when `options.encoding`
    /// is absent, decoded text when present. No size guard.
    ///
    /// # Errors
    /// - `HostIoError::NotFound` if the file does not exist
    /// - `HostIoError::Io` if the path is a directory
    async fn read_file(&self, options: ReadOptions, path: &Path) -> Result<FileContents>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::HostIoError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// Mock File Store backed by an in-memory tree
    pub struct MockFileStore {
        files: HashMap<PathBuf, Vec<u8>>,
        dirs: HashMap<PathBuf, Vec<String>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockFileStore {
        pub fn new() -> Self {
            Self {
                files: HashMap::new(),
                dirs: HashMap::new(),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.into(), bytes.into());
            self
        }

        pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<String>) -> Self {
            self.dirs.insert(path.into(), entries);
            self
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }

        fn missing(path: &Path) -> HostIoError {
            HostIoError::NotFound(format!("no such path: {}", path.display()))
        }
    }

    impl Default for MockFileStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl FileStore for MockFileStore {
        async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
            *self.call_count.lock().unwrap() += 1;
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| Self::missing(path))
        }

        async fn describe(&self, path: &Path) -> Result<PathKind> {
            *self.call_count.lock().unwrap() += 1;
            if self.files.contains_key(path) {
                Ok(PathKind::File)
            } else if self.dirs.contains_key(path) {
                Ok(PathKind::Directory)
            } else {
                Err(Self::missing(path))
            }
        }

        async fn read_file(&self, options: ReadOptions, path: &Path) -> Result<FileContents> {
            *self.call_count.lock().unwrap() += 1;
            let bytes = self.files.get(path).ok_or_else(|| Self::missing(path))?;
            Ok(match options.encoding {
                Some(encoding) => FileContents::Text(encoding.decode(bytes)),
                None => FileContents::Bytes(bytes.clone()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;
    use crate::domain::TextEncoding;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_mock_store_serves_preset_tree() {
        let store = MockFileStore::new()
            .with_file("/tmp/a.txt", b"abc".to_vec())
            .with_dir("/tmp", vec!["a.txt".to_string()]);

        assert_eq!(
            store.describe(&PathBuf::from("/tmp/a.txt")).await.unwrap(),
            PathKind::File
        );
        assert_eq!(
            store.list_dir(&PathBuf::from("/tmp")).await.unwrap(),
            vec!["a.txt".to_string()]
        );

        let contents = store
            .read_file(
                ReadOptions::text(TextEncoding::Utf8),
                &PathBuf::from("/tmp/a.txt"),
            )
            .await
            .unwrap();
        assert_eq!(contents, FileContents::Text("abc".to_string()));

        assert_eq!(store.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_store_fails_on_unknown_path() {
        let store = MockFileStore::new();
        let err = store
            .describe(&PathBuf::from("/nope"))
            .await
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
