// Filesystem adapter over tokio::fs

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use hostio_core::domain::{FileContents, PathKind, ReadOptions};
use hostio_core::port::FileStore;
use hostio_core::Result;

/// File store backed by real disk I/O via `tokio::fs`.
///
/// Every operation is a single pass-through native call; the whole
/// result is materialized in memory before the future resolves.
pub struct TokioFileStore;

#[async_trait]
impl FileStore for TokioFileStore {
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut dir = fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        info!(path = %path.display(), entries = names.len(), "Listed directory");
        Ok(names)
    }

    async fn describe(&self, path: &Path) -> Result<PathKind> {
        // lstat semantics: a symlink reports Other, never its target's kind
        let metadata = fs::symlink_metadata(path).await?;
        let kind = PathKind::from_file_type(&metadata.file_type());

        info!(path = %path.display(), kind = %kind, "Described path");
        Ok(kind)
    }

    async fn read_file(&self, options: ReadOptions, path: &Path) -> Result<FileContents> {
        let bytes = fs::read(path).await?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            encoding = ?options.encoding,
            "Read file"
        );

        Ok(match options.encoding {
            Some(encoding) => FileContents::Text(encoding.decode(&bytes)),
            None => FileContents::Bytes(bytes),
        })
    }
}
