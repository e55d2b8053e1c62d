use crate::core::{Operation, OperationRunner, Outcome, Payload, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Applies file operations through a [`Storage`] backend.
pub struct FileOperations<S: Storage> {
    storage: S,
}

impl<S: Storage> FileOperations<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the whole file with `content`, creating it if needed.
    /// Returns the number of bytes written.
    pub async fn write_full(&self, path: &Path, content: &str) -> Result<usize> {
        tracing::debug!(path = %path.display(), bytes = content.len(), "writing full content");
        self.storage.write_file(path, content).await?;
        Ok(content.len())
    }

    /// Replaces every literal occurrence of `old` with `new`, scanning left to
    /// right without overlap. A missing file is reported, never created.
    pub async fn replace_substring(&self, path: &Path, old: &str, new: &str) -> Result<Outcome> {
        if !self.storage.exists(path).await {
            return Ok(Self::not_found(path));
        }

        let content = self.storage.read_file(path).await?;
        let occurrences = content.matches(old).count();
        let updated = content.replace(old, new);

        // rewritten even when nothing matched
        self.storage.write_file(path, &updated).await?;
        tracing::debug!(path = %path.display(), occurrences, "substring replacement written");

        Ok(Outcome::Replaced {
            path: path.to_path_buf(),
            occurrences,
        })
    }

    fn not_found(path: &Path) -> Outcome {
        tracing::warn!(path = %path.display(), "replace target not found");
        Outcome::NotFound {
            path: path.to_path_buf(),
        }
    }

    async fn write_payload(&self, path: &Path, content: &Payload) -> Result<Outcome> {
        let text = content.decode()?;
        let bytes = self.write_full(path, &text).await?;
        Ok(Outcome::Written {
            path: path.to_path_buf(),
            bytes,
        })
    }
}

#[async_trait]
impl<S: Storage> OperationRunner for FileOperations<S> {
    async fn execute(&self, operation: Operation) -> Result<Outcome> {
        let target = self.storage.resolve(operation.path());
        tracing::info!(mode = ?operation.mode(), path = %target.display(), "executing file operation");

        match &operation {
            Operation::FullReplace { path, content } | Operation::CreateFile { path, content } => {
                self.write_payload(path, content).await
            }
            Operation::SubstringReplace { path, old, new } => {
                // existence is checked before the payloads are decoded
                if !self.storage.exists(path).await {
                    return Ok(Self::not_found(path));
                }
                let old = old.decode()?;
                let new = new.decode()?;
                self.replace_substring(path, &old, &new).await
            }
        }
    }
}
