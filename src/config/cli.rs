use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    create_parents: bool,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            create_parents: true,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            base_path: PathBuf::from(config.base_dir()),
            create_parents: config.create_parents(),
        }
    }

    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(self.resolve(path)).await.unwrap_or(false)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        let data = fs::read_to_string(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &Path, data: &str) -> Result<()> {
        let full_path = self.resolve(path);

        if self.create_parents {
            if let Some(parent) = full_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
        }

        fs::write(full_path, data).await?;
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        // join() keeps absolute paths as they are
        self.base_path.join(path)
    }
}
