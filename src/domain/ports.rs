use crate::domain::model::{Operation, Outcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Where `path` lands on disk.
    fn resolve(&self, path: &Path) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn base_dir(&self) -> &str;
    fn create_parents(&self) -> bool;
    fn prompt(&self) -> &str;
    fn trim_fields(&self) -> bool;
    fn log_level(&self) -> &str;
}

#[async_trait]
pub trait OperationRunner: Send + Sync {
    async fn execute(&self, operation: Operation) -> Result<Outcome>;
}
