pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::PatchArgs;

pub use config::{cli::LocalStorage, toml_config::ToolConfig};
pub use crate::core::{file_ops::FileOperations, shell::DevShell};
pub use domain::model::{Operation, OperationMode, Outcome, Payload};
pub use utils::error::{FileToolError, Result};
