pub mod file_ops;
pub mod shell;

pub use crate::domain::model::{Operation, OperationMode, Outcome, Payload};
pub use crate::domain::ports::{ConfigProvider, OperationRunner, Storage};
pub use crate::utils::error::Result;
