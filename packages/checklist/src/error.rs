use listkeeper_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the checklist item service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Checklist item not found with ID: {0}")]
    NotFound(i64),

    #[error("Checklist item {0} has reached the maximum version")]
    VersionExhausted(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
