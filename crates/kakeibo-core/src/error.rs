use thiserror::Error;
use uuid::Uuid;

/// Unified error type for store and persistence failures.
///
/// Nothing here is fatal to the aggregation pipeline: validation and
/// not-found errors reject a single operation, read errors degrade to an
/// empty book at open time, and write errors leave the in-memory book
/// intact.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Position out of range: {0}")]
    PositionOutOfRange(usize),
    #[error("Storage read failed: {0}")]
    StorageRead(String),
    #[error("Storage write failed: {0}")]
    StorageWrite(String),
}
