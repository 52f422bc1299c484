//! Persistence contract between the entry store and storage backends.

use crate::CoreError;

/// Abstraction over persistence backends holding the serialized entry book.
///
/// Both calls are synchronous round trips that complete before the mutating
/// operation returns; the store performs no other I/O. `read_all` returns
/// `None` when no blob has ever been written, which is not an error.
pub trait EntryStorage {
    fn read_all(&self) -> Result<Option<String>, CoreError>;
    fn write_all(&self, blob: &str) -> Result<(), CoreError>;
}
