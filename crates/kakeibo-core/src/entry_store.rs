//! Mutable entry collection with write-through persistence.

use tracing::warn;
use uuid::Uuid;

use kakeibo_domain::{Entry, EntryBook};

use crate::{codec, storage::EntryStorage, CoreError};

/// Owns the in-memory entry book and keeps it synchronized with an injected
/// storage collaborator.
///
/// Every successful mutation persists the full book. The in-memory book is
/// the source of truth for the running session: a failed persist surfaces as
/// an error but does not roll back the change.
pub struct EntryStore {
    book: EntryBook,
    storage: Box<dyn EntryStorage>,
}

impl EntryStore {
    /// Opens the store, loading whatever the backend currently holds.
    ///
    /// A missing blob yields an empty book; an unreadable one is logged and
    /// likewise degrades to empty. The caller never sees a read failure.
    pub fn open(storage: Box<dyn EntryStorage>) -> Self {
        let book = match storage.read_all() {
            Ok(Some(blob)) => match codec::decode(&blob) {
                Ok(book) => book,
                Err(err) => {
                    warn!("stored entry data unreadable, starting empty: {err}");
                    EntryBook::new()
                }
            },
            Ok(None) => EntryBook::new(),
            Err(err) => {
                warn!("storage read failed, starting empty: {err}");
                EntryBook::new()
            }
        };
        Self { book, storage }
    }

    /// Read-only snapshot of the current book.
    ///
    /// Callers needing consistency across several aggregate computations
    /// should take one snapshot per refresh and reuse it.
    pub fn entries(&self) -> &EntryBook {
        &self.book
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Validates and appends `entry`, then persists the full book.
    ///
    /// Rejected entries (both legs zero, negative or non-finite amounts)
    /// never reach the book.
    pub fn add(&mut self, entry: Entry) -> Result<Uuid, CoreError> {
        validate_amounts(entry.income, entry.expense)?;
        let id = entry.id;
        self.book.push(entry);
        self.persist()?;
        Ok(id)
    }

    /// Removes the entry with the given identifier, then persists.
    pub fn remove(&mut self, id: Uuid) -> Result<Entry, CoreError> {
        let removed = self
            .book
            .remove_by_id(id)
            .ok_or(CoreError::EntryNotFound(id))?;
        self.persist()?;
        Ok(removed)
    }

    /// Positional removal over the current in-memory ordering.
    ///
    /// Resolves the position to an identifier first, so the positional form
    /// shares the identifier-keyed deletion path.
    pub fn remove_at(&mut self, position: usize) -> Result<Entry, CoreError> {
        let id = self
            .book
            .get(position)
            .map(|entry| entry.id)
            .ok_or(CoreError::PositionOutOfRange(position))?;
        self.remove(id)
    }

    fn persist(&self) -> Result<(), CoreError> {
        let blob = codec::encode(&self.book)?;
        self.storage.write_all(&blob)
    }
}

/// Shared amount validation for submitted entries and loaded records.
pub(crate) fn validate_amounts(income: f64, expense: f64) -> Result<(), CoreError> {
    if !income.is_finite() || !expense.is_finite() {
        return Err(CoreError::Validation(
            "amounts must be finite numbers".into(),
        ));
    }
    if income < 0.0 || expense < 0.0 {
        return Err(CoreError::Validation("amounts must not be negative".into()));
    }
    if income == 0.0 && expense == 0.0 {
        return Err(CoreError::Validation(
            "entry needs an income or an expense amount".into(),
        ));
    }
    Ok(())
}
