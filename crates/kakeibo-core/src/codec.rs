//! Wire codec for the persisted entry book.
//!
//! The blob is a JSON array with one object per entry. Reads are lenient:
//! unknown fields are ignored, missing amounts default to zero, and a record
//! failing shape validation is skipped so one bad record never poisons the
//! rest of the book. Records without an `id` (legacy exports) get a fresh
//! identifier on load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use kakeibo_domain::{Entry, EntryBook, ReceiptRef};

use crate::{entry_store::validate_amounts, CoreError};

#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    date: NaiveDate,
    #[serde(default)]
    income: f64,
    #[serde(default)]
    expense: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(
        default,
        rename = "receiptRef",
        skip_serializing_if = "Option::is_none"
    )]
    receipt_ref: Option<String>,
}

impl EntryRecord {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id),
            date: entry.date,
            income: entry.income,
            expense: entry.expense,
            category: entry.category.clone(),
            receipt_ref: entry.receipt.as_ref().map(|r| r.as_str().to_string()),
        }
    }

    fn into_entry(self) -> Result<Entry, CoreError> {
        validate_amounts(self.income, self.expense)?;
        Ok(Entry {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            date: self.date,
            income: self.income,
            expense: self.expense,
            category: self.category,
            receipt: self.receipt_ref.map(ReceiptRef::new),
        })
    }
}

/// Serializes the book into the wire format.
pub fn encode(book: &EntryBook) -> Result<String, CoreError> {
    let records: Vec<EntryRecord> = book.iter().map(EntryRecord::from_entry).collect();
    serde_json::to_string_pretty(&records).map_err(|err| CoreError::StorageWrite(err.to_string()))
}

/// Deserializes a wire-format blob, skipping invalid records.
///
/// Only a blob that is not a JSON array at all counts as unreadable.
pub fn decode(blob: &str) -> Result<EntryBook, CoreError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(blob).map_err(|err| CoreError::StorageRead(err.to_string()))?;
    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<EntryRecord>(value) {
            Ok(record) => match record.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("skipping invalid entry record: {err}"),
            },
            Err(err) => warn!("skipping malformed entry record: {err}"),
        }
    }
    Ok(EntryBook::from_entries(entries))
}
