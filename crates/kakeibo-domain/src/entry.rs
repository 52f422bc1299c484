//! Domain models for dated income/expense entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::YearMonth;

/// Opaque reference to an attached receipt image.
///
/// The core never dereferences the value; acquiring and releasing the
/// underlying resource belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptRef(String);

impl ReceiptRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single dated income/expense record.
///
/// Immutable once stored; edits replace the entry wholesale. The `id` is
/// assigned at creation and is the key used for deletion, so two
/// structurally identical entries stay independently deletable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptRef>,
}

impl Entry {
    pub fn new(date: NaiveDate, income: f64, expense: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            income,
            expense,
            category: None,
            receipt: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_receipt(mut self, receipt: ReceiptRef) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// Returns `true` when the entry carries an income leg.
    pub fn has_income(&self) -> bool {
        self.income > 0.0
    }

    /// Returns `true` when the entry carries an expense leg.
    pub fn has_expense(&self) -> bool {
        self.expense > 0.0
    }
}

/// Insertion-ordered collection of entries.
///
/// Owned exclusively by the store; aggregation reads snapshots and never
/// mutates. No uniqueness constraint applies to (date, category).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryBook {
    entries: Vec<Entry>,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes and returns the entry with the given identifier, if present.
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    /// Entries recorded on `date`, in insertion order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    /// Entries whose date falls inside `month`, in insertion order.
    pub fn entries_in(&self, month: YearMonth) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| month.contains(entry.date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn entry_builder_sets_optional_fields() {
        let entry = Entry::new(date(2024, 6, 1), 0.0, 1200.0)
            .with_category("食費")
            .with_receipt(ReceiptRef::new("blob:abc123"));

        assert!(!entry.has_income());
        assert!(entry.has_expense());
        assert_eq!(entry.category.as_deref(), Some("食費"));
        assert_eq!(entry.receipt.as_ref().map(ReceiptRef::as_str), Some("blob:abc123"));
    }

    #[test]
    fn identical_entries_get_distinct_ids() {
        let a = Entry::new(date(2024, 6, 1), 0.0, 300.0);
        let b = Entry::new(date(2024, 6, 1), 0.0, 300.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn remove_by_id_takes_only_the_matching_entry() {
        let a = Entry::new(date(2024, 6, 1), 0.0, 300.0);
        let b = Entry::new(date(2024, 6, 1), 0.0, 300.0);
        let survivor = b.id;
        let mut book = EntryBook::from_entries(vec![a.clone(), b]);

        let removed = book.remove_by_id(a.id).expect("entry present");
        assert_eq!(removed.id, a.id);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(0).unwrap().id, survivor);
        assert!(book.remove_by_id(a.id).is_none());
    }

    #[test]
    fn book_serializes_as_bare_array() {
        let book = EntryBook::from_entries(vec![Entry::new(date(2024, 6, 2), 50000.0, 0.0)]);
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['), "unexpected shape: {json}");
        assert!(json.contains("\"2024-06-02\""));

        let parsed: EntryBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }
}
