//! kakeibo-domain
//!
//! Pure domain models for the household entry book (Entry, EntryBook,
//! CategoryRegistry, calendar primitives, derived report types).
//! No I/O, no storage. Only data types and core helpers.

pub mod calendar;
pub mod category;
pub mod entry;
pub mod report;

pub use calendar::*;
pub use category::*;
pub use entry::*;
pub use report::*;
