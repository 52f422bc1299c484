//! kakeibo-core
//!
//! Store, aggregation, and persistence contract for the household entry
//! book. Depends on kakeibo-domain. No terminal I/O, no direct filesystem
//! access; storage backends are injected through [`EntryStorage`].

pub mod codec;
pub mod entry_store;
pub mod error;
pub mod storage;
pub mod summary_service;

pub use entry_store::EntryStore;
pub use error::CoreError;
pub use storage::EntryStorage;
pub use summary_service::SummaryService;
