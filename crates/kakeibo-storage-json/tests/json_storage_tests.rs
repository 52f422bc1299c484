use std::fs;

use chrono::NaiveDate;
use kakeibo_core::{EntryStorage, EntryStore};
use kakeibo_domain::{Entry, ReceiptRef};
use kakeibo_storage_json::JsonEntryStorage;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn missing_file_reads_as_absent() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonEntryStorage::in_dir(dir.path());

    assert!(storage.read_all().expect("read").is_none());
    let store = EntryStore::open(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn store_round_trips_through_the_file() {
    let dir = tempdir().expect("tempdir");

    let mut store = EntryStore::open(Box::new(JsonEntryStorage::in_dir(dir.path())));
    store
        .add(
            Entry::new(date(2024, 6, 1), 0.0, 1200.0)
                .with_category("食費")
                .with_receipt(ReceiptRef::new("blob:receipt-1")),
        )
        .expect("add entry");
    store
        .add(Entry::new(date(2024, 6, 2), 50000.0, 0.0))
        .expect("add entry");
    let saved = store.entries().clone();
    drop(store);

    let reopened = EntryStore::open(Box::new(JsonEntryStorage::in_dir(dir.path())));
    assert_eq!(reopened.entries(), &saved);
}

#[test]
fn write_replaces_content_and_leaves_no_tmp_file() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonEntryStorage::in_dir(dir.path());

    storage.write_all("[]").expect("first write");
    storage
        .write_all(r#"[{ "date": "2024-06-01", "expense": 300 }]"#)
        .expect("second write");

    let content = storage.read_all().expect("read").expect("present");
    assert!(content.contains("2024-06-01"));

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "tmp files left behind: {leftovers:?}");
}

#[test]
fn corrupt_file_degrades_to_empty_store() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonEntryStorage::in_dir(dir.path());
    fs::write(storage.path(), "not json at all").expect("write corrupt file");

    let store = EntryStore::open(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn partially_corrupt_file_keeps_the_valid_records() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonEntryStorage::in_dir(dir.path());
    fs::write(
        storage.path(),
        r#"[
            { "date": "garbage", "expense": 10 },
            { "date": "2024-06-03", "expense": 800, "category": "食費" }
        ]"#,
    )
    .expect("write file");

    let store = EntryStore::open(Box::new(storage));
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries().get(0).unwrap().expense, 800.0);
}
