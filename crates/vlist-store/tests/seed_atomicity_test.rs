// Integration tests for seeding atomicity
// A seed that fails part way must leave no table; the next open seeds again.

use rusqlite::Connection;
use tempfile::TempDir;
use vlist_core::model::TEXT_FIELDS;
use vlist_core::{ExError, ExErrorKind, RowSource};
use vlist_store::{RowStore, StoreConfig};

fn fields(r: usize) -> [String; TEXT_FIELDS] {
    std::array::from_fn(|f| format!("{}:{}", r, f))
}

/// Yields `good` rows, then an error
fn failing_after(good: usize) -> impl Iterator<Item = vlist_core::Result<[String; TEXT_FIELDS]>> {
    (0..=good).map(move |r| {
        if r < good {
            Ok(fields(r))
        } else {
            Err(ExError::new(ExErrorKind::Io).with_message("generator crashed"))
        }
    })
}

#[test]
fn test_failed_seed_leaves_no_table() {
    // Given: an empty database file
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.sqlite");
    let mut store = RowStore::from_connection(Connection::open(&path).unwrap());

    // When: seeding fails after 3 rows
    let err = store.seed_with(failing_after(3)).unwrap_err();

    // Then: the error says how far it got and why
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(err.message().contains("3 rows"), "{}", err);
    assert_eq!(err.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));

    // And: nothing was committed, not even the table
    assert!(!store.table_exists().unwrap());
    drop(store);
    let conn = Connection::open(&path).unwrap();
    let tables: i64 = conn
        .query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get(0))
        .unwrap();
    assert_eq!(tables, 0);
}

#[test]
fn test_open_after_failed_seed_seeds_afresh() {
    // Given: a database where a previous seed attempt failed
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.sqlite");
    {
        let mut store = RowStore::from_connection(Connection::open(&path).unwrap());
        assert!(store.seed_with(failing_after(5)).is_err());
    }

    // When: the application starts normally
    let config = StoreConfig::default()
        .with_db_path(&path)
        .with_seed_rows(12)
        .with_rng_seed(Some(9));
    let store = RowStore::open(&config).unwrap();

    // Then: a complete table exists with the configured volume
    assert_eq!(store.count().unwrap(), 12);
}

#[test]
fn test_seed_into_existing_table_is_refused() {
    let mut store = RowStore::open_in_memory(2).unwrap();

    let err = store.seed_with(failing_after(1)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(store.count().unwrap(), 2, "existing rows untouched");
}

#[test]
fn test_successful_seed_reports_rows() {
    let mut store = RowStore::from_connection(Connection::open_in_memory().unwrap());
    let inserted = store.seed_with((0..7).map(|r| Ok(fields(r)))).unwrap();
    assert_eq!(inserted, 7);
    assert_eq!(store.count().unwrap(), 7);
}
