//! SQLite row store
//!
//! Owns the connection to the `test` table and answers the three questions a
//! list view asks: how many rows, which row has this identifier, and every
//! row in order.

#![allow(clippy::result_large_err)]

use crate::config::{StoreConfig, DEFAULT_PAGE_SIZE};
use crate::errors::{from_rusqlite, out_of_range, row_not_found, seed_aborted, Result};
use crate::schema::{
    COUNT_ROWS, CREATE_TABLE_SQL, INSERT_ROW, SELECT_BY_ID, SELECT_PAGE, TABLE, TABLE_EXISTS,
};
use crate::seed::RandomWords;
use crate::db;
use rusqlite::{Connection, OptionalExtension};
use std::collections::VecDeque;
use vlist_core::model::TEXT_FIELDS;
use vlist_core::{Row, RowIter, RowSource};

/// Read access to the `test` table, seeded on first open
pub struct RowStore {
    conn: Connection,
    page_size: usize,
}

impl RowStore {
    /// Open the database at `config.db_path`, seeding it if the table is absent.
    ///
    /// # Errors
    ///
    /// `Persistence` if the file cannot be opened or seeding fails. A failed
    /// seed leaves no table behind, so the next open seeds again.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = db::open(&config.db_path)?;
        db::configure(&conn)?;
        let mut store = Self::from_connection(conn).with_page_size(config.page_size);

        if !store.table_exists()? {
            let words = match config.rng_seed {
                Some(seed) => RandomWords::seeded(seed),
                None => RandomWords::from_entropy(),
            };
            tracing::info!(
                rows = config.seed_rows,
                path = %config.db_path.display(),
                "creating database, please wait..."
            );
            store.seed_with(words.take(config.seed_rows).map(Ok))?;
        }

        Ok(store)
    }

    /// In-memory store seeded with `seed_rows` reproducible rows
    ///
    /// # Errors
    ///
    /// `Persistence` if SQLite fails.
    pub fn open_in_memory(seed_rows: usize) -> Result<Self> {
        let conn = db::open_in_memory()?;
        let mut store = Self::from_connection(conn);
        store.seed_with(RandomWords::seeded(0).take(seed_rows).map(Ok))?;
        Ok(store)
    }

    /// Wrap a prepared connection. The table is not created.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Rows fetched per query by [`RowSource::iterate`]; zero is treated as one
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Whether the `test` table exists
    ///
    /// # Errors
    ///
    /// `Persistence` if the catalogue cannot be read.
    pub fn table_exists(&self) -> Result<bool> {
        let found = self
            .conn
            .query_row(TABLE_EXISTS, [TABLE], |_| Ok(()))
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }

    /// Create the table and insert `rows`, all in one transaction.
    ///
    /// Identifiers are assigned 1, 2, 3, ... in insertion order. Returns the
    /// number of rows inserted. On any error the transaction rolls back,
    /// including the table creation, so no partial table is ever visible.
    ///
    /// # Errors
    ///
    /// `Persistence` (with the first failure as source) if the table already
    /// exists, a row item is an error, or an insert fails.
    pub fn seed_with<I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<[String; TEXT_FIELDS]>>,
    {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        tx.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| seed_aborted(0, &from_rusqlite(e)))?;

        let mut inserted = 0;
        {
            let mut insert = tx
                .prepare(INSERT_ROW)
                .map_err(|e| seed_aborted(0, &from_rusqlite(e)))?;
            for row in rows {
                let fields = row.map_err(|e| seed_aborted(inserted, &e))?;
                insert
                    .execute(rusqlite::params![
                        fields[0], fields[1], fields[2], fields[3], fields[4]
                    ])
                    .map_err(|e| seed_aborted(inserted, &from_rusqlite(e)))?;
                inserted += 1;
                if inserted % 10_000 == 0 {
                    tracing::debug!(inserted, "seeding");
                }
            }
        }

        tx.commit()
            .map_err(|e| seed_aborted(inserted, &from_rusqlite(e)))?;
        tracing::info!(inserted, "database seeded");
        Ok(inserted)
    }

    fn fetch_page(&self, after: i64, limit: usize) -> Result<Vec<Row>> {
        let limit = i64::try_from(limit).map_err(|_| out_of_range("fetch_page", limit))?;
        let mut stmt = self.conn.prepare_cached(SELECT_PAGE).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(rusqlite::params![after, limit], read_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}

/// Map a result row to a [`Row`]; NULL text reads as empty
fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
    let id: i64 = row.get(0)?;
    let mut fields: [String; TEXT_FIELDS] = Default::default();
    for (i, field) in fields.iter_mut().enumerate() {
        *field = row.get::<_, Option<String>>(i + 1)?.unwrap_or_default();
    }
    Ok(Row::new(id, fields))
}

impl RowSource for RowStore {
    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(COUNT_ROWS, [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        usize::try_from(count).map_err(|_| out_of_range("count", count))
    }

    fn get(&self, id: i64) -> Result<Row> {
        let mut stmt = self.conn.prepare_cached(SELECT_BY_ID).map_err(from_rusqlite)?;
        let row = stmt
            .query_row([id], read_row)
            .optional()
            .map_err(from_rusqlite)?;
        tracing::trace!(id, found = row.is_some(), "point lookup");
        row.ok_or_else(|| row_not_found(id))
    }

    fn iterate(&self) -> RowIter<'_> {
        Box::new(Pages {
            store: self,
            after: 0,
            buffered: VecDeque::new(),
            exhausted: false,
        })
    }
}

/// Keyset-paginated walk over the table in identifier order
struct Pages<'s> {
    store: &'s RowStore,
    after: i64,
    buffered: VecDeque<Row>,
    exhausted: bool,
}

impl Iterator for Pages<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffered.is_empty() && !self.exhausted {
            let page_size = self.store.page_size;
            match self.store.fetch_page(self.after, page_size) {
                Ok(page) => {
                    self.exhausted = page.len() < page_size;
                    if let Some(last) = page.last() {
                        self.after = last.id;
                    }
                    self.buffered.extend(page);
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
        self.buffered.pop_front().map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlist_core::ExErrorKind;

    fn fixed(tag: usize) -> [String; TEXT_FIELDS] {
        std::array::from_fn(|f| format!("{}-{}", tag, f))
    }

    fn store_with(rows: usize) -> RowStore {
        let mut store = RowStore::from_connection(db::open_in_memory().unwrap());
        store.seed_with((0..rows).map(|r| Ok(fixed(r)))).unwrap();
        store
    }

    #[test]
    fn test_seed_assigns_ids_from_one() {
        let store = store_with(3);
        assert_eq!(store.get(1).unwrap().fields[0], "0-0");
        assert_eq!(store.get(3).unwrap().fields[4], "2-4");
    }

    #[test]
    fn test_missing_table_is_persistence_error() {
        let store = RowStore::from_connection(db::open_in_memory().unwrap());
        assert!(!store.table_exists().unwrap());
        assert_eq!(store.count().unwrap_err().kind(), ExErrorKind::Persistence);
        let first = store.iterate().next().unwrap();
        assert_eq!(first.unwrap_err().kind(), ExErrorKind::Persistence);
    }

    #[test]
    fn test_iterate_ends_after_error() {
        let store = RowStore::from_connection(db::open_in_memory().unwrap());
        let items: Vec<_> = store.iterate().collect();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_pages_cross_boundaries() {
        let store = store_with(10).with_page_size(3);
        let ids: Vec<i64> = store.iterate().map(|r| r.unwrap().id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let store = store_with(6).with_page_size(3);
        assert_eq!(store.iterate().count(), 6);
    }

    #[test]
    fn test_null_text_reads_as_empty() {
        let store = store_with(0);
        store
            .connection()
            .execute("INSERT INTO test (f1) VALUES ('only')", [])
            .unwrap();
        let row = store.get(1).unwrap();
        assert_eq!(row.fields[0], "only");
        assert_eq!(row.fields[1], "");
    }

    #[test]
    fn test_open_in_memory_is_reproducible() {
        let a = RowStore::open_in_memory(4).unwrap();
        let b = RowStore::open_in_memory(4).unwrap();
        assert_eq!(a.get(4).unwrap(), b.get(4).unwrap());
    }
}
