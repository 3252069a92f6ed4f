//! Row source seam
//!
//! The list adapters only see rows through [`RowSource`]. The SQLite store
//! implements it in `vlist-store`; [`MemoryRowSource`] is the in-process
//! implementation used by tests.

use crate::errors::{Result, VListError};
use crate::model::{Row, TEXT_FIELDS};

/// Lazy, finite sequence of rows in storage order
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<Row>> + 'a>;

/// Read access to a table of rows with sequential identifiers starting at 1
pub trait RowSource {
    /// Total committed rows.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Persistence` if the backing storage is unavailable.
    fn count(&self) -> Result<usize>;

    /// Point lookup by identifier.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::NotFound` if no row has `id`, or
    /// `ExErrorKind::Persistence` on storage failure.
    fn get(&self, id: i64) -> Result<Row>;

    /// All rows in storage order.
    ///
    /// Every call starts over from the first row. Storage failures surface as
    /// an `Err` item; the sequence ends after it.
    fn iterate(&self) -> RowIter<'_>;
}

impl<S: RowSource + ?Sized> RowSource for &S {
    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn get(&self, id: i64) -> Result<Row> {
        (**self).get(id)
    }

    fn iterate(&self) -> RowIter<'_> {
        (**self).iterate()
    }
}

/// In-memory row source with identifiers assigned on push
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<Row>,
}

impl MemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from field tuples; the first gets identifier 1
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = [String; TEXT_FIELDS]>,
    {
        let mut source = Self::new();
        for f in fields {
            source.push(f);
        }
        source
    }

    /// Append a row and return its identifier
    pub fn push(&mut self, fields: [String; TEXT_FIELDS]) -> i64 {
        let id = self.rows.len() as i64 + 1;
        self.rows.push(Row::new(id, fields));
        id
    }

    /// Drop the last row, simulating a shrinking table
    pub fn pop(&mut self) -> Option<Row> {
        self.rows.pop()
    }
}

impl RowSource for MemoryRowSource {
    fn count(&self) -> Result<usize> {
        Ok(self.rows.len())
    }

    fn get(&self, id: i64) -> Result<Row> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|idx| self.rows.get(idx))
            .cloned()
            .ok_or_else(|| VListError::RowNotFound { id }.into())
    }

    fn iterate(&self) -> RowIter<'_> {
        Box::new(self.rows.iter().cloned().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn fields(tag: &str) -> [String; TEXT_FIELDS] {
        std::array::from_fn(|i| format!("{}{}", tag, i))
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut source = MemoryRowSource::new();
        assert_eq!(source.push(fields("x")), 1);
        assert_eq!(source.push(fields("y")), 2);
        assert_eq!(source.count().unwrap(), 2);
    }

    #[test]
    fn test_get_zero_and_negative_are_not_found() {
        let source = MemoryRowSource::from_fields([fields("x")]);
        assert_eq!(source.get(0).unwrap_err().kind(), ExErrorKind::NotFound);
        assert_eq!(source.get(-1).unwrap_err().kind(), ExErrorKind::NotFound);
    }

    #[test]
    fn test_iterate_restarts_on_each_call() {
        let source = MemoryRowSource::from_fields([fields("x"), fields("y")]);
        let mut first = source.iterate();
        assert_eq!(first.next().unwrap().unwrap().id, 1);

        let ids: Vec<i64> = source.iterate().map(|r| r.unwrap().id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_reference_forwards() {
        fn count_of(source: impl RowSource) -> usize {
            source.count().unwrap()
        }

        let source = MemoryRowSource::from_fields([fields("x")]);
        let by_ref: &dyn RowSource = &source;
        assert_eq!(count_of(by_ref), 1);
        assert_eq!(count_of(&source), 1);
    }
}
