//! Shared helpers for vlist-core integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use vlist_core::model::TEXT_FIELDS;
use vlist_core::{MemoryRowSource, Result, Row, RowIter, RowSource};

/// Row `r` (zero-based) holds `a{r}`, `b{r}`, `c{r}`, `d{r}`, `e{r}`
pub fn lettered_fields(r: usize) -> [String; TEXT_FIELDS] {
    std::array::from_fn(|f| format!("{}{}", (b'a' + f as u8) as char, r))
}

pub fn lettered_source(rows: usize) -> MemoryRowSource {
    MemoryRowSource::from_fields((0..rows).map(lettered_fields))
}

/// Wraps a source and records every identifier passed to `get`
pub struct RecordingSource<S> {
    pub inner: S,
    pub gets: RefCell<Vec<i64>>,
    pub counts: RefCell<usize>,
}

impl<S> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            gets: RefCell::new(Vec::new()),
            counts: RefCell::new(0),
        }
    }

    pub fn gets(&self) -> Vec<i64> {
        self.gets.borrow().clone()
    }
}

impl<S: RowSource> RowSource for RecordingSource<S> {
    fn count(&self) -> Result<usize> {
        *self.counts.borrow_mut() += 1;
        self.inner.count()
    }

    fn get(&self, id: i64) -> Result<Row> {
        self.gets.borrow_mut().push(id);
        self.inner.get(id)
    }

    fn iterate(&self) -> RowIter<'_> {
        self.inner.iterate()
    }
}
