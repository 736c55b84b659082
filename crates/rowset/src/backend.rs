use crate::source::{RowComparator, RowPredicate, RowSource};
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// MaterializedRows
///
/// Finite, already-final, in-memory ordered sequence of rows.
///
/// Precondition: the producing query layer has applied any windowing it
/// wanted before handing these rows over. A result set built on this
/// variant reports the full extent of the sequence and never re-windows it.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct MaterializedRows<T>(#[into_iterator(owned, ref)] Vec<T>);

impl<T> MaterializedRows<T> {
    #[must_use]
    pub const fn new(rows: Vec<T>) -> Self {
        Self(rows)
    }

    /// Number of rows in the sequence.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.0.len()
    }

    // Borrow a row by raw index.
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    // Raw index of `item`, if present.
    pub(crate) fn position_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.0.iter().position(|row| row == item)
    }

    // Raw index of the first row matching `predicate`, if any.
    pub(crate) fn position_matching(&self, predicate: &RowPredicate<T>) -> Option<usize> {
        self.0.iter().position(|row| predicate(row))
    }

    // New sequence holding only the rows matching `predicate`.
    pub(crate) fn filtered(&self, predicate: &RowPredicate<T>) -> Self
    where
        T: Clone,
    {
        Self(self.0.iter().filter(|row| predicate(row)).cloned().collect())
    }

    // New sequence ordered by `compare`, reversed when `ascending` is false.
    pub(crate) fn sorted(&self, compare: &RowComparator<T>, ascending: bool) -> Self
    where
        T: Clone,
    {
        let mut rows = self.0.clone();
        rows.sort_by(|a, b| {
            let ord = compare(a, b);
            if ascending { ord } else { ord.reverse() }
        });

        Self(rows)
    }
}

impl<T> From<Vec<T>> for MaterializedRows<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows)
    }
}

///
/// Backend
///
/// Closed tagged union over the two result representations. The active
/// variant is selected once at construction and never changes; dispatch is
/// by exhaustive match, never runtime type inspection, so a missing arm is
/// a compile error rather than a "which engine am I" branch.
///

pub(crate) enum Backend<T> {
    Materialized(MaterializedRows<T>),
    Cursor(Box<dyn RowSource<T>>),
}

impl<T> Backend<T> {
    /// Raw row count of the underlying collection, before any windowing.
    pub(crate) fn raw_count(&self) -> usize {
        match self {
            Self::Materialized(rows) => rows.count(),
            Self::Cursor(source) => source.count(),
        }
    }
}

// Row counts only; cursor sources carry no debuggable state of their own.
impl<T> fmt::Debug for Backend<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Materialized(rows) => f.debug_tuple("Materialized").field(&rows.count()).finish(),
            Self::Cursor(source) => f.debug_tuple("Cursor").field(&source.count()).finish(),
        }
    }
}

///
/// BackendHandle
///
/// Borrowing escape hatch over the backend-native collection for advanced
/// callers. No rows are copied and no windowing is applied; indices on the
/// handle are raw backend indices.
///

pub enum BackendHandle<'a, T> {
    Materialized(&'a [T]),
    Cursor(&'a dyn RowSource<T>),
}

impl<T> BackendHandle<'_, T> {
    /// Raw row count of the borrowed collection.
    #[must_use]
    pub fn raw_count(&self) -> usize {
        match self {
            Self::Materialized(rows) => rows.len(),
            Self::Cursor(source) => source.count(),
        }
    }
}

///
/// TESTS
///
