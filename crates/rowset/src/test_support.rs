//! Test-only stand-in for a live, backend-native row collection.

use crate::{
    set::ResultSet,
    source::{RowComparator, RowPredicate, RowSource},
    window::WindowSpec,
};

///
/// LiveRows
///
/// Minimal engine fixture: a vector pretending to be a live cursor
/// collection. Count reflects the vector's size at call time and
/// `filtered`/`sorted` return new collections, matching the engine
/// contract this crate depends on.
///

#[derive(Clone, Debug)]
pub(crate) struct LiveRows<T>(pub(crate) Vec<T>);

impl<T: Clone + PartialEq + 'static> RowSource<T> for LiveRows<T> {
    fn count(&self) -> usize {
        self.0.len()
    }

    fn item_at(&self, index: usize) -> T {
        self.0[index].clone()
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.0.iter().position(|row| row == item)
    }

    fn index_of_matching(&self, predicate: &RowPredicate<T>) -> Option<usize> {
        self.0.iter().position(|row| predicate(row))
    }

    fn filtered(&self, predicate: &RowPredicate<T>) -> Box<dyn RowSource<T>> {
        Box::new(Self(
            self.0.iter().filter(|row| predicate(row)).cloned().collect(),
        ))
    }

    fn sorted(&self, compare: &RowComparator<T>, ascending: bool) -> Box<dyn RowSource<T>> {
        let mut rows = self.0.clone();
        rows.sort_by(|a, b| {
            let ord = compare(a, b);
            if ascending { ord } else { ord.reverse() }
        });

        Box::new(Self(rows))
    }
}

/// Build a cursor-variant result set over an in-memory live fixture.
pub(crate) fn live_set(rows: Vec<i64>, window: WindowSpec) -> ResultSet<i64> {
    ResultSet::cursor(Box::new(LiveRows(rows)), window)
}
