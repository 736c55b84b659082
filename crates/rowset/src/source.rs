use std::cmp::Ordering;

/// Predicate over borrowed rows.
///
/// Evaluation semantics belong to the caller or the producing engine; this
/// crate only forwards the predicate, it never interprets it.
pub type RowPredicate<T> = dyn Fn(&T) -> bool;

/// Pairwise row comparator in ascending orientation.
///
/// Sort-key extraction and comparison internals stay with the caller; a
/// descending sort is requested through the `ascending` flag, not by
/// inverting the comparator.
pub type RowComparator<T> = dyn Fn(&T, &T) -> Ordering;

///
/// RowSource
///
/// Capability contract a live, backend-native result collection must expose
/// to participate as the cursor variant of a result set. Object-safe so
/// engines can be carried as trait objects without leaking their concrete
/// type into the public contract.
///
/// Engines must implement these with consistent semantics: `count` reflects
/// live size at call time, `item_at` is zero-based, and `filtered`/`sorted`
/// return new collections without mutating the receiver.
///

pub trait RowSource<T> {
    /// Live row count at call time.
    fn count(&self) -> usize;

    /// Row at a zero-based raw index.
    ///
    /// Bounds are the caller's responsibility: this crate checks the logical
    /// window before delegating, and engines are not assumed to bounds-check
    /// themselves.
    fn item_at(&self, index: usize) -> T;

    /// Raw index of `item`, if present.
    fn index_of(&self, item: &T) -> Option<usize>;

    /// Raw index of the first row matching `predicate`, if any.
    fn index_of_matching(&self, predicate: &RowPredicate<T>) -> Option<usize>;

    /// New collection holding only the rows matching `predicate`.
    fn filtered(&self, predicate: &RowPredicate<T>) -> Box<dyn RowSource<T>>;

    /// New collection ordered by `compare`, reversed when `ascending` is
    /// false.
    fn sorted(&self, compare: &RowComparator<T>, ascending: bool) -> Box<dyn RowSource<T>>;
}
