use crate::{
    backend::{Backend, BackendHandle, MaterializedRows},
    cursor::ResultCursor,
    error::AccessError,
    obs::sink::{self, DeriveKind, MetricsEvent},
    source::{RowComparator, RowPredicate, RowSource},
    window::{LogicalRange, WindowSpec, derive_range},
};

///
/// ResultSet
///
/// Unified, immutable view over one backend result representation plus the
/// window spec that produced it. All index-taking operations are relative
/// to the logical window, never the raw backend. Derived operations return
/// new sets; nothing mutates in place, so a set can be read concurrently
/// provided the engine behind a cursor variant gives the same guarantee.
///

#[derive(Debug)]
pub struct ResultSet<T> {
    backend: Backend<T>,
    window: WindowSpec,
}

impl<T: Clone + PartialEq> ResultSet<T> {
    ///
    /// CONSTRUCTORS
    ///

    /// Wrap an already-final materialized sequence.
    ///
    /// Precondition: the producing query layer has applied any windowing it
    /// wanted before construction. The set reports the full extent of the
    /// rows and never re-windows them; the recorded spec is `All`.
    #[must_use]
    pub fn materialized(rows: impl Into<MaterializedRows<T>>) -> Self {
        Self {
            backend: Backend::Materialized(rows.into()),
            window: WindowSpec::All,
        }
    }

    /// Wrap a live backend-native collection, windowed on demand by `window`.
    #[must_use]
    pub fn cursor(source: Box<dyn RowSource<T>>, window: WindowSpec) -> Self {
        let raw_count = source.count();
        match derive_range(window, raw_count) {
            Some(range) => {
                let selected = range.count();
                let clamped = match window.requested() {
                    Some(requested) => selected < requested,
                    None => false,
                };
                sink::record(MetricsEvent::WindowDerived {
                    raw_count: u64::try_from(raw_count).unwrap_or(u64::MAX),
                    selected: u64::try_from(selected).unwrap_or(u64::MAX),
                    clamped,
                });
            }
            None => sink::record(MetricsEvent::WindowEmpty),
        }

        Self {
            backend: Backend::Cursor(source),
            window,
        }
    }

    ///
    /// WINDOWING
    ///

    /// The window spec this set was built with.
    ///
    /// Constrains the cursor variant only; the materialized variant was
    /// windowed by its producer before construction.
    #[must_use]
    pub const fn window(&self) -> WindowSpec {
        self.window
    }

    /// Raw-index range visible through the logical window.
    ///
    /// `None` means the window is empty. A one-row window at raw position
    /// zero is `Some`, so emptiness is never conflated with a single result.
    /// Recomputed on every call: the cursor variant's count reflects live
    /// backend size.
    #[must_use]
    pub fn logical_range(&self) -> Option<LogicalRange> {
        match &self.backend {
            // Pre-windowed: the full extent is the range.
            Backend::Materialized(rows) => derive_range(WindowSpec::All, rows.count()),
            Backend::Cursor(source) => derive_range(self.window, source.count()),
        }
    }

    /// Number of rows visible through the logical window.
    #[must_use]
    pub fn count(&self) -> usize {
        self.logical_range().map_or(0, LogicalRange::count)
    }

    /// True when the logical window holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logical_range().is_none()
    }

    ///
    /// ACCESSORS
    ///

    /// Row at `index`, relative to the logical window.
    pub fn item_at(&self, index: usize) -> Result<T, AccessError> {
        let Some(range) = self.logical_range() else {
            return Err(AccessError::IndexOutOfRange { index, count: 0 });
        };

        let count = range.count();
        if index >= count {
            return Err(AccessError::IndexOutOfRange { index, count });
        }

        let raw = range.first + index;
        match &self.backend {
            Backend::Materialized(rows) => rows
                .get(raw)
                .cloned()
                .ok_or(AccessError::IndexOutOfRange { index, count }),
            Backend::Cursor(source) => Ok(source.item_at(raw)),
        }
    }

    /// Row at `index`, panicking on a window violation.
    ///
    /// Fast-path equivalent of [`Self::item_at`] for callers that have
    /// already established the bound: an out-of-window index here is a
    /// programmer error, not a recoverable condition.
    #[must_use]
    pub fn at(&self, index: usize) -> T {
        match self.item_at(index) {
            Ok(row) => row,
            Err(err) => panic!("{err}"),
        }
    }

    /// First row of the window.
    pub fn first(&self) -> Result<T, AccessError> {
        if self.is_empty() {
            return Err(AccessError::Empty);
        }

        self.item_at(0)
    }

    /// Last row of the window.
    pub fn last(&self) -> Result<T, AccessError> {
        let count = self.count();
        if count == 0 {
            return Err(AccessError::Empty);
        }

        self.item_at(count - 1)
    }

    ///
    /// Exact cardinality helpers
    ///

    /// Require exactly one row.
    pub fn one(&self) -> Result<T, AccessError> {
        match self.count() {
            0 => Err(AccessError::Empty),
            1 => self.item_at(0),
            count => Err(AccessError::NotUnique { count }),
        }
    }

    /// Require at most one row.
    pub fn one_opt(&self) -> Result<Option<T>, AccessError> {
        match self.count() {
            0 => Ok(None),
            1 => self.item_at(0).map(Some),
            count => Err(AccessError::NotUnique { count }),
        }
    }

    ///
    /// SEARCH
    ///

    /// Logical index of `item`, or `None` when absent or outside the window.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        let range = self.logical_range()?;
        let raw = match &self.backend {
            Backend::Materialized(rows) => rows.position_of(item),
            Backend::Cursor(source) => source.index_of(item),
        }?;

        Self::translate(range, raw)
    }

    /// Logical index of the first row matching `predicate`.
    ///
    /// The materialized variant resolves the match against its unfiltered
    /// rows; the cursor variant delegates to the engine's native predicate
    /// search. Either way the raw hit is translated into the window, and a
    /// hit outside it is `None`.
    #[must_use]
    pub fn index_of_matching(&self, predicate: &RowPredicate<T>) -> Option<usize> {
        let range = self.logical_range()?;
        let raw = match &self.backend {
            Backend::Materialized(rows) => rows.position_matching(predicate),
            Backend::Cursor(source) => source.index_of_matching(predicate),
        }?;

        Self::translate(range, raw)
    }

    // Translate a raw backend index into the logical window.
    fn translate(range: LogicalRange, raw: usize) -> Option<usize> {
        if range.contains(raw) {
            Some(raw - range.first)
        } else {
            sink::record(MetricsEvent::OutOfWindowProbe);
            None
        }
    }

    ///
    /// DERIVATION
    ///

    /// New set holding only the rows matching `predicate`.
    ///
    /// The cursor variant delegates to the engine's native filter and the
    /// returned set's window resets to `All`: the filtered result is a
    /// fresh, unwindowed collection. Filtering the materialized variant
    /// filters the (already windowed) rows it owns.
    #[must_use]
    pub fn filtered(&self, predicate: &RowPredicate<T>) -> Self {
        sink::record(MetricsEvent::SetDerived {
            kind: DeriveKind::Filter,
        });

        let backend = match &self.backend {
            Backend::Materialized(rows) => Backend::Materialized(rows.filtered(predicate)),
            Backend::Cursor(source) => Backend::Cursor(source.filtered(predicate)),
        };

        Self {
            backend,
            window: WindowSpec::All,
        }
    }

    /// New set ordered by `compare`, reversed when `ascending` is false.
    ///
    /// Same shape as [`Self::filtered`]: the returned set's window is `All`.
    #[must_use]
    pub fn sorted(&self, compare: &RowComparator<T>, ascending: bool) -> Self {
        sink::record(MetricsEvent::SetDerived {
            kind: DeriveKind::Sort,
        });

        let backend = match &self.backend {
            Backend::Materialized(rows) => Backend::Materialized(rows.sorted(compare, ascending)),
            Backend::Cursor(source) => Backend::Cursor(source.sorted(compare, ascending)),
        };

        Self {
            backend,
            window: WindowSpec::All,
        }
    }

    ///
    /// ITERATION / ESCAPE
    ///

    /// One-shot forward cursor over the logical window.
    ///
    /// The cursor is non-restartable; obtain a fresh one from this set to
    /// iterate again.
    #[must_use]
    pub const fn iter(&self) -> ResultCursor<'_, T> {
        ResultCursor::new(self)
    }

    /// Materialize the logical window in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Escape hatch: borrow the underlying backend-native collection.
    ///
    /// No rows are copied and the logical window is NOT applied; indices on
    /// the handle are raw backend indices.
    #[must_use]
    pub fn raw_backend(&self) -> BackendHandle<'_, T> {
        match &self.backend {
            Backend::Materialized(rows) => BackendHandle::Materialized(rows.as_slice()),
            Backend::Cursor(source) => BackendHandle::Cursor(source.as_ref()),
        }
    }
}

impl<'a, T: Clone + PartialEq> IntoIterator for &'a ResultSet<T> {
    type Item = T;
    type IntoIter = ResultCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// TESTS
///
