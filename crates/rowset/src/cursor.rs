use crate::{
    obs::sink::{self, MetricsEvent},
    set::ResultSet,
};

///
/// ResultCursor
///
/// One-shot forward iteration handle over a result set's logical window.
/// Yields each row exactly once in ascending logical order, then latches
/// exhausted and returns `None` forever: it never re-emits and never
/// resurrects rows. Non-restartable; obtain a fresh cursor from the set to
/// iterate again (always safe, the set is immutable).
///
/// Position advances strictly monotonically. Holds no external resources,
/// so stopping early is just dropping the cursor. Not for concurrent use:
/// one cursor, one consumer.
///

#[derive(Debug)]
pub struct ResultCursor<'a, T> {
    set: &'a ResultSet<T>,
    position: usize,
    exhausted: bool,
}

impl<'a, T: Clone + PartialEq> ResultCursor<'a, T> {
    pub(crate) const fn new(set: &'a ResultSet<T>) -> Self {
        Self {
            set,
            position: 0,
            exhausted: false,
        }
    }

    /// True once the cursor has latched exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T: Clone + PartialEq> Iterator for ResultCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }

        if self.position >= self.set.count() {
            self.exhausted = true;
            sink::record(MetricsEvent::CursorDrained {
                rows: u64::try_from(self.position).unwrap_or(u64::MAX),
            });
            return None;
        }

        match self.set.item_at(self.position) {
            Ok(row) => {
                self.position += 1;
                Some(row)
            }
            // The live source shrank between the count check and the fetch.
            // Latch rather than panic; the cursor must not re-emit.
            Err(_) => {
                self.exhausted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }

        let remaining = self.set.count().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

///
/// TESTS
///
