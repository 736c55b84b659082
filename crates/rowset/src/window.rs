use serde::{Deserialize, Serialize};

///
/// WindowSpec
///
/// Declarative selection of which sub-range of a result collection is
/// visible. Pure data; consumed when a cursor-backed set derives its
/// logical range. The materialized variant is pre-windowed by its producer
/// and never consults the spec again.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum WindowSpec {
    /// Every row of the underlying collection.
    #[default]
    All,

    /// The first row only.
    First,

    /// The last row only.
    Last,

    /// The first `n` rows; `0` denotes an empty window.
    FirstN(usize),

    /// The last `n` rows; `0` denotes an empty window.
    LastN(usize),
}

impl WindowSpec {
    /// True when the spec can never select a row, regardless of backend size.
    #[must_use]
    pub const fn is_vacuous(self) -> bool {
        matches!(self, Self::FirstN(0) | Self::LastN(0))
    }

    /// Requested row count, where the spec states one explicitly.
    #[must_use]
    pub const fn requested(self) -> Option<usize> {
        match self {
            Self::First | Self::Last => Some(1),
            Self::FirstN(n) | Self::LastN(n) => Some(n),
            Self::All => None,
        }
    }
}

///
/// LogicalRange
///
/// Inclusive raw-index range selected by a window over a backend of known
/// size. Emptiness is never encoded as a degenerate range: call sites that
/// derive ranges express an empty window as `None`, so a one-row range at
/// position zero stays distinct from "no rows".
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogicalRange {
    pub first: usize,
    pub last: usize,
}

impl LogicalRange {
    /// Number of rows selected by this range.
    #[must_use]
    pub const fn count(self) -> usize {
        self.last - self.first + 1
    }

    /// True when `raw` falls inside the range.
    #[must_use]
    pub const fn contains(self, raw: usize) -> bool {
        raw >= self.first && raw <= self.last
    }
}

/// Derive the logical range a window selects over `raw_count` rows.
///
/// Returns `None` for an empty backend or a vacuous window. Whenever a range
/// is returned, `0 <= first <= last < raw_count` holds. Requests for more
/// rows than exist clamp to the backend's extent.
#[must_use]
pub(crate) const fn derive_range(spec: WindowSpec, raw_count: usize) -> Option<LogicalRange> {
    if raw_count == 0 {
        return None;
    }

    let range = match spec {
        WindowSpec::All => LogicalRange {
            first: 0,
            last: raw_count - 1,
        },
        WindowSpec::First => LogicalRange { first: 0, last: 0 },
        WindowSpec::Last => LogicalRange {
            first: raw_count - 1,
            last: raw_count - 1,
        },
        WindowSpec::FirstN(0) | WindowSpec::LastN(0) => return None,
        WindowSpec::FirstN(n) => LogicalRange {
            first: 0,
            last: if n - 1 < raw_count - 1 {
                n - 1
            } else {
                raw_count - 1
            },
        },
        WindowSpec::LastN(n) => LogicalRange {
            first: raw_count.saturating_sub(n),
            last: raw_count - 1,
        },
    };

    Some(range)
}

///
/// TESTS
///
