use thiserror::Error as ThisError;

///
/// AccessError
///
/// Errors raised by the recoverable accessors on a result set's logical
/// window. Absence from `index_of`/`index_of_matching` is an expected
/// outcome and is carried as `Option`, never as one of these. Nothing in
/// this crate is transient: every failure is a logic or precondition
/// violation, so there is no retry path.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("result set is empty")]
    Empty,

    #[error("index {index} out of range for a window of {count} rows")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("expected at most one row, found {count}")]
    NotUnique { count: usize },
}

///
/// TESTS
///
