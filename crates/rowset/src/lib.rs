//! Core runtime for RowSet: one result-set contract over two structurally
//! different query backends — a materialized, pre-windowed sequence and a
//! live, backend-native cursor collection — plus the windowing and one-shot
//! iteration protocol that unifies them, and the ergonomics exported via
//! the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod backend;
pub mod cursor;
pub mod error;
pub mod obs;
pub mod set;
pub mod source;
pub mod window;

// test
#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, handles, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        cursor::ResultCursor,
        error::AccessError,
        set::ResultSet,
        source::RowSource,
        window::WindowSpec,
    };
}
