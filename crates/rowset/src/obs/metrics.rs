use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for result-set operations.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Window derivation
    pub windows_derived: u64,
    pub windows_empty: u64,
    pub windows_clamped: u64,

    // Derived sets
    pub sets_filtered: u64,
    pub sets_sorted: u64,

    // Index translation
    pub probes_out_of_window: u64,

    // Cursors
    pub cursors_drained: u64,
    pub rows_yielded: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&state.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Snapshot the current counters.
#[must_use]
pub(crate) fn report() -> EventState {
    with_state(Clone::clone)
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|state| *state = EventState::default());
}
