//! Metrics sink boundary.
//!
//! Core result-set logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.

use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// DeriveKind
///

#[derive(Clone, Copy, Debug)]
pub enum DeriveKind {
    Filter,
    Sort,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    WindowDerived {
        raw_count: u64,
        selected: u64,
        clamped: bool,
    },
    WindowEmpty,
    SetDerived {
        kind: DeriveKind,
    },
    OutOfWindowProbe,
    CursorDrained {
        rows: u64,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::WindowDerived { clamped, .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.windows_derived = m.ops.windows_derived.saturating_add(1);
                    if clamped {
                        m.ops.windows_clamped = m.ops.windows_clamped.saturating_add(1);
                    }
                });
            }

            MetricsEvent::WindowEmpty => {
                metrics::with_state_mut(|m| {
                    m.ops.windows_empty = m.ops.windows_empty.saturating_add(1);
                });
            }

            MetricsEvent::SetDerived { kind } => {
                metrics::with_state_mut(|m| match kind {
                    DeriveKind::Filter => {
                        m.ops.sets_filtered = m.ops.sets_filtered.saturating_add(1);
                    }
                    DeriveKind::Sort => {
                        m.ops.sets_sorted = m.ops.sets_sorted.saturating_add(1);
                    }
                });
            }

            MetricsEvent::OutOfWindowProbe => {
                metrics::with_state_mut(|m| {
                    m.ops.probes_out_of_window = m.ops.probes_out_of_window.saturating_add(1);
                });
            }

            MetricsEvent::CursorDrained { rows } => {
                metrics::with_state_mut(|m| {
                    m.ops.cursors_drained = m.ops.cursors_drained.saturating_add(1);
                    m.ops.rows_yielded = m.ops.rows_yielded.saturating_add(rows);
                });
            }
        }
    }
}

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Snapshot the current counter state for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> metrics::EventState {
    metrics::report()
}

/// Reset all counter state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous override is restored on every exit path, including unwind,
/// so a panicking closure cannot leave a stale sink installed.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
