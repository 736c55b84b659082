//! Observability: ephemeral runtime counters and sink abstractions.
//!
//! Result-set logic MUST NOT touch counter state directly.
//! All instrumentation flows through MetricsEvent and MetricsSink;
//! `sink::record` is the only bridge into the global state.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventState};
pub use sink::{
    DeriveKind, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink,
};
