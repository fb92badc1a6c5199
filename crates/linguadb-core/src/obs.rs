//! Observability: resolution telemetry and the sink boundary.
//!
//! Resolver logic MUST NOT touch counter state directly.
//! All instrumentation flows through ResolveEvent and MetricsSink;
//! this module is the only bridge between resolution and the global
//! metrics state.

use crate::locale::Locale;
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
    static METRICS: RefCell<ResolveMetrics> = const { RefCell::new(ResolveMetrics::new()) };
}

///
/// ResolveEvent
///
/// Exactly one event is emitted per resolve call, classified by which
/// branch of the fallback chain served it.
///

#[derive(Clone, Copy, Debug)]
pub enum ResolveEvent {
    /// The requested locale was present.
    Hit { locale: Locale },
    /// The fallback locale served a request for another locale.
    Fallback { requested: Locale },
    /// Neither requested nor fallback present; served best-effort.
    LastResort { requested: Locale, served: Locale },
    /// No translations at all; base fields only.
    Miss { requested: Locale },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: ResolveEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: ResolveEvent) {
        METRICS.with_borrow_mut(|m| match event {
            ResolveEvent::Hit { .. } => m.hits += 1,
            ResolveEvent::Fallback { .. } => m.fallbacks += 1,
            ResolveEvent::LastResort { .. } => m.last_resorts += 1,
            ResolveEvent::Miss { .. } => m.misses += 1,
        });
    }
}

/// Route one event to the scoped sink, or the global one.
pub(crate) fn record(event: ResolveEvent) {
    let scoped = SINK_OVERRIDE.with_borrow(Clone::clone);

    match scoped {
        Some(sink) => sink.record(event),
        None => GlobalMetricsSink.record(event),
    }
}

/// Run `f` with `sink` installed as this thread's sink.
///
/// The previous sink is restored on exit. Intended for tests and
/// embedders that aggregate their own telemetry.
pub fn with_sink<R>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> R) -> R {
    let prev = SINK_OVERRIDE.with_borrow_mut(|s| s.replace(sink));
    let out = f();
    SINK_OVERRIDE.with_borrow_mut(|s| *s = prev);

    out
}

///
/// ResolveMetrics
///
/// Point-in-time counter snapshot for observability surfaces.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ResolveMetrics {
    pub hits: u64,
    pub fallbacks: u64,
    pub last_resorts: u64,
    pub misses: u64,
}

impl ResolveMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hits: 0,
            fallbacks: 0,
            last_resorts: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.hits + self.fallbacks + self.last_resorts + self.misses
    }
}

/// Snapshot of this thread's resolve counters.
#[must_use]
pub fn metrics_snapshot() -> ResolveMetrics {
    METRICS.with_borrow(|m| *m)
}

/// Reset this thread's resolve counters. Used between test suites.
pub fn metrics_reset() {
    METRICS.with_borrow_mut(|m| *m = ResolveMetrics::new());
}

///
/// TESTS
///
