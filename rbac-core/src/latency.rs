//! Simulated network latency
//!
//! Every access-layer call awaits [`Latency::delay`] before touching the
//! store. Production wiring uses [`FixedLatency`]; tests inject
//! [`NoLatency`] or [`CountingLatency`] so they complete without waiting.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Delay applied by the mock access layer before each operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Source of the simulated delay.
pub trait Latency: Send + Sync + fmt::Debug + 'static {
    /// Suspend the calling operation for the simulated round trip.
    fn delay(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Sleeps for a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    duration: Duration,
}

impl FixedLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for FixedLatency {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Latency for FixedLatency {
    fn delay(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(self.duration))
    }
}

/// Completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn delay(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(std::future::ready(()))
    }
}

/// Completes immediately and records how many delays were requested.
#[derive(Debug, Default)]
pub struct CountingLatency {
    calls: AtomicUsize,
}

impl CountingLatency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Latency for CountingLatency {
    fn delay(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::ready(()))
    }
}

/// Pick the cheapest implementation for a configured duration.
pub fn from_duration(duration: Duration) -> std::sync::Arc<dyn Latency> {
    if duration.is_zero() {
        std::sync::Arc::new(NoLatency)
    } else {
        std::sync::Arc::new(FixedLatency::new(duration))
    }
}
