use async_trait::async_trait;
use std::time::Duration;

/// Simulated network delay.
///
/// The browser build sleeps on a `setTimeout`-backed timer, native tests use
/// tokio's clock, and [`NoLatency`] returns immediately. Futures are not
/// required to be `Send` because the dashboard runs on a single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait Latency {
    async fn sleep(&self, duration: Duration);
}

/// Resolves immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn sleep(&self, _duration: Duration) {}
}
