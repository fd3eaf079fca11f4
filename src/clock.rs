use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Time source for animations, in milliseconds.
///
/// Only differences between readings matter, so any monotonic origin works.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Monotonic wall clock measured from its creation.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A manually driven clock for tests and deterministic replay.
///
/// Clones share the same time, so one handle can live inside the engine while another
/// advances it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(now_ms.to_bits())),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.bits.store(now_ms.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.set(self.now_ms() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
