//! Generation statistics.
//!
//! Feature-gated and runtime-toggled: without the `metrics` feature every
//! `record_*` call is a no-op.
//!
//! # Usage
//!
//! ```ignore
//! use cloud_voxel::metrics::{GenerationMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! metrics.record_generation(elapsed_us, mesh.count);
//! println!("avg {:.0}us", metrics.avg_generation_us());
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Fixed-capacity history; the oldest sample is evicted first.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, value: u64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Most recent sample.
    pub fn last(&self) -> Option<u64> {
        self.samples.back().copied()
    }

    pub fn sum(&self) -> u64 {
        self.samples.iter().sum()
    }

    /// Mean of the window, `0.0` when empty.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.sum() as f64 / self.samples.len() as f64
    }

    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = *self.samples.iter().min()?;
        let max = *self.samples.iter().max()?;
        Some((min, max))
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Per-stage generation statistics.
#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
    /// Recent generation times in microseconds.
    pub generation_timings: RollingWindow,
    /// Recent vertex counts.
    pub vertex_counts: RollingWindow,
    /// Requests generated since creation.
    pub total_generated: u64,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished generation.
    pub fn record_generation(&mut self, timing_us: u64, vertex_count: usize) {
        if !is_enabled() {
            return;
        }
        self.generation_timings.push(timing_us);
        self.vertex_counts.push(vertex_count as u64);
        self.total_generated += 1;
    }

    pub fn avg_generation_us(&self) -> f64 {
        self.generation_timings.average()
    }

    pub fn avg_vertex_count(&self) -> f64 {
        self.vertex_counts.average()
    }

    /// Clear the windows; the running total is kept.
    pub fn reset(&mut self) {
        self.generation_timings.clear();
        self.vertex_counts.clear();
    }
}
