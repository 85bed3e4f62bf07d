//! Batch stage for parallel cloud generation.
//!
//! Following the IStage pattern: Enqueue → Tick → Completions
//!
//! Each tick drains every pending request onto rayon's pool. Requests share
//! nothing, so results are identical to running them one by one.

use rayon::prelude::*;
use web_time::Instant;

use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::metrics::GenerationMetrics;
use crate::pipeline;
use crate::types::{CloudRequest, CloudResponse, RequestId};

/// Finished request.
pub struct GenerationCompletion {
  /// Request ID this completion corresponds to
  pub id: RequestId,
  /// Generated cloud, or why the request was rejected
  pub result: Result<CloudResponse, CloudError>,
  /// Raw generation time in microseconds
  pub generation_time_us: u64,
}

/// Generation stage that processes requests in parallel.
pub struct GenerationStage {
  config: CloudConfig,
  /// Pending requests waiting to be processed
  pending: Vec<CloudRequest>,
  /// Completed results ready to be collected
  completed: Vec<GenerationCompletion>,
  metrics: GenerationMetrics,
}

impl Default for GenerationStage {
  fn default() -> Self {
    Self::new(CloudConfig::default())
  }
}

impl GenerationStage {
  pub fn new(config: CloudConfig) -> Self {
    Self {
      config,
      pending: Vec::new(),
      completed: Vec::new(),
      metrics: GenerationMetrics::default(),
    }
  }

  pub fn config(&self) -> &CloudConfig {
    &self.config
  }

  /// Queue a request, returning its ID.
  pub fn enqueue(&mut self, request: CloudRequest) -> RequestId {
    let id = request.id;
    self.pending.push(request);
    id
  }

  /// Process pending requests in parallel and move completions to output.
  /// Returns the number of requests processed this tick.
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();
    let config = &self.config;

    let completions: Vec<GenerationCompletion> = requests
      .into_par_iter()
      .map(|request| {
        let start = Instant::now();
        let result = pipeline::generate(&request, config);
        let generation_time_us = start.elapsed().as_micros() as u64;
        GenerationCompletion {
          id: request.id,
          result,
          generation_time_us,
        }
      })
      .collect();

    for completion in &completions {
      if let Ok(response) = &completion.result {
        self
          .metrics
          .record_generation(completion.generation_time_us, response.mesh.count);
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count, "generation tick");
    self.completed.extend(completions);
    count
  }

  /// Take all completed results.
  pub fn drain_completions(&mut self) -> Vec<GenerationCompletion> {
    std::mem::take(&mut self.completed)
  }

  /// Number of pending requests.
  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }

  /// Timing statistics gathered so far (empty without the `metrics` feature).
  pub fn metrics(&self) -> &GenerationMetrics {
    &self.metrics
  }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;
