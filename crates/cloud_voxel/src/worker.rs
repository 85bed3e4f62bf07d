//! Channel-based request/response boundary.
//!
//! # Flow
//!
//! ```text
//! Caller                              Async (rayon)
//! ┌────────────────┐
//! │ submit(request)│──── rayon::spawn ───►┌──────────────────┐
//! └────────────────┘                      │ pipeline::       │
//!                                         │   generate()     │
//!                                         └────────┬─────────┘
//! ┌────────────────┐                               │ send
//! │ poll() / recv()│◄──── crossbeam channel ───────┘
//! │ match by id    │
//! └────────────────┘
//! ```
//!
//! Responses arrive in completion order, not submission order; callers match
//! them to requests by [`RequestId`].
//!
//! # Usage
//!
//! ```ignore
//! let mut worker = CloudWorker::new(CloudConfig::default());
//! let id = worker.submit(CloudRequest::new(64).with_seed("demo"));
//!
//! // Poll each frame
//! if let Some(done) = worker.poll() {
//!     assert_eq!(done.id, id);
//! }
//! ```

use crossbeam_channel::{self as channel, Receiver, Sender, TryRecvError};
use web_time::Instant;

use crate::config::CloudConfig;
use crate::pipeline;
use crate::task_queue::GenerationCompletion;
use crate::types::{CloudRequest, RequestId};

/// Non-blocking cloud generator running on rayon's thread pool.
pub struct CloudWorker {
  config: CloudConfig,
  sender: Sender<GenerationCompletion>,
  receiver: Receiver<GenerationCompletion>,
  in_flight: usize,
}

impl Default for CloudWorker {
  fn default() -> Self {
    Self::new(CloudConfig::default())
  }
}

impl CloudWorker {
  pub fn new(config: CloudConfig) -> Self {
    let (sender, receiver) = channel::unbounded();
    Self {
      config,
      sender,
      receiver,
      in_flight: 0,
    }
  }

  /// Start generating `request` in the background.
  pub fn submit(&mut self, request: CloudRequest) -> RequestId {
    let id = request.id;
    let sender = self.sender.clone();
    let config = self.config;
    self.in_flight += 1;

    rayon::spawn(move || {
      let start = Instant::now();
      let result = pipeline::generate(&request, &config);
      let generation_time_us = start.elapsed().as_micros() as u64;
      // Receiver dropped = worker gone, nobody wants the result
      let _ = sender.send(GenerationCompletion {
        id,
        result,
        generation_time_us,
      });
    });

    #[cfg(feature = "tracing")]
    tracing::trace!(id = id.raw(), "request submitted");
    id
  }

  /// Take one finished result if any is ready.
  pub fn poll(&mut self) -> Option<GenerationCompletion> {
    match self.receiver.try_recv() {
      Ok(completion) => {
        self.in_flight -= 1;
        Some(completion)
      }
      Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
    }
  }

  /// Block until the next result arrives. Returns `None` when nothing is in
  /// flight.
  pub fn recv(&mut self) -> Option<GenerationCompletion> {
    if self.in_flight == 0 {
      return None;
    }
    let completion = self.receiver.recv().ok()?;
    self.in_flight -= 1;
    Some(completion)
  }

  /// Block until every submitted request has finished.
  pub fn drain(&mut self) -> Vec<GenerationCompletion> {
    let mut done = Vec::with_capacity(self.in_flight);
    while let Some(completion) = self.recv() {
      done.push(completion);
    }
    done
  }

  /// Requests submitted but not yet received.
  pub fn in_flight(&self) -> usize {
    self.in_flight
  }

  /// Check if any request is still running.
  pub fn is_busy(&self) -> bool {
    self.in_flight > 0
  }
}
