use super::*;
use crate::types::Seed;

fn request(phrase: &str) -> CloudRequest {
  CloudRequest::new(16).with_seed(Seed::from_phrase(phrase))
}

#[test]
fn test_single_request() {
  let mut stage = GenerationStage::default();
  let id = stage.enqueue(request("single"));
  assert_eq!(stage.pending_count(), 1);

  let processed = stage.tick();
  assert_eq!(processed, 1);
  assert_eq!(stage.pending_count(), 0);
  assert_eq!(stage.completed_count(), 1);

  let completions = stage.drain_completions();
  assert_eq!(completions.len(), 1);
  assert_eq!(completions[0].id, id);
  assert!(completions[0].result.is_ok());
}

#[test]
fn test_multiple_requests() {
  let mut stage = GenerationStage::default();
  let ids: Vec<RequestId> = ["a", "b", "c", "d"]
    .iter()
    .map(|p| stage.enqueue(request(p)))
    .collect();

  assert_eq!(stage.pending_count(), 4);
  assert_eq!(stage.tick(), 4);

  let completions = stage.drain_completions();
  let done: Vec<RequestId> = completions.iter().map(|c| c.id).collect();
  assert_eq!(done, ids);
}

#[test]
fn test_empty_tick() {
  let mut stage = GenerationStage::default();
  assert!(stage.is_idle());
  assert_eq!(stage.tick(), 0);
  assert!(stage.drain_completions().is_empty());
}

#[test]
fn test_invalid_request_completes_with_error() {
  let mut stage = GenerationStage::default();
  stage.enqueue(CloudRequest::new(0));
  stage.tick();

  let completions = stage.drain_completions();
  assert!(matches!(
    completions[0].result,
    Err(CloudError::InvalidResolution { resolution: 0, .. })
  ));
  assert!(stage.is_idle());
}

#[test]
fn test_parallel_matches_sequential() {
  let mut stage = GenerationStage::default();
  for phrase in ["x", "y", "z"] {
    stage.enqueue(request(phrase));
  }
  stage.tick();

  for completion in stage.drain_completions() {
    let response = completion.result.unwrap();
    let direct = pipeline::generate(
      &CloudRequest::new(16).with_seed(response.seed),
      stage.config(),
    )
    .unwrap();
    assert_eq!(response.mesh, direct.mesh);
    assert_eq!(response.shadow, direct.shadow);
  }
}

#[cfg(feature = "metrics")]
#[test]
fn test_tick_records_metrics() {
  let mut stage = GenerationStage::default();
  stage.enqueue(request("metrics"));
  stage.enqueue(CloudRequest::new(0));
  stage.tick();
  // rejected requests are not timed
  assert_eq!(stage.metrics().total_generated, 1);
}
