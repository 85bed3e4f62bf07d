//! Requests running side by side must not influence each other.

use std::collections::HashMap;

use cloud_voxel::{
  generate, wire, CloudConfig, CloudRequest, CloudResponse, CloudWorker, GenerationStage, RequestId, Seed,
};
use rayon::prelude::*;

const PHRASES: [&str; 6] = ["alto", "cirrus", "cumulus", "nimbus", "stratus", "test"];

fn sequential(config: &CloudConfig) -> HashMap<&'static str, CloudResponse> {
  PHRASES
    .iter()
    .map(|&p| {
      let request = CloudRequest::new(24).with_seed(p);
      (p, generate(&request, config).unwrap())
    })
    .collect()
}

fn assert_same_output(a: &CloudResponse, b: &CloudResponse) {
  assert_eq!(a.seed, b.seed);
  assert_eq!(a.mesh, b.mesh);
  assert_eq!(a.shadow, b.shadow);
}

#[test]
fn interleaved_parallel_requests_match_sequential() {
  let config = CloudConfig::default();
  let expected = sequential(&config);

  // Each phrase appears three times, interleaved with the others
  let jobs: Vec<&str> = (0..3).flat_map(|_| PHRASES).collect();
  let results: Vec<(&str, CloudResponse)> = jobs
    .par_iter()
    .map(|&p| (p, generate(&CloudRequest::new(24).with_seed(p), &config).unwrap()))
    .collect();

  for (phrase, response) in &results {
    assert_same_output(response, &expected[phrase]);
  }
}

#[test]
fn worker_results_match_by_id() {
  let config = CloudConfig::default();
  let expected = sequential(&config);

  let mut worker = CloudWorker::new(config);
  let mut submitted: HashMap<RequestId, &str> = HashMap::new();
  for _ in 0..2 {
    for &p in &PHRASES {
      let id = worker.submit(CloudRequest::new(24).with_seed(p));
      submitted.insert(id, p);
    }
  }

  let done = worker.drain();
  assert_eq!(done.len(), submitted.len());
  for completion in done {
    let phrase = submitted[&completion.id];
    let response = completion.result.unwrap();
    assert_eq!(response.id, completion.id);
    assert_same_output(&response, &expected[phrase]);
  }
}

#[test]
fn stage_and_worker_agree() {
  let config = CloudConfig::default();
  let seed = Seed::from_phrase("agree");

  let mut stage = GenerationStage::new(config);
  stage.enqueue(CloudRequest::new(32).with_seed(seed));
  stage.tick();
  let from_stage = stage.drain_completions().remove(0).result.unwrap();

  let mut worker = CloudWorker::new(config);
  worker.submit(CloudRequest::new(32).with_seed(seed));
  let from_worker = worker.recv().unwrap().result.unwrap();

  assert_same_output(&from_stage, &from_worker);
}

#[test]
fn packed_worker_response_survives_the_boundary() {
  let mut worker = CloudWorker::default();
  worker.submit(CloudRequest::new(32).with_seed("packed"));
  let response = worker.recv().unwrap().result.unwrap();

  let bytes = wire::pack(&response);
  let decoded = wire::unpack(&bytes).unwrap();
  assert_eq!(decoded, response);
}
