// tests/pipeline_execution_tests.rs
mod common; // Reference the common module

use common::*;
use pipeworks::{
  ClosureElement, ClosureFragment, Element, InvocationContext, NativeElement, Pipeline, PipelineElement, PipelineResult,
  PipeworksError, StageControl,
};
use serial_test::serial;

fn closure(fragment: pipeworks::SharedFragment<String>) -> ClosureElement<String> {
  ClosureElement::new(fragment).unwrap()
}

#[tokio::test]
async fn test_pipeline_chains_stage_output_into_next_input() {
  setup_tracing();
  let pipeline = Pipeline::<String>::new()
    .with(closure(uppercase_fragment()))
    .with(closure(suffix_fragment("{ it + '!' }", "!")));

  let run = pipeline.run(Vec::new(), strings(&["a", "b"])).await.unwrap();

  assert_eq!(run.result, PipelineResult::Completed);
  assert_eq!(run.output, strings(&["A!", "B!"]));
}

#[tokio::test]
async fn test_pipeline_hands_args_to_every_stage() {
  setup_tracing();
  let pipeline = Pipeline::<String>::new()
    .with(closure(echo_args_fragment("{ args }")))
    .with(NativeElement::new("echo", ["bound"], echo_args_fragment("echo-impl")).unwrap());

  let run = pipeline.run(strings(&["x"]), Vec::new()).await.unwrap();

  // The second stage only echoes its own args; its input (["x"]) is not forwarded.
  assert_eq!(run.output, strings(&["bound", "x"]));
}

#[tokio::test]
async fn test_pipeline_stops_on_stage_control_stop() {
  setup_tracing();
  let log = new_log();
  let pipeline = Pipeline::<String>::new()
    .with(closure(uppercase_fragment()))
    .with(closure(stopping_fragment("{ stop() }")))
    .with(closure(recording_fragment("{ log << 'never' }", log.clone(), "never")));

  let run = pipeline.run(Vec::new(), strings(&["go"])).await.unwrap();

  assert_eq!(run.result, PipelineResult::Stopped);
  assert_eq!(run.output, strings(&["GO"]));
  assert_eq!(*log.lock(), "");
}

#[tokio::test]
async fn test_pipeline_propagates_stage_error() {
  setup_tracing();
  let log = new_log();
  let pipeline = Pipeline::<String>::new()
    .with(closure(recording_fragment("{ log << 'first' }", log.clone(), "first")))
    .with(closure(failing_fragment("{ fail() }", "I am a bad stage!")))
    .with(closure(recording_fragment("{ log << 'third' }", log.clone(), "third")));

  let result = pipeline.run(Vec::new(), Vec::new()).await;

  match result {
    Err(PipeworksError::FragmentFailure { description, source }) => {
      assert_eq!(description, "{ fail() }");
      assert_eq!(source.to_string(), "Test fragment failed: I am a bad stage!");
    }
    other => panic!("Expected FragmentFailure, got {:?}", other),
  }
  assert_eq!(*log.lock(), "first");
}

#[tokio::test]
async fn test_empty_pipeline_is_an_error() {
  setup_tracing();
  let pipeline = Pipeline::<String>::new();
  let result = pipeline.run(Vec::new(), strings(&["ignored"])).await;
  assert!(matches!(result, Err(PipeworksError::EmptyPipeline)));
}

#[tokio::test]
#[serial]
async fn test_pipeline_can_run_repeatedly_with_fresh_invokers() {
  setup_tracing();
  reset_counters();
  let pipeline = Pipeline::<String>::new()
    .with(closure(counting_fragment("{ count++ }")))
    .with(closure(counting_fragment("{ count++ }")));

  pipeline.run(Vec::new(), Vec::new()).await.unwrap();
  pipeline.run(Vec::new(), Vec::new()).await.unwrap();

  assert_eq!(fragment_calls(), 4);
}

#[test]
fn test_pipeline_describe_joins_stages() {
  let pipeline = Pipeline::<String>::new()
    .with(NativeElement::new("ls", ["-l"], echo_args_fragment("ls-impl")).unwrap())
    .with(closure(uppercase_fragment()))
    .with(NativeElement::new("grep", ["foo bar"], echo_args_fragment("grep-impl")).unwrap());

  assert_eq!(pipeline.describe(), "ls -l | { it.toUpperCase() } | grep 'foo bar'");
  assert_eq!(pipeline.to_string(), pipeline.describe());
  assert_eq!(Pipeline::<String>::new().describe(), "");
}

#[test]
fn test_pipeline_make_invokers_in_order() {
  let pipeline = Pipeline::<String>::new()
    .with(closure(uppercase_fragment()))
    .with(closure(uppercase_fragment()))
    .with(closure(uppercase_fragment()));

  let invokers = pipeline.make_invokers();
  assert_eq!(invokers.len(), 3);
  assert!(invokers.windows(2).all(|pair| pair[0].id() < pair[1].id()));
  assert!(invokers.iter().all(|invoker| !invoker.is_consumed()));
}

#[test]
fn test_pipeline_insert_and_remove() {
  let mut pipeline = Pipeline::<String>::new();
  pipeline.push(closure(suffix_fragment("{ a }", "a")));
  pipeline.push(closure(suffix_fragment("{ c }", "c")));
  pipeline.insert(1, closure(suffix_fragment("{ b }", "b"))).unwrap();
  assert_eq!(pipeline.describe(), "{ a } | { b } | { c }");

  let removed = pipeline.remove(0);
  assert!(removed.is_some());
  assert!(pipeline.remove(10).is_none());
  assert_eq!(pipeline.len(), 2);
  assert_eq!(pipeline.describe(), "{ b } | { c }");
}

#[test]
fn test_pipeline_insert_out_of_range_is_an_error() {
  let mut pipeline = Pipeline::<String>::new();
  pipeline.push(closure(suffix_fragment("{ a }", "a")));

  match pipeline.insert(3, closure(suffix_fragment("{ z }", "z"))) {
    Err(PipeworksError::StageIndexOutOfRange { index, len }) => {
      assert_eq!(index, 3);
      assert_eq!(len, 1);
    }
    other => panic!("Expected StageIndexOutOfRange, got {:?}", other),
  }
  assert_eq!(pipeline.len(), 1);

  // Inserting at `len` appends.
  pipeline.insert(1, closure(suffix_fragment("{ b }", "b"))).unwrap();
  assert_eq!(pipeline.describe(), "{ a } | { b }");
}

#[test]
fn test_pipeline_exposes_its_elements_in_order() {
  let pipeline = Pipeline::<String>::new()
    .with(NativeElement::new("ls", ["-l"], echo_args_fragment("ls-impl")).unwrap())
    .with(closure(uppercase_fragment()));

  let descriptions: Vec<String> = pipeline.elements().iter().map(|e| e.description()).collect();
  assert_eq!(descriptions, strings(&["ls -l", "{ it.toUpperCase() }"]));
  assert!(matches!(pipeline.elements()[0], Element::Native(_)));
  assert!(matches!(pipeline.elements()[1], Element::Closure(_)));
}

#[tokio::test]
async fn test_stage_may_produce_nothing() {
  setup_tracing();
  let swallow = ClosureFragment::new("{ -> }", |_ctx: InvocationContext<String>| async move {
    Ok::<_, anyhow::Error>(StageControl::Continue)
  })
  .shared();
  let pipeline = Pipeline::<String>::new()
    .with(closure(swallow))
    .with(closure(uppercase_fragment()));

  let run = pipeline.run(Vec::new(), strings(&["lost"])).await.unwrap();
  assert_eq!(run.result, PipelineResult::Completed);
  assert!(run.output.is_empty());
}
