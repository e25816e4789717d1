// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use pipeworks::{ClosureFragment, InvocationContext, PipeworksError, SharedFragment, StageControl};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Pipeworks error: {0}")]
  Pipeworks(String), // Store as String for Eq comparison

  #[error("Test fragment failed: {0}")]
  Fragment(String),
}

impl From<PipeworksError> for TestError {
  fn from(err: PipeworksError) -> Self {
    TestError::Pipeworks(format!("{:?}", err))
  }
}

/// Shared log that test fragments append to.
pub type Log = Arc<Mutex<String>>;

pub fn new_log() -> Log {
  Arc::new(Mutex::new(String::new()))
}

// --- Common Fragment Creators ---

/// Appends `mark` to `log` each time it is invoked.
pub fn recording_fragment(source: &'static str, log: Log, mark: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, move |_ctx: InvocationContext<String>| {
    let log = log.clone();
    async move {
      log.lock().push_str(mark);
      tracing::debug!(target: "test_fragments", %mark, "recording fragment invoked");
      Ok::<_, anyhow::Error>(StageControl::Continue)
    }
  })
  .shared()
}

/// Emits every input item upper-cased.
pub fn uppercase_fragment() -> SharedFragment<String> {
  ClosureFragment::new("{ it.toUpperCase() }", |ctx: InvocationContext<String>| async move {
    for item in &ctx.input {
      ctx.emit(item.to_uppercase());
    }
    Ok::<_, anyhow::Error>(StageControl::Continue)
  })
  .shared()
}

/// Emits every input item followed by `suffix`.
pub fn suffix_fragment(source: &'static str, suffix: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, move |ctx: InvocationContext<String>| async move {
    for item in &ctx.input {
      ctx.emit(format!("{}{}", item, suffix));
    }
    Ok::<_, anyhow::Error>(StageControl::Continue)
  })
  .shared()
}

/// Emits the invocation arguments, one item each.
pub fn echo_args_fragment(source: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, |ctx: InvocationContext<String>| async move {
    for arg in &ctx.args {
      ctx.emit(arg.clone());
    }
    Ok::<_, anyhow::Error>(StageControl::Continue)
  })
  .shared()
}

/// Passes input through, then stops the pipeline.
pub fn stopping_fragment(source: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, |ctx: InvocationContext<String>| async move {
    ctx.output.extend(ctx.input.iter().cloned());
    Ok::<_, anyhow::Error>(StageControl::Stop)
  })
  .shared()
}

/// Always fails with `TestError::Fragment(message)`.
pub fn failing_fragment(source: &'static str, message: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, move |_ctx: InvocationContext<String>| async move {
    tracing::warn!(target: "test_fragments", "failing with: '{}'", message);
    Err::<StageControl, _>(TestError::Fragment(message.to_string()))
  })
  .shared()
}

/// Increments [`FRAGMENT_CALLS`] each time it is invoked.
pub fn counting_fragment(source: &'static str) -> SharedFragment<String> {
  ClosureFragment::new(source, |_ctx: InvocationContext<String>| async move {
    FRAGMENT_CALLS.fetch_add(1, Ordering::SeqCst);
    Ok::<_, anyhow::Error>(StageControl::Continue)
  })
  .shared()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking execution counts ---
pub static FRAGMENT_CALLS: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  FRAGMENT_CALLS.store(0, Ordering::SeqCst);
}

pub fn fragment_calls() -> usize {
  FRAGMENT_CALLS.load(Ordering::SeqCst)
}

pub fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}
