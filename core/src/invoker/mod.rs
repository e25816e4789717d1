// pipeworks/src/invoker/mod.rs

//! Defines the `CommandInvoker<T>` trait: the runnable unit a pipeline element
//! materializes into, and which the pipeline engine drives.

pub mod closure;
pub mod native;

use crate::core::control::InvocationOutcome;
use crate::core::fragment::SharedFragment;
use crate::core::invocation::InvocationContext;
use crate::error::{PipeworksError, PipeworksResult};
use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{event, Level};

pub use closure::ClosureInvoker;
pub use native::NativeInvoker;

static NEXT_INVOKER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one invoker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvokerId(u64);

impl InvokerId {
  pub(crate) fn next() -> Self {
    InvokerId(NEXT_INVOKER_ID.fetch_add(1, Ordering::Relaxed))
  }

  pub fn get(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for InvokerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// An executable stage produced by `PipelineElement::make()`.
///
/// Invokers are single use: the first `invoke` runs the wrapped work, any later
/// call fails with [`PipeworksError::InvokerConsumed`] without running it again.
#[async_trait]
pub trait CommandInvoker<T: Send + Sync + 'static>: Send + Sync {
  fn id(&self) -> InvokerId;

  /// Whether `invoke` has already been called on this instance.
  fn is_consumed(&self) -> bool;

  /// Runs the stage against the channels and arguments in `ctx`.
  async fn invoke(&mut self, ctx: InvocationContext<T>) -> PipeworksResult<InvocationOutcome>;
}

/// Calls `fragment` once and counts what it wrote to the output channel.
pub(crate) async fn drive_fragment<T: Send + Sync + 'static>(
  fragment: &SharedFragment<T>,
  description: &str,
  ctx: InvocationContext<T>,
) -> PipeworksResult<InvocationOutcome> {
  let output = ctx.output.clone();
  let before = output.len();

  match fragment.call(ctx).await {
    Ok(control) => {
      let produced = output.len().saturating_sub(before);
      event!(Level::TRACE, ?control, produced, "Fragment returned.");
      Ok(InvocationOutcome { control, produced })
    }
    Err(source) => {
      event!(Level::ERROR, %description, error = %source, "Fragment failed.");
      Err(PipeworksError::FragmentFailure {
        description: description.to_string(),
        source,
      })
    }
  }
}
