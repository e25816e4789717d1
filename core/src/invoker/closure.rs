// pipeworks/src/invoker/closure.rs

use super::{drive_fragment, CommandInvoker, InvokerId};
use crate::core::control::InvocationOutcome;
use crate::core::fragment::SharedFragment;
use crate::core::invocation::InvocationContext;
use crate::error::{PipeworksError, PipeworksResult};
use async_trait::async_trait;
use std::fmt;
use tracing::{event, instrument, Level};

/// Invoker that delegates execution to a closure fragment, passing the engine's
/// context through unchanged.
pub struct ClosureInvoker<T: Send + Sync + 'static> {
  id: InvokerId,
  fragment: SharedFragment<T>,
  consumed: bool,
}

impl<T: Send + Sync + 'static> ClosureInvoker<T> {
  pub fn new(fragment: SharedFragment<T>) -> Self {
    Self {
      id: InvokerId::next(),
      fragment,
      consumed: false,
    }
  }

  pub fn fragment(&self) -> &SharedFragment<T> {
    &self.fragment
  }
}

#[async_trait]
impl<T: Send + Sync + 'static> CommandInvoker<T> for ClosureInvoker<T> {
  fn id(&self) -> InvokerId {
    self.id
  }

  fn is_consumed(&self) -> bool {
    self.consumed
  }

  #[instrument(name = "ClosureInvoker::invoke", skip_all, err(Display))]
  async fn invoke(&mut self, ctx: InvocationContext<T>) -> PipeworksResult<InvocationOutcome> {
    if self.consumed {
      event!(Level::WARN, invoker_id = %self.id, "Closure invoker called a second time.");
      return Err(PipeworksError::InvokerConsumed {
        invoker_id: self.id.get(),
      });
    }
    self.consumed = true;

    event!(
      Level::TRACE,
      invoker_id = %self.id,
      fragment = %self.fragment.source(),
      num_args = ctx.args.len(),
      num_input = ctx.input.len(),
      "Calling closure fragment."
    );
    drive_fragment(&self.fragment, self.fragment.source(), ctx).await
  }
}

impl<T: Send + Sync + 'static> fmt::Debug for ClosureInvoker<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClosureInvoker")
      .field("id", &self.id)
      .field("fragment", &self.fragment.source())
      .field("consumed", &self.consumed)
      .finish()
  }
}
