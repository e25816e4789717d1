// pipeworks/src/invoker/native.rs

use super::{drive_fragment, CommandInvoker, InvokerId};
use crate::core::control::InvocationOutcome;
use crate::core::fragment::SharedFragment;
use crate::core::invocation::InvocationContext;
use crate::error::{PipeworksError, PipeworksResult};
use async_trait::async_trait;
use std::fmt;
use tracing::{event, instrument, Level};

/// Invoker for a named command whose arguments were bound when the pipeline
/// was assembled. Bound arguments come first, then the engine's arguments.
pub struct NativeInvoker<T: Send + Sync + 'static> {
  id: InvokerId,
  name: String,
  bound_args: Vec<String>,
  command: SharedFragment<T>,
  consumed: bool,
}

impl<T: Send + Sync + 'static> NativeInvoker<T> {
  pub fn new(name: impl Into<String>, bound_args: Vec<String>, command: SharedFragment<T>) -> Self {
    Self {
      id: InvokerId::next(),
      name: name.into(),
      bound_args,
      command,
      consumed: false,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

#[async_trait]
impl<T: Send + Sync + 'static> CommandInvoker<T> for NativeInvoker<T> {
  fn id(&self) -> InvokerId {
    self.id
  }

  fn is_consumed(&self) -> bool {
    self.consumed
  }

  #[instrument(name = "NativeInvoker::invoke", skip_all, err(Display))]
  async fn invoke(&mut self, ctx: InvocationContext<T>) -> PipeworksResult<InvocationOutcome> {
    if self.consumed {
      event!(Level::WARN, invoker_id = %self.id, command = %self.name, "Native invoker called a second time.");
      return Err(PipeworksError::InvokerConsumed {
        invoker_id: self.id.get(),
      });
    }
    self.consumed = true;

    let mut args = self.bound_args.clone();
    args.extend(ctx.args);
    let ctx = InvocationContext::new(args, ctx.input, ctx.output);

    event!(Level::TRACE, invoker_id = %self.id, command = %self.name, num_args = ctx.args.len(), "Calling native command.");
    drive_fragment(&self.command, &self.name, ctx).await
  }
}

impl<T: Send + Sync + 'static> fmt::Debug for NativeInvoker<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NativeInvoker")
      .field("id", &self.id)
      .field("name", &self.name)
      .field("bound_args", &self.bound_args)
      .field("consumed", &self.consumed)
      .finish()
  }
}
