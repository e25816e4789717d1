// pipeworks/src/core/invocation.rs

//! The context handed to a stage when the pipeline engine drives it.

use crate::core::channel::Channel;

/// Arguments and I/O channels supplied to one invocation of a stage.
#[derive(Debug)]
pub struct InvocationContext<T: Send + Sync + 'static> {
  /// Arguments supplied by the engine (and, for native commands, the bound arguments first).
  pub args: Vec<String>,
  /// Items produced by the previous stage, or the pipeline's initial input.
  pub input: Vec<T>,
  /// Where this stage writes the items it produces.
  pub output: Channel<T>,
}

impl<T: Send + Sync + 'static> InvocationContext<T> {
  pub fn new(args: Vec<String>, input: Vec<T>, output: Channel<T>) -> Self {
    Self { args, input, output }
  }

  /// A context with no arguments, no input, and a fresh output channel.
  pub fn empty() -> Self {
    Self::new(Vec::new(), Vec::new(), Channel::new())
  }

  pub fn with_args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args = args.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_input(mut self, input: Vec<T>) -> Self {
    self.input = input;
    self
  }

  /// Writes one item to the output channel.
  pub fn emit(&self, item: T) {
    self.output.push(item);
  }
}
