// pipeworks/src/pipeline/assembler.rs

//! Builder that assembles a `Pipeline<T>` stage by stage, resolving command
//! names against a `CommandRegistry<T>`.

use crate::core::fragment::SharedFragment;
use crate::element::{ClosureElement, Element, NativeElement};
use crate::error::PipeworksResult;
use crate::pipeline::definition::Pipeline;
use crate::registry::CommandRegistry;
use std::sync::Arc;
use tracing::{event, Level};

#[derive(Debug)]
pub struct PipelineAssembler<T: Send + Sync + 'static> {
  registry: Arc<CommandRegistry<T>>,
  pipeline: Pipeline<T>,
}

impl<T: Send + Sync + 'static> PipelineAssembler<T> {
  pub fn new(registry: Arc<CommandRegistry<T>>) -> Self {
    Self {
      registry,
      pipeline: Pipeline::new(),
    }
  }

  /// Appends a closure stage. Construction errors (blank fragment) are returned as-is.
  pub fn closure(&mut self, fragment: SharedFragment<T>) -> PipeworksResult<&mut Self> {
    let element = ClosureElement::new(fragment)?;
    event!(Level::DEBUG, stage_index = self.pipeline.len(), "Closure stage assembled.");
    self.pipeline.push(element);
    Ok(self)
  }

  /// Appends a native stage for the command registered under `name`.
  pub fn command<I, S>(&mut self, name: &str, args: I) -> PipeworksResult<&mut Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let command = self.registry.resolve(name)?;
    let element = NativeElement::new(name, args, command)?;
    event!(Level::DEBUG, stage_index = self.pipeline.len(), command = %name, "Native stage assembled.");
    self.pipeline.push(element);
    Ok(self)
  }

  /// Appends a prebuilt element.
  pub fn element(&mut self, element: impl Into<Element<T>>) -> &mut Self {
    self.pipeline.push(element);
    self
  }

  pub fn len(&self) -> usize {
    self.pipeline.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pipeline.is_empty()
  }

  pub fn finish(self) -> Pipeline<T> {
    self.pipeline
  }
}
