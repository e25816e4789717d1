// pipeworks/src/pipeline/definition.rs

//! Contains the `Pipeline<T>` struct and methods for its construction,
//! structural modification, description and materialization.

use crate::element::{Element, PipelineElement};
use crate::error::{PipeworksError, PipeworksResult};
use crate::invoker::CommandInvoker;
use std::fmt;

/// Separator placed between stage descriptions.
pub const STAGE_SEPARATOR: &str = " | ";

/// An ordered chain of pipeline elements over items of type `T`.
///
/// `T` must be `'static + Send + Sync`.
#[derive(Debug)]
pub struct Pipeline<T: Send + Sync + 'static> {
  pub(crate) elements: Vec<Element<T>>,
}

impl<T: Send + Sync + 'static> Pipeline<T> {
  /// Creates an empty pipeline.
  pub fn new() -> Self {
    Self { elements: Vec::new() }
  }

  /// Builder-style [`push`](Self::push).
  pub fn with(mut self, element: impl Into<Element<T>>) -> Self {
    self.push(element);
    self
  }

  /// Appends a stage at the end of the pipeline.
  pub fn push(&mut self, element: impl Into<Element<T>>) {
    self.elements.push(element.into());
  }

  /// Inserts a stage at `index`, shifting later stages back. `index == len` appends.
  pub fn insert(&mut self, index: usize, element: impl Into<Element<T>>) -> PipeworksResult<()> {
    if index > self.elements.len() {
      return Err(PipeworksError::StageIndexOutOfRange {
        index,
        len: self.elements.len(),
      });
    }
    self.elements.insert(index, element.into());
    Ok(())
  }

  /// Removes and returns the stage at `index`, or `None` if out of range.
  pub fn remove(&mut self, index: usize) -> Option<Element<T>> {
    if index < self.elements.len() {
      Some(self.elements.remove(index))
    } else {
      None
    }
  }

  pub fn elements(&self) -> &[Element<T>] {
    &self.elements
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Appends every stage's description to `buffer`, separated by `" | "`.
  pub fn describe_into(&self, buffer: &mut String) {
    for (idx, element) in self.elements.iter().enumerate() {
      if idx > 0 {
        buffer.push_str(STAGE_SEPARATOR);
      }
      element.describe(buffer);
    }
  }

  pub fn describe(&self) -> String {
    let mut buffer = String::new();
    self.describe_into(&mut buffer);
    buffer
  }

  /// Calls `make()` on each element, in pipeline order.
  pub fn make_invokers(&self) -> Vec<Box<dyn CommandInvoker<T>>> {
    self.elements.iter().map(|element| element.make()).collect()
  }
}

impl<T: Send + Sync + 'static> Default for Pipeline<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Send + Sync + 'static> fmt::Display for Pipeline<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.describe())
  }
}
