// pipeworks/src/element/closure.rs

use super::PipelineElement;
use crate::core::fragment::SharedFragment;
use crate::error::{PipeworksError, PipeworksResult};
use crate::invoker::{ClosureInvoker, CommandInvoker};
use std::fmt;
use tracing::{event, Level};

/// A pipeline stage backed by a closure fragment.
///
/// The element holds the fragment from construction until it is dropped and
/// never mutates it. Construction rejects absent or blank fragments, so a built
/// element always has something to run and something to describe.
pub struct ClosureElement<T: Send + Sync + 'static> {
  fragment: SharedFragment<T>,
}

impl<T: Send + Sync + 'static> ClosureElement<T> {
  /// Wraps `fragment`. Fails with [`PipeworksError::InvalidFragment`] if its
  /// textual form is blank.
  pub fn new(fragment: SharedFragment<T>) -> PipeworksResult<Self> {
    if fragment.source().trim().is_empty() {
      event!(Level::ERROR, "Rejected closure fragment with blank source.");
      return Err(PipeworksError::InvalidFragment {
        reason: "fragment source text is blank".to_string(),
      });
    }
    Ok(Self { fragment })
  }

  /// Like [`new`](Self::new), for callers whose fragment may be absent.
  pub fn from_option(fragment: Option<SharedFragment<T>>) -> PipeworksResult<Self> {
    match fragment {
      Some(fragment) => Self::new(fragment),
      None => Err(PipeworksError::MissingFragment {
        element: "closure".to_string(),
      }),
    }
  }

  pub fn fragment(&self) -> &SharedFragment<T> {
    &self.fragment
  }
}

impl<T: Send + Sync + 'static> PipelineElement<T> for ClosureElement<T> {
  fn make(&self) -> Box<dyn CommandInvoker<T>> {
    Box::new(ClosureInvoker::new(self.fragment.clone()))
  }

  fn describe(&self, buffer: &mut String) {
    buffer.push_str(self.fragment.source());
  }
}

impl<T: Send + Sync + 'static> fmt::Debug for ClosureElement<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClosureElement")
      .field("fragment", &self.fragment.source())
      .finish()
  }
}
