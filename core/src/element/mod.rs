// pipeworks/src/element/mod.rs

//! Pipeline elements: the stages a pipeline is assembled from.
//!
//! Every stage is one variant of the closed [`Element<T>`] enum. All variants
//! share the [`PipelineElement<T>`] interface:
//!  - `make()` materializes the stage into a fresh, single-use [`CommandInvoker`].
//!  - `describe()` appends a human-readable form of the stage to a buffer.
//!
//! Elements are immutable once built and can be shared across threads.

pub mod closure;
pub mod native;

use crate::invoker::CommandInvoker;

pub use closure::ClosureElement;
pub use native::NativeElement;

/// One stage of a command pipeline.
pub trait PipelineElement<T: Send + Sync + 'static>: Send + Sync {
  /// Produces a new invoker for this stage. Each call returns an independent
  /// invoker; nothing but the immutable wrapped work is shared between them.
  fn make(&self) -> Box<dyn CommandInvoker<T>>;

  /// Appends the textual form of this stage to `buffer`.
  fn describe(&self, buffer: &mut String);

  /// Convenience wrapper around [`describe`](Self::describe).
  fn description(&self) -> String {
    let mut buffer = String::new();
    self.describe(&mut buffer);
    buffer
  }
}

/// The closed set of stage kinds a pipeline can hold.
#[derive(Debug)]
pub enum Element<T: Send + Sync + 'static> {
  /// A closure fragment from a scripting layer.
  Closure(ClosureElement<T>),
  /// A named command with arguments bound at assembly time.
  Native(NativeElement<T>),
}

impl<T: Send + Sync + 'static> PipelineElement<T> for Element<T> {
  fn make(&self) -> Box<dyn CommandInvoker<T>> {
    match self {
      Element::Closure(element) => element.make(),
      Element::Native(element) => element.make(),
    }
  }

  fn describe(&self, buffer: &mut String) {
    match self {
      Element::Closure(element) => element.describe(buffer),
      Element::Native(element) => element.describe(buffer),
    }
  }
}

impl<T: Send + Sync + 'static> From<ClosureElement<T>> for Element<T> {
  fn from(element: ClosureElement<T>) -> Self {
    Element::Closure(element)
  }
}

impl<T: Send + Sync + 'static> From<NativeElement<T>> for Element<T> {
  fn from(element: NativeElement<T>) -> Self {
    Element::Native(element)
  }
}
