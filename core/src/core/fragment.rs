// pipeworks/src/core/fragment.rs

//! Defines the `Fragment<T>` capability: an opaque executable value that a
//! pipeline stage invokes with an `InvocationContext<T>`.
//!
//! A fragment is whatever the host scripting layer hands to the shell. This crate
//! never looks inside it; it only calls it and asks for its textual form.

use crate::core::control::StageControl;
use crate::core::invocation::InvocationContext;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The future returned by a fragment invocation.
pub type FragmentFuture = Pin<Box<dyn Future<Output = anyhow::Result<StageControl>> + Send>>;

/// Type alias for the boxed body of a [`ClosureFragment`].
///
/// The body takes ownership of the `InvocationContext<T>` for one invocation and
/// writes whatever it produces into `ctx.output`. Read guards on the output
/// channel must be dropped before any `.await`.
pub type FragmentBody<T> = Box<dyn Fn(InvocationContext<T>) -> FragmentFuture + Send + Sync>;

/// An executable fragment supplied by a scripting or command layer.
pub trait Fragment<T: Send + Sync + 'static>: Send + Sync {
  /// Invokes the fragment once. Calling conventions and captured state are the
  /// fragment's own business.
  fn call(&self, ctx: InvocationContext<T>) -> FragmentFuture;

  /// Textual representation, used for diagnostics and for echoing pipelines.
  fn source(&self) -> &str;
}

/// Fragments are held by reference count; elements and invokers never mutate them.
pub type SharedFragment<T> = Arc<dyn Fragment<T>>;

/// Adapts a Rust async closure into a [`Fragment`].
pub struct ClosureFragment<T: Send + Sync + 'static> {
  source: String,
  body: FragmentBody<T>,
}

impl<T: Send + Sync + 'static> ClosureFragment<T> {
  /// Wraps `f`, remembering `source` as the fragment's textual form.
  ///
  /// `f` may fail with any error convertible into `anyhow::Error`.
  pub fn new<F, Fut, E>(source: impl Into<String>, f: F) -> Self
  where
    F: Fn(InvocationContext<T>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<StageControl, E>> + Send + 'static,
    E: Into<anyhow::Error> + 'static,
  {
    let body: FragmentBody<T> = Box::new(move |ctx| {
      let user_fut = f(ctx);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    Self {
      source: source.into(),
      body,
    }
  }

  /// Converts into the shared form elements hold.
  pub fn shared(self) -> SharedFragment<T> {
    Arc::new(self)
  }
}

impl<T: Send + Sync + 'static> Fragment<T> for ClosureFragment<T> {
  fn call(&self, ctx: InvocationContext<T>) -> FragmentFuture {
    (self.body)(ctx)
  }

  fn source(&self) -> &str {
    &self.source
  }
}

// The boxed body has no Debug; show the source text instead.
impl<T: Send + Sync + 'static> fmt::Debug for ClosureFragment<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClosureFragment").field("source", &self.source).finish()
  }
}

impl<T: Send + Sync + 'static> fmt::Display for ClosureFragment<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.source)
  }
}
