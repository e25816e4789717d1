// pipeworks/src/core/channel.rs
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// A shared, append-only buffer of pipeline items.
///
/// Cloning a `Channel` yields another handle to the same buffer, so a stage can
/// write into it while the engine keeps a handle to collect the results.
///
/// IMPORTANT: guards obtained from [`Channel::read`] are blocking and MUST NOT
/// be held across `.await` suspension points.
#[derive(Debug)]
pub struct Channel<T: Send + Sync + 'static>(Arc<RwLock<Vec<T>>>);

impl<T: Send + Sync + 'static> Channel<T> {
  pub fn new() -> Self {
    Channel(Arc::new(RwLock::new(Vec::new())))
  }

  /// Appends one item.
  pub fn push(&self, item: T) {
    self.0.write().push(item);
  }

  pub fn extend<I: IntoIterator<Item = T>>(&self, items: I) {
    self.0.write().extend(items);
  }

  /// Takes every buffered item, leaving the channel empty.
  pub fn take(&self) -> Vec<T> {
    std::mem::take(&mut *self.0.write())
  }

  /// Read access to the buffered items.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
    self.0.read()
  }

  pub fn len(&self) -> usize {
    self.0.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.read().is_empty()
  }
}

impl<T: Clone + Send + Sync + 'static> Channel<T> {
  /// Copies the buffered items without draining them.
  pub fn snapshot(&self) -> Vec<T> {
    self.0.read().clone()
  }
}

impl<T: Send + Sync + 'static> Clone for Channel<T> {
  fn clone(&self) -> Self {
    Channel(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static> Default for Channel<T> {
  fn default() -> Self {
    Self::new()
  }
}
