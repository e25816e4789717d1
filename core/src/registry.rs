// pipeworks/src/registry.rs

//! Defines `CommandRegistry<T>`, a name-keyed table of native commands that the
//! pipeline assembler resolves command names against.

use crate::core::fragment::SharedFragment;
use crate::error::{PipeworksError, PipeworksResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use tracing::{event, Level};

/// Thread-safe registry of named command fragments.
pub struct CommandRegistry<T: Send + Sync + 'static> {
  commands: Mutex<HashMap<String, SharedFragment<T>>>,
}

impl<T: Send + Sync + 'static> CommandRegistry<T> {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self {
      commands: Mutex::new(HashMap::new()),
    }
  }

  /// Registers `command` under `name`, returning the command it replaced, if any.
  pub fn register(&self, name: impl Into<String>, command: SharedFragment<T>) -> Option<SharedFragment<T>> {
    let name = name.into();
    event!(Level::DEBUG, command = %name, source = %command.source(), "Registering command.");
    let previous = self.commands.lock().insert(name, command);
    if previous.is_some() {
      event!(Level::DEBUG, "Replaced a previously registered command.");
    }
    previous
  }

  pub fn get(&self, name: &str) -> Option<SharedFragment<T>> {
    self.commands.lock().get(name).cloned()
  }

  /// Like [`get`](Self::get), failing with [`PipeworksError::CommandNotFound`].
  pub fn resolve(&self, name: &str) -> PipeworksResult<SharedFragment<T>> {
    self.get(name).ok_or_else(|| {
      event!(Level::ERROR, command = %name, "No command registered under this name.");
      PipeworksError::CommandNotFound { name: name.to_string() }
    })
  }

  pub fn contains(&self, name: &str) -> bool {
    self.commands.lock().contains_key(name)
  }

  /// Registered names in sorted order.
  pub fn names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.commands.lock().keys().cloned().collect();
    names.sort();
    names
  }

  pub fn len(&self) -> usize {
    self.commands.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.commands.lock().is_empty()
  }
}

impl<T: Send + Sync + 'static> Default for CommandRegistry<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Send + Sync + 'static> fmt::Debug for CommandRegistry<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CommandRegistry").field("commands", &self.names()).finish()
  }
}
