// pipeworks/src/element/native.rs

use super::PipelineElement;
use crate::core::fragment::SharedFragment;
use crate::error::{PipeworksError, PipeworksResult};
use crate::invoker::{CommandInvoker, NativeInvoker};
use std::fmt;

/// A pipeline stage running a named command with arguments bound at assembly time.
pub struct NativeElement<T: Send + Sync + 'static> {
  name: String,
  args: Vec<String>,
  command: SharedFragment<T>,
}

impl<T: Send + Sync + 'static> NativeElement<T> {
  pub fn new<I, S>(name: impl Into<String>, args: I, command: SharedFragment<T>) -> PipeworksResult<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let name: String = name.into();
    if name.trim().is_empty() {
      return Err(PipeworksError::InvalidElement {
        reason: "native command name is blank".to_string(),
      });
    }
    Ok(Self {
      name,
      args: args.into_iter().map(Into::into).collect(),
      command,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }
}

impl<T: Send + Sync + 'static> PipelineElement<T> for NativeElement<T> {
  fn make(&self) -> Box<dyn CommandInvoker<T>> {
    Box::new(NativeInvoker::new(self.name.clone(), self.args.clone(), self.command.clone()))
  }

  fn describe(&self, buffer: &mut String) {
    buffer.push_str(&self.name);
    for arg in &self.args {
      buffer.push(' ');
      push_quoted(buffer, arg);
    }
  }
}

/// Characters a shell reader would treat as syntax rather than part of a word.
const SHELL_METACHARACTERS: &[char] = &['\'', '"', '|', ';', '&', '<', '>', '$', '\\', '`', '(', ')', '*', '?', '#', '~'];

/// Single-quotes `arg` when it would not read back as one word.
fn push_quoted(buffer: &mut String, arg: &str) {
  let needs_quotes = arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || SHELL_METACHARACTERS.contains(&c));
  if !needs_quotes {
    buffer.push_str(arg);
    return;
  }
  buffer.push('\'');
  for c in arg.chars() {
    if c == '\'' {
      buffer.push_str("'\\''");
    } else {
      buffer.push(c);
    }
  }
  buffer.push('\'');
}

impl<T: Send + Sync + 'static> fmt::Debug for NativeElement<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NativeElement")
      .field("name", &self.name)
      .field("args", &self.args)
      .finish()
  }
}
