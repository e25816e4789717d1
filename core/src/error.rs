// pipeworks/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipeworksError {
  /// No fragment was supplied where a closure element expected one.
  #[error("Missing fragment for {element} element")]
  MissingFragment { element: String },

  #[error("Invalid fragment: {reason}")]
  InvalidFragment { reason: String },

  #[error("Invalid element: {reason}")]
  InvalidElement { reason: String },

  #[error("Invoker #{invoker_id} was already invoked and cannot run again")]
  InvokerConsumed { invoker_id: u64 },

  #[error("Fragment '{description}' failed. Source: {source}")]
  FragmentFailure {
    description: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Command not found: {name}")]
  CommandNotFound { name: String },

  #[error("Pipeline has no elements to run")]
  EmptyPipeline,

  #[error("Error in external operation. Source: {source}")]
  External {
    #[source]
    source: AnyhowError,
  },

  #[error("Stage index {index} is out of range for a pipeline of {len} stage(s)")]
  StageIndexOutOfRange { index: usize, len: usize },
}

impl From<AnyhowError> for PipeworksError {
  fn from(err: AnyhowError) -> Self {
    PipeworksError::External { source: err }
  }
}

pub type PipeworksResult<T, E = PipeworksError> = std::result::Result<T, E>;
