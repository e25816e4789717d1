// pipeworks/src/core/control.rs

//! Signals for controlling pipeline flow and the outcome of a pipeline run.

/// Signal from a fragment indicating whether the pipeline should continue or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageControl {
  /// Hand this stage's output to the next stage.
  Continue,
  /// Halt the pipeline after the current stage.
  /// Output already produced by this stage is kept as the pipeline's output.
  Stop,
}

/// What an invoker reports back to the pipeline engine after running once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvocationOutcome {
  pub control: StageControl,
  /// Number of items written to the output channel during this invocation.
  pub produced: usize,
}

impl InvocationOutcome {
  pub fn produced_output(&self) -> bool {
    self.produced > 0
  }
}

/// Outcome of a full pipeline execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every stage ran to completion.
  Completed,
  /// A stage returned `StageControl::Stop`.
  Stopped,
}
