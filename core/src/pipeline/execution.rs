// pipeworks/src/pipeline/execution.rs

//! Contains the `Pipeline::run()` method, which materializes the pipeline into
//! invokers and drives them in order, feeding each stage's output to the next.

use crate::core::channel::Channel;
use crate::core::control::{PipelineResult, StageControl};
use crate::core::invocation::InvocationContext;
use crate::element::PipelineElement;
use crate::error::{PipeworksError, PipeworksResult};
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

/// What a pipeline run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun<T> {
  pub result: PipelineResult,
  /// Items produced by the last stage that ran.
  pub output: Vec<T>,
}

impl<T: Send + Sync + 'static> Pipeline<T> {
  /// Runs the pipeline once.
  ///
  /// Every call materializes fresh invokers, so the same pipeline can be run
  /// repeatedly. `args` are handed to every stage; `input` goes to the first
  /// stage and each later stage receives its predecessor's output.
  ///
  /// Fails with [`PipeworksError::EmptyPipeline`] when there is nothing to run,
  /// and stops at the first stage error.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_item_type = %std::any::type_name::<T>(),
            num_stages = self.elements.len(),
            num_args = args.len(),
        ),
        err(Display)
    )]
  pub async fn run(&self, args: Vec<String>, input: Vec<T>) -> PipeworksResult<PipelineRun<T>> {
    if self.elements.is_empty() {
      event!(Level::ERROR, "Refusing to run an empty pipeline.");
      return Err(PipeworksError::EmptyPipeline);
    }

    event!(Level::DEBUG, "Pipeline execution starting.");
    let invokers = self.make_invokers();
    let mut items = input;

    for (stage_idx, (element, mut invoker)) in self.elements.iter().zip(invokers).enumerate() {
      let stage_span = span!(
        Level::INFO,
        "pipeline_stage_execution",
        stage_index = stage_idx,
        stage = %element.description(),
        invoker_id = invoker.id().get()
      );

      let output = Channel::new();
      let ctx = InvocationContext::new(args.clone(), items, output.clone());
      let outcome = match invoker.invoke(ctx).instrument(stage_span).await {
        Ok(outcome) => outcome,
        Err(e) => {
          event!(Level::ERROR, stage_index = stage_idx, error = %e, "Stage failed.");
          return Err(e);
        }
      };

      items = output.take();
      event!(Level::DEBUG, stage_index = stage_idx, produced = outcome.produced, "Stage finished.");

      if outcome.control == StageControl::Stop {
        event!(Level::INFO, stage_index = stage_idx, "Pipeline stopped by a stage.");
        return Ok(PipelineRun {
          result: PipelineResult::Stopped,
          output: items,
        });
      }
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineRun {
      result: PipelineResult::Completed,
      output: items,
    })
  }
}
