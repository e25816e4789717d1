// pipeworks/examples/basic_pipeline.rs

use pipeworks::{
  ClosureElement, ClosureFragment, CommandRegistry, InvocationContext, PipelineAssembler, PipelineElement,
  PipelineResult, PipeworksError, StageControl,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), PipeworksError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  // 1. Native commands live in a registry and are resolved by name.
  let registry = Arc::new(CommandRegistry::<String>::new());
  registry.register(
    "echo",
    ClosureFragment::new("builtin:echo", |ctx: InvocationContext<String>| async move {
      for arg in &ctx.args {
        ctx.emit(arg.clone());
      }
      Ok::<_, PipeworksError>(StageControl::Continue)
    })
    .shared(),
  );

  // 2. A closure handed over by the scripting layer.
  let shout = ClosureFragment::new("{ it.toUpperCase() + '!' }", |ctx: InvocationContext<String>| async move {
    for item in &ctx.input {
      ctx.emit(format!("{}!", item.to_uppercase()));
    }
    Ok::<_, PipeworksError>(StageControl::Continue)
  })
  .shared();

  // 3. Assemble: echo hello world | { it.toUpperCase() + '!' }
  let mut assembler = PipelineAssembler::new(registry.clone());
  assembler.command("echo", ["hello", "world"])?.closure(shout.clone())?;
  let pipeline = assembler.finish();
  info!("Assembled: {}", pipeline.describe());

  // 4. Run it
  let run = pipeline.run(Vec::new(), Vec::new()).await?;
  match run.result {
    PipelineResult::Completed => info!("Pipeline completed successfully!"),
    PipelineResult::Stopped => info!("Pipeline was stopped early."),
  }
  for item in &run.output {
    info!("- {}", item);
  }
  assert_eq!(run.output, vec!["HELLO!".to_string(), "WORLD!".to_string()]);

  // 5. Elements can be materialized on their own, too.
  let element = ClosureElement::new(shout)?;
  let mut invoker = element.make();
  let ctx = InvocationContext::empty().with_input(vec!["again".to_string()]);
  let output = ctx.output.clone();
  let outcome = invoker.invoke(ctx).await?;
  info!("Invoker {} produced {} item(s): {:?}", invoker.id(), outcome.produced, output.take());

  Ok(())
}
