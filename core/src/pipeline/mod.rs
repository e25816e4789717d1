// pipeworks/src/pipeline/mod.rs

//! Defines the `Pipeline<T>` struct, its assembly, modification, and execution logic.

pub mod assembler;
pub mod definition;
pub mod execution;

pub use assembler::PipelineAssembler;
pub use definition::Pipeline;
pub use execution::PipelineRun;
