// src/lib.rs

//! Pipeworks: pipeline elements for interactive command shells.
//!
//! A shell assembles a command line into a pipeline of stages. Pipeworks models
//! each stage as a [`PipelineElement`] that can:
//!  - materialize itself into a fresh, single-use [`CommandInvoker`] (`make()`),
//!  - render a human-readable form of itself (`describe()`).
//!
//! Stages come in two kinds, both wrapping an opaque [`Fragment`]:
//!  - [`ClosureElement`], a closure handed over by a scripting layer,
//!  - [`NativeElement`], a named command with arguments bound at assembly time.
//!
//! Around the elements the crate provides a small in-process engine
//! ([`Pipeline::run`]), a builder ([`PipelineAssembler`]) and a
//! [`CommandRegistry`] to resolve command names.

pub mod core;
pub mod element;
pub mod error;
pub mod invoker;
pub mod pipeline;
pub mod registry;

// --- Re-exports for the Public API ---

pub use crate::core::channel::Channel;
pub use crate::core::control::{InvocationOutcome, PipelineResult, StageControl};
pub use crate::core::fragment::{ClosureFragment, Fragment, FragmentFuture, SharedFragment};
pub use crate::core::invocation::InvocationContext;

pub use crate::element::{ClosureElement, Element, NativeElement, PipelineElement};
pub use crate::invoker::{ClosureInvoker, CommandInvoker, InvokerId, NativeInvoker};

pub use crate::pipeline::{Pipeline, PipelineAssembler, PipelineRun};
pub use crate::registry::CommandRegistry;

pub use crate::error::{PipeworksError, PipeworksResult};

/*
    Typical flow:
    1. Wrap each scripting closure in a `ClosureFragment::new(source, |ctx| async move { .. })`.
    2. Register native commands in a `CommandRegistry`.
    3. Assemble stages with `PipelineAssembler` (or `Pipeline::new().with(..)`).
    4. `pipeline.describe()` echoes the command line; `pipeline.run(args, input).await`
       materializes invokers and drives them, each stage's output feeding the next.
*/
