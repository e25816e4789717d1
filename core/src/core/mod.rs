pub mod channel;
pub mod control;
pub mod fragment;
pub mod invocation;

// Re-export key types for easier access from other pipeworks modules (and lib.rs)
pub use channel::Channel;
pub use control::{InvocationOutcome, PipelineResult, StageControl};
pub use fragment::{ClosureFragment, Fragment, FragmentFuture, SharedFragment};
pub use invocation::InvocationContext;
