//! Action runtime shared by the changed-files crates
//!
//! This crate holds the pieces that talk to the workflow environment:
//! the trigger-event payload model, the step-output sink, and the
//! tracing setup.

pub mod event;
pub mod logging;
pub mod outputs;

pub use event::{Repo, TriggerEvent};
pub use outputs::{set_failed, GithubOutput, OutputSink};
