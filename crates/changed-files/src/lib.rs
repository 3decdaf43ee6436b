//! # changed-files
//!
//! Determines the files changed between the base and head commits of a
//! pull request or push, classifies them by change status, and emits the
//! result sets as step outputs in a chosen format.
//!
//! ## Modules
//!
//! - `cli`: argument/environment parsing
//! - `pipeline`: the single run through validate, resolve, compare,
//!   classify and emit
//! - `resolve`: base/head reference resolution, fork-aware
//! - `classify`: glob filtering and status classification
//! - `format`: output serialization and emission
//! - `error`: the terminal failure taxonomy

pub mod classify;
pub mod cli;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod resolve;

pub use error::{RunError, RunResult};
