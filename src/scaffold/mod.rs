//! Scaffold generation engine
//!
//! This module contains the core scaffolding components:
//! - `request`: The immutable input describing one scaffold run
//! - `plan`: Fixed tables of directories and files, plus generated artifacts
//! - `operation`: Single filesystem mutations and their progress messages
//! - `engine`: Executes the plan against a `Filesystem`

pub mod engine;
pub mod operation;
pub mod plan;
pub mod request;

pub use engine::ScaffoldEngine;
pub use plan::{GeneratedArtifact, DIRECTORY_PLAN, FILE_PLAN};
pub use request::ScaffoldRequest;
