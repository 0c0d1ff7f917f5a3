/// Handles argument parsing.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core scaffold generation.
pub mod scaffold;

/// Go toolchain version discovery.
pub mod toolchain;
