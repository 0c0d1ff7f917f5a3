use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required request field is missing or empty.
    #[error("Invalid configuration: {0}.")]
    ConfigurationError(String),

    /// A filesystem mutation failed. `context` names the operation and path.
    #[error("Failed to {context}. Original error: {source}")]
    FilesystemError {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected Go toolchain version format: '{version}'.")]
    VersionFormatError { version: String },

    /// The Go toolchain could not be queried for its version.
    #[error("Failed to query the Go toolchain: {0}.")]
    ToolchainError(String),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
