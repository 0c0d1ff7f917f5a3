use std::path::PathBuf;

/// A single filesystem mutation performed while scaffolding.
#[derive(Debug)]
pub enum ScaffoldOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    CreateFile { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl ScaffoldOperation {
    /// Returns the path this operation mutates.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            ScaffoldOperation::CreateDirectory { target, .. } => target,
            ScaffoldOperation::CreateFile { target, .. } => target,
            ScaffoldOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    ///
    /// # Returns
    /// * `String` - A concise description including the operation type and path
    pub fn error_context(&self) -> String {
        match self {
            ScaffoldOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            ScaffoldOperation::CreateFile { target, .. } => {
                format!("create file '{}'", target.display())
            }
            ScaffoldOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ScaffoldOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Keeping directory '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            ScaffoldOperation::CreateFile { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Creating file '{}' (truncating existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating file '{}'", prefix, target.display())
                }
            }

            ScaffoldOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }
        }
    }
}
