use regex::Regex;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use crate::constants::GO_VERSION_PREFIX;
use crate::error::{Error, Result};

/// Release versions the Go toolchain reports: `1.21.3`, `1.22`, `1.23rc1`.
static GO_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)*((rc|beta)\d+)?$").expect("valid Go version regex")
});

/// Source of the raw Go toolchain version identifier (e.g. `go1.21.3`).
pub trait GoToolchain {
    fn raw_version(&self) -> Result<String>;

    /// The numeric version written into `go.mod`.
    fn version(&self) -> Result<String> {
        parse_go_version(&self.raw_version()?)
    }
}

/// Asks the installed `go` binary for its version.
#[derive(Debug, Clone)]
pub struct GoCommand {
    program: String,
}

impl GoCommand {
    pub fn new() -> Self {
        Self { program: "go".to_string() }
    }

    /// Uses a specific `go` executable instead of the one on `PATH`.
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl Default for GoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl GoToolchain for GoCommand {
    fn raw_version(&self) -> Result<String> {
        log::debug!("Querying Go toolchain version with '{} env GOVERSION'", self.program);
        let output = Command::new(&self.program)
            .args(["env", "GOVERSION"])
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                Error::ToolchainError(format!("cannot run '{}': {e}", self.program))
            })?;

        if !output.status.success() {
            return Err(Error::ToolchainError(format!(
                "'{} env GOVERSION' exited with {}",
                self.program, output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        log::debug!("Go toolchain reported '{stdout}'");
        Ok(stdout)
    }
}

/// A toolchain that always reports the same version string.
#[derive(Debug, Clone)]
pub struct StaticToolchain {
    raw: String,
}

impl StaticToolchain {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self { raw: raw.into() }
    }
}

impl GoToolchain for StaticToolchain {
    fn raw_version(&self) -> Result<String> {
        Ok(self.raw.clone())
    }
}

/// Version reported by [`PreviewToolchain`] when no Go toolchain is available.
pub const PREVIEW_GO_VERSION: &str = "go0.0.0";

/// Wraps a toolchain for dry runs, where a missing `go` binary should not stop the preview.
pub struct PreviewToolchain<'a> {
    inner: &'a dyn GoToolchain,
}

impl<'a> PreviewToolchain<'a> {
    pub fn new(inner: &'a dyn GoToolchain) -> Self {
        Self { inner }
    }
}

impl GoToolchain for PreviewToolchain<'_> {
    fn raw_version(&self) -> Result<String> {
        match self.inner.raw_version() {
            Err(Error::ToolchainError(reason)) => {
                log::warn!("{reason}; previewing with placeholder version {PREVIEW_GO_VERSION}");
                Ok(PREVIEW_GO_VERSION.to_string())
            }
            other => other,
        }
    }
}

/// Strips the `go` prefix token from a toolchain version identifier.
///
/// # Arguments
/// * `raw` - Version identifier as reported by the toolchain, e.g. `go1.21.3`
///
/// # Returns
/// * `Ok(String)` - The version without its prefix, e.g. `1.21.3`
/// * `Err(Error::VersionFormatError)` - If the prefix is missing or no release version follows it
///
/// Anything after the first whitespace, such as experiment tags
/// (`go1.21.3 X:boringcrypto`), is ignored.
///
/// # Examples
/// ```
/// use goscaffold::toolchain::parse_go_version;
///
/// assert_eq!(parse_go_version("go1.21.3").unwrap(), "1.21.3");
/// assert_eq!(parse_go_version("go1.21.3 X:boringcrypto").unwrap(), "1.21.3");
/// assert!(parse_go_version("devel +abc123").is_err());
/// ```
pub fn parse_go_version(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let version_error = || Error::VersionFormatError { version: raw.to_string() };

    let rest = trimmed.strip_prefix(GO_VERSION_PREFIX).ok_or_else(version_error)?;
    let version = rest.split(char::is_whitespace).next().unwrap_or_default();
    if !GO_VERSION_RE.is_match(version) {
        return Err(version_error());
    }
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_versions() {
        assert_eq!(parse_go_version("go1.21.3").unwrap(), "1.21.3");
        assert_eq!(parse_go_version("go1.22").unwrap(), "1.22");
        assert_eq!(parse_go_version("go1.23rc1").unwrap(), "1.23rc1");
        assert_eq!(parse_go_version("  go1.21.3\n").unwrap(), "1.21.3");
    }

    #[test]
    fn rejects_missing_prefix() {
        for raw in ["1.21.3", "", "devel go1.22-abc", "version"] {
            match parse_go_version(raw) {
                Err(Error::VersionFormatError { version }) => assert_eq!(version, raw),
                other => panic!("expected VersionFormatError for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_prefix_without_version() {
        assert!(parse_go_version("go").is_err());
        assert!(parse_go_version("go version").is_err());
        assert!(parse_go_version("go 1.21.3").is_err());
    }

    #[test]
    fn ignores_text_after_the_version() {
        assert_eq!(parse_go_version("go1.21.3 X:boringcrypto").unwrap(), "1.21.3");
        assert_eq!(parse_go_version("go1.22rc1 X:loopvar,rangefunc\n").unwrap(), "1.22rc1");
        assert_eq!(parse_go_version("go1.21.3 linux/amd64").unwrap(), "1.21.3");
    }

    #[test]
    fn go_version_pattern_compiles() {
        assert!(GO_VERSION_RE.is_match("1.21.3"));
        assert!(!GO_VERSION_RE.is_match("1.21.3-dev"));
    }

    #[test]
    fn static_toolchain_reports_parsed_version() {
        let toolchain = StaticToolchain::new("go1.21.3");
        assert_eq!(toolchain.raw_version().unwrap(), "go1.21.3");
        assert_eq!(toolchain.version().unwrap(), "1.21.3");
    }

    #[test]
    fn static_toolchain_propagates_format_errors() {
        let toolchain = StaticToolchain::new("tip");
        assert!(matches!(toolchain.version(), Err(Error::VersionFormatError { .. })));
    }

    #[test]
    fn missing_go_binary_is_a_toolchain_error() {
        let toolchain = GoCommand::with_program("goscaffold-no-such-go-binary");
        assert!(matches!(toolchain.raw_version(), Err(Error::ToolchainError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_go_command_is_a_toolchain_error() {
        let toolchain = GoCommand::with_program("false");
        match toolchain.raw_version() {
            Err(Error::ToolchainError(message)) => assert!(message.contains("exited with")),
            other => panic!("expected ToolchainError, got {other:?}"),
        }
    }

    #[test]
    fn preview_toolchain_passes_real_versions_through() {
        let inner = StaticToolchain::new("go1.21.3");
        assert_eq!(PreviewToolchain::new(&inner).version().unwrap(), "1.21.3");
    }

    #[test]
    fn preview_toolchain_stands_in_for_missing_go() {
        let inner = GoCommand::with_program("goscaffold-no-such-go-binary");
        let preview = PreviewToolchain::new(&inner);
        assert_eq!(preview.raw_version().unwrap(), PREVIEW_GO_VERSION);
        assert!(preview.version().is_ok());
    }

    #[test]
    fn preview_toolchain_keeps_format_errors() {
        let inner = StaticToolchain::new("devel +abc123");
        let preview = PreviewToolchain::new(&inner);
        assert!(matches!(preview.version(), Err(Error::VersionFormatError { .. })));
    }
}
