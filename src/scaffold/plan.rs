use crate::constants::{
    FRAMEWORK_CONFIG_FILENAME, FRAMEWORK_CONFIG_TEMPLATE, MANIFEST_FILENAME,
};

/// Directories created under the project root, in creation order.
pub const DIRECTORY_PLAN: &[&str] = &[
    "cmd/main",
    "web/template",
    "web/public/css",
    "web/public/assets",
    "internal/server",
    "internal/routes",
];

/// Empty placeholder files created under the project root, in creation order.
///
/// `web/main.css` lives next to `web/public`, not inside `web/public/css`.
pub const FILE_PLAN: &[&str] = &[
    "cmd/main/main.go",
    "web/template/index.html",
    "web/public/css/style.css",
    "web/main.css",
    "internal/server/server.go",
    "internal/routes/route.go",
];

/// A file written at the project root with generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_name: &'static str,
    pub content: String,
}

impl GeneratedArtifact {
    /// The `go.mod` manifest naming the module and its Go version.
    ///
    /// # Examples
    /// ```
    /// use goscaffold::scaffold::GeneratedArtifact;
    ///
    /// let manifest = GeneratedArtifact::module_manifest("demo", "1.21.3");
    /// assert_eq!(manifest.content, "module demo\n\ngo 1.21.3");
    /// ```
    pub fn module_manifest(project_name: &str, go_version: &str) -> Self {
        Self {
            file_name: MANIFEST_FILENAME,
            content: format!("module {project_name}\n\ngo {go_version}"),
        }
    }

    /// The static `tailwind.config.js`.
    pub fn framework_config() -> Self {
        Self {
            file_name: FRAMEWORK_CONFIG_FILENAME,
            content: FRAMEWORK_CONFIG_TEMPLATE.to_string(),
        }
    }
}
