use std::path::PathBuf;

use crate::error::{Error, Result};

/// Everything the engine needs to scaffold one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Module name written into the manifest.
    pub project_name: String,
    /// Directory the scaffold is created in.
    pub root_path: PathBuf,
    /// Emit `tailwind.config.js`.
    pub use_css_framework: bool,
    /// Emit `go.mod`.
    pub generate_module_manifest: bool,
}

impl ScaffoldRequest {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(project_name: S, root_path: P) -> Self {
        Self {
            project_name: project_name.into(),
            root_path: root_path.into(),
            use_css_framework: false,
            generate_module_manifest: false,
        }
    }

    pub fn with_css_framework(mut self, enabled: bool) -> Self {
        self.use_css_framework = enabled;
        self
    }

    pub fn with_module_manifest(mut self, enabled: bool) -> Self {
        self.generate_module_manifest = enabled;
        self
    }

    /// Rejects requests with an empty project name or root path.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::ConfigurationError(
                "project name must not be empty".to_string(),
            ));
        }
        if self.root_path.as_os_str().is_empty() {
            return Err(Error::ConfigurationError(
                "project path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_toggles() {
        let request = ScaffoldRequest::new("shop", "/tmp/shop")
            .with_css_framework(true)
            .with_module_manifest(true);
        assert_eq!(request.project_name, "shop");
        assert_eq!(request.root_path, PathBuf::from("/tmp/shop"));
        assert!(request.use_css_framework);
        assert!(request.generate_module_manifest);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn toggles_default_to_off() {
        let request = ScaffoldRequest::new("shop", "/tmp/shop");
        assert!(!request.use_css_framework);
        assert!(!request.generate_module_manifest);
    }

    #[test]
    fn rejects_empty_project_name() {
        for name in ["", "   "] {
            let request = ScaffoldRequest::new(name, "/tmp/shop");
            assert!(matches!(request.validate(), Err(Error::ConfigurationError(_))));
        }
    }

    #[test]
    fn rejects_empty_root_path() {
        let request = ScaffoldRequest::new("shop", "");
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("project path"));
    }
}
