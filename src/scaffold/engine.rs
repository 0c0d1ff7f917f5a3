use std::path::Path;

use crate::error::{Error, Result};
use crate::ioutils::Filesystem;
use crate::toolchain::GoToolchain;

use super::operation::ScaffoldOperation;
use super::plan::{GeneratedArtifact, DIRECTORY_PLAN, FILE_PLAN};
use super::request::ScaffoldRequest;

/// Creates a project skeleton by running the fixed plan against a filesystem.
///
/// Every step stops at the first failure and returns it. Nothing is rolled back,
/// so a failed run may leave a partial tree behind. Running the same request
/// again is safe: directories are created idempotently and files are truncated.
pub struct ScaffoldEngine<'a> {
    /// Dependencies
    fs: &'a dyn Filesystem,
    toolchain: &'a dyn GoToolchain,
}

impl<'a> ScaffoldEngine<'a> {
    pub fn new(fs: &'a dyn Filesystem, toolchain: &'a dyn GoToolchain) -> Self {
        Self { fs, toolchain }
    }

    /// Scaffolds a project as described by `request`.
    ///
    /// Order: root, directories, files, then the manifest and the framework
    /// config when requested. Later steps rely on the earlier ones.
    pub fn scaffold(&self, request: ScaffoldRequest) -> Result<()> {
        request.validate()?;
        let root = request.root_path.as_path();

        log::info!("Creating project folder...");
        self.apply(self.create_directory(root))?;

        log::info!("Creating folders...");
        self.ensure_directories(root, DIRECTORY_PLAN)?;

        log::info!("Creating files...");
        self.ensure_files(root, FILE_PLAN)?;

        if request.generate_module_manifest {
            // Resolved before touching go.mod so a bad version leaves no empty manifest.
            let go_version = self.toolchain.version()?;
            let manifest =
                GeneratedArtifact::module_manifest(&request.project_name, &go_version);
            self.write_artifact(root, manifest)?;
        }

        if request.use_css_framework {
            self.write_artifact(root, GeneratedArtifact::framework_config())?;
        }

        Ok(())
    }

    /// Creates every directory of `plan` under `root`.
    pub fn ensure_directories(&self, root: &Path, plan: &[&str]) -> Result<()> {
        for entry in plan {
            self.apply(self.create_directory(&root.join(entry)))?;
        }
        Ok(())
    }

    /// Creates an empty file for every entry of `plan` under `root`.
    pub fn ensure_files(&self, root: &Path, plan: &[&str]) -> Result<()> {
        for entry in plan {
            let target = root.join(entry);
            let target_exists = self.fs.exists(&target);
            self.apply(ScaffoldOperation::CreateFile { target, target_exists })?;
        }
        Ok(())
    }

    fn write_artifact(&self, root: &Path, artifact: GeneratedArtifact) -> Result<()> {
        log::info!("Creating {} file...", artifact.file_name);
        let target = root.join(artifact.file_name);
        let target_exists = self.fs.exists(&target);
        self.apply(ScaffoldOperation::Write { target, content: artifact.content, target_exists })
    }

    fn create_directory(&self, target: &Path) -> ScaffoldOperation {
        ScaffoldOperation::CreateDirectory {
            target: target.to_path_buf(),
            target_exists: self.fs.exists(target),
        }
    }

    /// Performs a single operation, attaching its context to any IO error.
    fn apply(&self, operation: ScaffoldOperation) -> Result<()> {
        log::debug!("Handling scaffold operation: {operation:?}");
        let result = match &operation {
            ScaffoldOperation::CreateDirectory { target, .. } => self.fs.create_dir_all(target),
            ScaffoldOperation::CreateFile { target, .. } => self.fs.create_file(target),
            ScaffoldOperation::Write { target, content, .. } => self
                .fs
                .create_file(target)
                .and_then(|_| self.fs.append(target, content)),
        };

        match result {
            Ok(()) => {
                log::info!("{}", operation.get_message(self.fs.is_dry_run()));
                Ok(())
            }
            Err(source) => {
                log::debug!(
                    "Scaffold operation failed on '{}'",
                    operation.target_path().display()
                );
                Err(Error::FilesystemError { context: operation.error_context(), source })
            }
        }
    }
}
