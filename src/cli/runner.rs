use crate::{
    cli::Args,
    error::Result,
    ioutils::{DryRunFilesystem, Filesystem, OsFilesystem},
    scaffold::{ScaffoldEngine, ScaffoldRequest},
    toolchain::{GoCommand, GoToolchain, PreviewToolchain},
};

/// Main CLI runner that turns parsed arguments into a scaffold run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the scaffold with the installed Go toolchain
    pub fn run(self) -> Result<()> {
        self.run_with_toolchain(&GoCommand::new())
    }

    /// Executes the scaffold, asking `toolchain` for the Go version
    pub fn run_with_toolchain(self, toolchain: &dyn GoToolchain) -> Result<()> {
        let request = self.request();
        let fs = self.filesystem();
        let preview = PreviewToolchain::new(toolchain);
        let toolchain: &dyn GoToolchain = if self.args.dry_run { &preview } else { toolchain };
        let engine = ScaffoldEngine::new(fs, toolchain);

        log::debug!("Scaffolding with {request:?}");
        let root = request.root_path.clone();
        engine.scaffold(request)?;

        if self.args.dry_run {
            log::info!("Dry run finished, nothing was written to {}.", root.display());
        } else {
            log::info!("Project created successfully in {}.", root.display());
        }
        Ok(())
    }

    /// Builds the immutable request handed to the engine
    fn request(&self) -> ScaffoldRequest {
        ScaffoldRequest::new(self.args.project_name.clone(), self.args.project_path.clone())
            .with_css_framework(self.args.use_tailwind)
            .with_module_manifest(self.args.generate_go_mod)
    }

    fn filesystem(&self) -> &'static dyn Filesystem {
        if self.args.dry_run {
            &DryRunFilesystem
        } else {
            &OsFilesystem
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
