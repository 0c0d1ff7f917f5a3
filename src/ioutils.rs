use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::constants::DIRECTORY_MODE;

/// The set of filesystem mutations the scaffold engine performs.
///
/// The engine never touches `std::fs` directly, so tests can inject an
/// implementation that records calls or fails on chosen paths.
pub trait Filesystem {
    /// Whether something already exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing ancestors. Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates an empty file at `path`, truncating it if it exists.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    /// Appends `content` to the existing file at `path` and syncs it to disk.
    fn append(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Whether mutations are only being previewed.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Filesystem backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIRECTORY_MODE);
        }
        #[cfg(not(unix))]
        let _ = DIRECTORY_MODE;
        builder.create(path)
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        File::create(path).map(|_| ())
    }

    fn append(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        file.sync_all()
    }
}

/// Filesystem that reports what would happen without mutating anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunFilesystem;

impl Filesystem for DryRunFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn create_file(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn append(&self, _path: &Path, _content: &str) -> io::Result<()> {
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
