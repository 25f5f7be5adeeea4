//! Host directory as a flash filesystem
//!
//! Lets host tools read and edit a flash image that has been extracted to a
//! directory. `/name.txt` maps to `<root>/name.txt`.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::storage::{FlashFs, FsError};

#[derive(Debug)]
pub struct DirFs {
    root: PathBuf,
    mounted: bool,
}

impl DirFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mounted: false,
        }
    }

    /// Resolve a flash path to a host path. Flash is flat: nested or
    /// relative names are rejected.
    fn resolve(&self, path: &str) -> Result<PathBuf, FsError> {
        if !self.mounted {
            return Err(FsError::NotMounted);
        }
        let name = path.strip_prefix('/').unwrap_or(path);
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(FsError::Io {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a flat flash path"),
            });
        }
        Ok(self.root.join(name))
    }
}

fn io_error(path: &str, source: io::Error) -> FsError {
    match source.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
        io::ErrorKind::InvalidData => FsError::NotText(path.to_string()),
        _ => FsError::Io {
            path: path.to_string(),
            source,
        },
    }
}

impl FlashFs for DirFs {
    fn mount(&mut self) -> Result<(), FsError> {
        let root = self.root.display().to_string();
        let meta = fs::metadata(&self.root).map_err(|e| FsError::Io {
            path: root.clone(),
            source: e,
        })?;
        if !meta.is_dir() {
            return Err(FsError::Io {
                path: root,
                source: io::Error::other("flash root is not a directory"),
            });
        }
        self.mounted = true;
        Ok(())
    }

    fn read(&self, path: &str) -> Result<String, FsError> {
        let host = self.resolve(path)?;
        fs::read_to_string(host).map_err(|e| io_error(path, e))
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), FsError> {
        let host = self.resolve(path)?;
        fs::write(host, contents).map_err(|e| io_error(path, e))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }
}
