//! In-memory flash filesystem for tests and simulation

use std::collections::HashMap;

use crate::storage::{FlashFs, FsError};

/// Flash filesystem held entirely in memory
///
/// Behaves like a freshly formatted SPIFFS partition: no files until the
/// first write. `failing_mount()` builds one whose mount always fails, for
/// exercising the unmounted path.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: HashMap<String, String>,
    mounted: bool,
    mount_fails: bool,
    write_failures: Vec<String>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_mount() -> Self {
        Self {
            mount_fails: true,
            ..Self::default()
        }
    }

    /// Pre-populate a file, as if written by an earlier firmware run
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    /// Make every write or truncate of `path` fail, like a worn-out sector
    pub fn with_write_failure(mut self, path: &str) -> Self {
        self.write_failures.push(path.to_string());
        self
    }

    /// Raw file contents (for test verification)
    pub fn contents(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    fn check_mounted(&self) -> Result<(), FsError> {
        if self.mounted {
            Ok(())
        } else {
            Err(FsError::NotMounted)
        }
    }
}

impl FlashFs for MemoryFs {
    fn mount(&mut self) -> Result<(), FsError> {
        if self.mount_fails {
            return Err(FsError::Io {
                path: "/".to_string(),
                source: std::io::Error::other("no formatted partition"),
            });
        }
        self.mounted = true;
        Ok(())
    }

    fn read(&self, path: &str) -> Result<String, FsError> {
        self.check_mounted()?;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), FsError> {
        self.check_mounted()?;
        if self.write_failures.iter().any(|p| p == path) {
            return Err(FsError::Io {
                path: path.to_string(),
                source: std::io::Error::other("write failed"),
            });
        }
        self.files.insert(path.to_string(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.mounted && self.files.contains_key(path)
    }
}
