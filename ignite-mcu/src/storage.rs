//! Flash Filesystem Abstraction
//!
//! The store talks to flash through this trait so the same code runs against
//! SPIFFS/LittleFS on the device, a directory on a host, or memory in tests.

/// Errors reported by a filesystem backend
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file system is not mounted")]
    NotMounted,
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("{0} is not valid UTF-8 text")]
    NotText(String),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Flat text-file filesystem on non-volatile storage
///
/// Paths are absolute flash paths such as `/node_conf.txt`. Each call opens,
/// uses and closes the file; implementations must not hold handles across
/// calls.
pub trait FlashFs {
    /// Mount the underlying storage. Must succeed before any other call.
    fn mount(&mut self) -> Result<(), FsError>;

    /// Read the whole file as text. Fails with `NotFound` if the file does
    /// not exist and `NotText` if it is not UTF-8.
    fn read(&self, path: &str) -> Result<String, FsError>;

    /// Truncate (creating if missing) and write `contents`.
    fn write(&mut self, path: &str, contents: &str) -> Result<(), FsError>;

    /// Truncate (creating if missing) without writing anything.
    fn truncate(&mut self, path: &str) -> Result<(), FsError> {
        self.write(path, "")
    }

    fn exists(&self, path: &str) -> bool;
}
