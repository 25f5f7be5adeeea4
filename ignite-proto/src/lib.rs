//! Ignite node protocol - file layout, log categories and status messages

pub mod files;
mod message;

pub use message::{StatusMessage, format_message};

// Log type codes
pub const LOG_INFO: i32 = 0;
pub const LOG_WARNING: i32 = 1;
pub const LOG_ERROR: i32 = 2;
pub const LOG_VERBOSE: i32 = 3;

/// Log category a message is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Info,
    Warning,
    Error,
    Verbose,
}

impl LogCategory {
    pub const ALL: [LogCategory; 4] = [
        LogCategory::Info,
        LogCategory::Warning,
        LogCategory::Error,
        LogCategory::Verbose,
    ];

    pub fn code(&self) -> i32 {
        match self {
            LogCategory::Info => LOG_INFO,
            LogCategory::Warning => LOG_WARNING,
            LogCategory::Error => LOG_ERROR,
            LogCategory::Verbose => LOG_VERBOSE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Info => "info",
            LogCategory::Warning => "warning",
            LogCategory::Error => "error",
            LogCategory::Verbose => "verbose",
        }
    }

    /// File backing this category, if the category is persisted at all
    pub fn path(&self) -> Option<&'static str> {
        match self {
            LogCategory::Error => Some(files::ERROR_LOG),
            LogCategory::Info => Some(files::INFO_LOG),
            LogCategory::Warning | LogCategory::Verbose => None,
        }
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LogCategoryError {
    #[error("unknown log type code: {0}")]
    UnknownCode(i32),
    #[error("unknown log category: {0}")]
    UnknownName(String),
}

impl TryFrom<i32> for LogCategory {
    type Error = LogCategoryError;

    fn try_from(code: i32) -> Result<Self, LogCategoryError> {
        match code {
            LOG_INFO => Ok(LogCategory::Info),
            LOG_WARNING => Ok(LogCategory::Warning),
            LOG_ERROR => Ok(LogCategory::Error),
            LOG_VERBOSE => Ok(LogCategory::Verbose),
            other => Err(LogCategoryError::UnknownCode(other)),
        }
    }
}

/// Accepts either the category name or its numeric code
impl std::str::FromStr for LogCategory {
    type Err = LogCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i32>() {
            return LogCategory::try_from(code);
        }
        LogCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogCategoryError::UnknownName(s.to_string()))
    }
}
