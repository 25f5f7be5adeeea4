//! Configuration store
//!
//! Maps each logical configuration key to its own text file on flash. Every
//! save truncates and rewrites the file; every load re-reads it. Nothing is
//! cached.

use ignite_proto::LogCategory;
use ignite_proto::files::{self, LINE_END};
use log::*;

use crate::storage::{FlashFs, FsError};
use crate::wifi::WifiCredentials;

/// Single-value configuration keys
///
/// WiFi credentials are a two-field entry and have their own methods on
/// [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    NodeId,
    GatewayId,
    RegistrationStatus,
    WifiTryCount,
    LastIp,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::NodeId,
        ConfigKey::GatewayId,
        ConfigKey::RegistrationStatus,
        ConfigKey::WifiTryCount,
        ConfigKey::LastIp,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ConfigKey::NodeId => files::NODE_ID,
            ConfigKey::GatewayId => files::GATEWAY_ID,
            ConfigKey::RegistrationStatus => files::REGISTRATION_STATUS,
            ConfigKey::WifiTryCount => files::WIFI_TRY_COUNT,
            ConfigKey::LastIp => files::LAST_IP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::NodeId => "nodeID",
            ConfigKey::GatewayId => "gatewayID",
            ConfigKey::RegistrationStatus => "registrationStatus",
            ConfigKey::WifiTryCount => "wifiTryCount",
            ConfigKey::LastIp => "lastIP",
        }
    }

    /// Value reported when the file exists but is empty
    fn empty_value(&self) -> Option<&'static str> {
        match self {
            ConfigKey::WifiTryCount => Some("0"),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to mount file system: {0}")]
    Mount(#[source] FsError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: FsError,
    },
    #[error("invalid content in {path}: {content:?}")]
    Malformed { path: &'static str, content: String },
    #[error("log category {0} is not supported")]
    UnsupportedLog(LogCategory),
    #[error(transparent)]
    InvalidLogCode(#[from] ignite_proto::LogCategoryError),
}

impl StoreError {
    /// True when the file simply has not been written yet
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            StoreError::Open {
                source: FsError::NotFound(_),
                ..
            }
        )
    }
}

/// Node configuration persisted on a mounted flash filesystem
///
/// Only obtainable through [`ConfigStore::start`], so every operation runs
/// against a mounted filesystem.
#[derive(Debug)]
pub struct ConfigStore<F: FlashFs> {
    fs: F,
}

impl<F: FlashFs> ConfigStore<F> {
    /// Mount the filesystem and take ownership of it
    pub fn start(mut fs: F) -> Result<Self, StoreError> {
        if let Err(e) = fs.mount() {
            error!("Failed to mount file system: {e}");
            return Err(StoreError::Mount(e));
        }
        info!("File system mounted");
        Ok(Self { fs })
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Save a single-line value, replacing any previous one
    pub fn save(&mut self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        self.write_line(key.path(), value)?;
        info!("Saving {}: {value}", key.name());
        Ok(())
    }

    /// Load a value with surrounding whitespace removed
    pub fn load(&self, key: ConfigKey) -> Result<String, StoreError> {
        let mut value = self.read_trimmed(key.path())?;
        if value.is_empty() {
            if let Some(empty) = key.empty_value() {
                value = empty.to_string();
            }
        }
        info!("Loading {}: {value}", key.name());
        Ok(value)
    }

    pub fn save_wifi_credentials(&mut self, ssid: &str, pass: &str) -> Result<(), StoreError> {
        let contents = WifiCredentials::new(ssid, pass).to_file_contents();
        self.write_raw(files::WIFI_CREDENTIALS, &contents)?;
        info!("Saving WiFi credentials for SSID {ssid}");
        Ok(())
    }

    pub fn load_wifi_credentials(&self) -> Result<WifiCredentials, StoreError> {
        let path = files::WIFI_CREDENTIALS;
        let content = self.read_raw(path)?;
        match WifiCredentials::parse(&content) {
            Some(creds) => {
                info!("Loading WiFi credentials for SSID {}", creds.ssid);
                Ok(creds)
            }
            None => {
                warn!("Invalid content in {path}: {:?}", content.trim());
                Err(StoreError::Malformed {
                    path,
                    content: content.trim().to_string(),
                })
            }
        }
    }

    /// WiFi retry counter as a number. A cleared counter reads as 0.
    pub fn load_wifi_try_count(&self) -> Result<u32, StoreError> {
        let value = self.load(ConfigKey::WifiTryCount)?;
        value.parse().map_err(|_| {
            warn!("WiFi try count is not a number: {value:?}");
            StoreError::Malformed {
                path: files::WIFI_TRY_COUNT,
                content: value,
            }
        })
    }

    pub fn save_wifi_try_count(&mut self, count: u32) -> Result<(), StoreError> {
        self.save(ConfigKey::WifiTryCount, &count.to_string())
    }

    /// Truncate every file that belongs to a node registration
    ///
    /// Covers node ID, gateway ID, registration status, WiFi credentials and
    /// the WiFi retry counter. The last IP and the logs are kept. Every file
    /// is attempted even if an earlier one fails; the first failure is
    /// returned.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        info!("Clearing configuration files");
        let mut first_err = None;
        for path in files::CLEARED_ON_RESET {
            if let Err(e) = self.clear_file(path) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            None => {
                info!("Configuration files cleared");
                Ok(())
            }
            Some(e) => Err(e),
        }
    }

    /// Truncate one file, creating it if missing
    pub fn clear_file(&mut self, path: &str) -> Result<(), StoreError> {
        info!("Clearing {path}");
        self.fs.truncate(path).map_err(|source| {
            error!("Failed to clear {path}: {source}");
            StoreError::Open {
                path: path.to_string(),
                source,
            }
        })
    }

    /// Persist the latest message for a log category
    ///
    /// Only `Error` is written. `Info` is accepted and dropped; no info log
    /// file is ever created. Other categories are rejected.
    pub fn save_log(&mut self, category: LogCategory, message: &str) -> Result<(), StoreError> {
        match category {
            LogCategory::Error => {
                self.write_line(files::ERROR_LOG, message)?;
                info!("Saving error log: {message}");
                Ok(())
            }
            LogCategory::Info => {
                debug!("Info log not persisted: {message}");
                Ok(())
            }
            LogCategory::Warning | LogCategory::Verbose => {
                warn!("Log category {category} is not supported");
                Err(StoreError::UnsupportedLog(category))
            }
        }
    }

    /// [`save_log`](Self::save_log) addressed by numeric log type code
    pub fn save_log_code(&mut self, code: i32, message: &str) -> Result<(), StoreError> {
        self.save_log(LogCategory::try_from(code)?, message)
    }

    pub fn load_log(&self, category: LogCategory) -> Result<String, StoreError> {
        let Some(path) = category.path() else {
            warn!("Log category {category} is not supported");
            return Err(StoreError::UnsupportedLog(category));
        };
        let message = self.read_trimmed(path)?;
        info!("Loading {category} log: {message}");
        Ok(message)
    }

    pub fn load_log_code(&self, code: i32) -> Result<String, StoreError> {
        self.load_log(LogCategory::try_from(code)?)
    }

    fn write_line(&mut self, path: &'static str, value: &str) -> Result<(), StoreError> {
        self.write_raw(path, &format!("{value}{LINE_END}"))
    }

    fn write_raw(&mut self, path: &'static str, contents: &str) -> Result<(), StoreError> {
        self.fs.write(path, contents).map_err(|source| {
            error!("Failed to open {path} for writing: {source}");
            StoreError::Open {
                path: path.to_string(),
                source,
            }
        })
    }

    fn read_raw(&self, path: &'static str) -> Result<String, StoreError> {
        self.fs.read(path).map_err(|source| match source {
            FsError::NotText(_) => {
                warn!("{path} is not valid text");
                StoreError::Malformed {
                    path,
                    content: String::new(),
                }
            }
            source => {
                warn!("Failed to open {path}: {source}");
                StoreError::Open {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }

    fn read_trimmed(&self, path: &'static str) -> Result<String, StoreError> {
        Ok(self.read_raw(path)?.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryFs;

    fn store() -> ConfigStore<MemoryFs> {
        ConfigStore::start(MemoryFs::new()).unwrap()
    }

    #[test]
    fn mount_failure_is_reported() {
        let err = ConfigStore::start(MemoryFs::failing_mount()).unwrap_err();
        assert!(matches!(err, StoreError::Mount(_)));
    }

    #[test]
    fn save_then_load() {
        let mut store = store();
        store.save(ConfigKey::NodeId, "node-42").unwrap();
        assert_eq!(store.load(ConfigKey::NodeId).unwrap(), "node-42");
        assert_eq!(store.fs().contents("/node_conf.txt"), Some("node-42\r\n"));
    }

    #[test]
    fn every_key_round_trips_to_its_own_file() {
        let mut store = store();
        for (i, key) in ConfigKey::ALL.into_iter().enumerate() {
            store.save(key, &format!("value {i}")).unwrap();
        }
        for (i, key) in ConfigKey::ALL.into_iter().enumerate() {
            assert_eq!(store.load(key).unwrap(), format!("value {i}"));
            assert!(store.fs().exists(key.path()));
        }
        assert_eq!(store.fs().contents("/last_ip.txt"), Some("value 4\r\n"));
    }

    #[test]
    fn save_overwrites() {
        let mut store = store();
        store.save(ConfigKey::GatewayId, "a-much-longer-gateway-id").unwrap();
        store.save(ConfigKey::GatewayId, "gw").unwrap();
        assert_eq!(store.load(ConfigKey::GatewayId).unwrap(), "gw");
        assert_eq!(store.fs().contents("/gateway_conf.txt"), Some("gw\r\n"));
    }

    #[test]
    fn load_trims_whitespace() {
        let fs = MemoryFs::new().with_file("/registration_conf.txt", "  registered \n\n");
        let store = ConfigStore::start(fs).unwrap();
        assert_eq!(store.load(ConfigKey::RegistrationStatus).unwrap(), "registered");
    }

    #[test]
    fn missing_file_fails() {
        let store = store();
        let err = store.load(ConfigKey::LastIp).unwrap_err();
        assert!(err.is_missing());
        assert!(matches!(err, StoreError::Open { ref path, .. } if path == "/last_ip.txt"));
    }

    #[test]
    fn empty_try_count_reads_as_zero() {
        let mut store = store();
        store.save(ConfigKey::WifiTryCount, "").unwrap();
        assert_eq!(store.load(ConfigKey::WifiTryCount).unwrap(), "0");
        assert_eq!(store.load_wifi_try_count().unwrap(), 0);

        store.save_wifi_try_count(3).unwrap();
        assert_eq!(store.load(ConfigKey::WifiTryCount).unwrap(), "3");
        assert_eq!(store.load_wifi_try_count().unwrap(), 3);
    }

    #[test]
    fn non_numeric_try_count() {
        let mut store = store();
        store.save(ConfigKey::WifiTryCount, "three").unwrap();
        assert!(matches!(
            store.load_wifi_try_count(),
            Err(StoreError::Malformed { content, .. }) if content == "three"
        ));
    }

    #[test]
    fn empty_value_only_defaults_for_try_count() {
        let mut store = store();
        store.save(ConfigKey::NodeId, "").unwrap();
        assert_eq!(store.load(ConfigKey::NodeId).unwrap(), "");
    }

    #[test]
    fn wifi_credentials_round_trip() {
        let mut store = store();
        store.save_wifi_credentials("office", "hunter2").unwrap();
        assert_eq!(store.fs().contents("/cl_conf.txt"), Some("office\r\nhunter2\r\n"));

        let creds = store.load_wifi_credentials().unwrap();
        assert_eq!(creds, WifiCredentials::new("office", "hunter2"));
    }

    #[test]
    fn wifi_credentials_written_elsewhere() {
        for content in ["alice\r\nsecret", "alice\nsecret", "alice\rsecret"] {
            let fs = MemoryFs::new().with_file("/cl_conf.txt", content);
            let store = ConfigStore::start(fs).unwrap();
            assert_eq!(
                store.load_wifi_credentials().unwrap(),
                WifiCredentials::new("alice", "secret")
            );
        }

        let fs = MemoryFs::new().with_file("/cl_conf.txt", "ssidonly\n");
        let store = ConfigStore::start(fs).unwrap();
        assert_eq!(
            store.load_wifi_credentials().unwrap(),
            WifiCredentials::new("ssidonly", "")
        );
    }

    #[test]
    fn malformed_wifi_credentials() {
        let fs = MemoryFs::new().with_file("/cl_conf.txt", "aloneline");
        let store = ConfigStore::start(fs).unwrap();
        let err = store.load_wifi_credentials().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Malformed { path: "/cl_conf.txt", ref content } if content == "aloneline"
        ));
    }

    #[test]
    fn missing_wifi_credentials() {
        assert!(store().load_wifi_credentials().unwrap_err().is_missing());
    }

    #[test]
    fn clear_all_truncates_registration_files() {
        let mut store = store();
        store.save_wifi_credentials("office", "hunter2").unwrap();
        store.save(ConfigKey::NodeId, "node").unwrap();
        store.save(ConfigKey::WifiTryCount, "5").unwrap();
        store.save(ConfigKey::LastIp, "10.0.0.7").unwrap();
        store.save_log(LogCategory::Error, "boom").unwrap();

        for _ in 0..2 {
            store.clear_all().unwrap();
            for path in files::CLEARED_ON_RESET {
                assert_eq!(store.fs().contents(path), Some(""), "{path}");
            }
            assert_eq!(store.load(ConfigKey::NodeId).unwrap(), "");
            assert_eq!(store.load(ConfigKey::GatewayId).unwrap(), "");
            assert_eq!(store.load(ConfigKey::RegistrationStatus).unwrap(), "");
            assert_eq!(store.load(ConfigKey::WifiTryCount).unwrap(), "0");
            assert!(matches!(
                store.load_wifi_credentials(),
                Err(StoreError::Malformed { .. })
            ));
        }

        assert_eq!(store.load(ConfigKey::LastIp).unwrap(), "10.0.0.7");
        assert_eq!(store.load_log(LogCategory::Error).unwrap(), "boom");
    }

    #[test]
    fn clear_all_attempts_every_file() {
        let fs = MemoryFs::new().with_write_failure("/gateway_conf.txt");
        let mut store = ConfigStore::start(fs).unwrap();
        store.save_wifi_credentials("office", "hunter2").unwrap();
        store.save(ConfigKey::NodeId, "node").unwrap();
        store.save(ConfigKey::WifiTryCount, "4").unwrap();

        let err = store.clear_all().unwrap_err();
        assert!(matches!(err, StoreError::Open { ref path, .. } if path == "/gateway_conf.txt"));

        assert_eq!(store.fs().contents("/node_conf.txt"), Some(""));
        assert_eq!(store.fs().contents("/registration_conf.txt"), Some(""));
        assert_eq!(store.fs().contents("/cl_conf.txt"), Some(""));
        assert_eq!(store.fs().contents("/wifiTryCount_conf.txt"), Some(""));
    }

    #[test]
    fn clear_file_creates_missing() {
        let mut store = store();
        store.clear_file("/last_ip.txt").unwrap();
        assert_eq!(store.load(ConfigKey::LastIp).unwrap(), "");
    }

    #[test]
    fn error_log_keeps_latest_message() {
        let mut store = store();
        store.save_log(LogCategory::Error, "first").unwrap();
        store.save_log(LogCategory::Error, "second").unwrap();
        assert_eq!(store.load_log(LogCategory::Error).unwrap(), "second");
        assert_eq!(store.fs().contents("/error_log.txt"), Some("second\r\n"));
    }

    #[test]
    fn info_log_is_a_stub() {
        let mut store = store();
        store.save_log(LogCategory::Info, "x").unwrap();
        assert!(!store.fs().exists("/info_log.txt"));
        assert!(store.load_log(LogCategory::Info).unwrap_err().is_missing());
    }

    #[test]
    fn unsupported_log_categories() {
        let mut store = store();
        for category in [LogCategory::Warning, LogCategory::Verbose] {
            assert!(matches!(
                store.save_log(category, "x"),
                Err(StoreError::UnsupportedLog(c)) if c == category
            ));
            assert!(matches!(
                store.load_log(category),
                Err(StoreError::UnsupportedLog(_))
            ));
        }
        assert!(!store.fs().exists("/error_log.txt"));
    }

    #[test]
    fn log_by_numeric_code() {
        let mut store = store();
        store.save_log_code(ignite_proto::LOG_ERROR, "disk full").unwrap();
        assert_eq!(store.load_log_code(2).unwrap(), "disk full");
        assert!(matches!(
            store.save_log_code(9, "x"),
            Err(StoreError::InvalidLogCode(_))
        ));
        assert!(matches!(
            store.save_log_code(1, "x"),
            Err(StoreError::UnsupportedLog(LogCategory::Warning))
        ));
    }
}
