use ignite_mcu::{ConfigKey, ConfigStore, FlashFs, LogCategory, StoreError};

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save WiFi SSID and PSK
    SaveWifi { ssid: String, pass: String },
    /// Print the saved WiFi SSID and PSK, one per line
    LoadWifi,
    /// Save a configuration value
    Save { key: Key, value: String },
    /// Print a configuration value
    Load { key: Key },
    /// Print every configuration value
    Show,
    /// Clear the node registration (IDs, status, WiFi credentials, try count)
    Clear,
    /// Truncate a single flash file, e.g. /last_ip.txt
    ClearFile { path: String },
    /// Save the latest message for a log category (name or numeric code)
    SaveLog { category: LogCategory, message: String },
    /// Print the latest message for a log category
    LoadLog { category: LogCategory },
    /// Render a status message as JSON
    FormatMessage {
        id: String,
        #[arg(allow_hyphen_values = true)]
        kind: i32,
        code: String,
        message: String,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    NodeId,
    GatewayId,
    RegistrationStatus,
    WifiTryCount,
    LastIp,
}

impl From<Key> for ConfigKey {
    fn from(key: Key) -> Self {
        match key {
            Key::NodeId => ConfigKey::NodeId,
            Key::GatewayId => ConfigKey::GatewayId,
            Key::RegistrationStatus => ConfigKey::RegistrationStatus,
            Key::WifiTryCount => ConfigKey::WifiTryCount,
            Key::LastIp => ConfigKey::LastIp,
        }
    }
}

/// Run a command against the store and return what should be printed
pub fn execute<F: FlashFs>(
    store: &mut ConfigStore<F>,
    command: Command,
) -> Result<String, StoreError> {
    match command {
        Command::SaveWifi { ssid, pass } => {
            store.save_wifi_credentials(&ssid, &pass)?;
            Ok(String::new())
        }
        Command::LoadWifi => {
            let creds = store.load_wifi_credentials()?;
            Ok(format!("{}\n{}", creds.ssid, creds.pass))
        }
        Command::Save { key, value } => {
            store.save(key.into(), &value)?;
            Ok(String::new())
        }
        Command::Load { key } => store.load(key.into()),
        Command::Show => Ok(show(store)),
        Command::Clear => {
            store.clear_all()?;
            Ok(String::new())
        }
        Command::ClearFile { path } => {
            store.clear_file(&path)?;
            Ok(String::new())
        }
        Command::SaveLog { category, message } => {
            store.save_log(category, &message)?;
            Ok(String::new())
        }
        Command::LoadLog { category } => store.load_log(category),
        Command::FormatMessage {
            id,
            kind,
            code,
            message,
        } => Ok(ignite_mcu::format_message(&id, kind, &code, &message)),
    }
}

fn show<F: FlashFs>(store: &ConfigStore<F>) -> String {
    let mut lines = Vec::new();
    match store.load_wifi_credentials() {
        Ok(creds) => lines.push(format!("ssid: {}", creds.ssid)),
        Err(e) => lines.push(format!("ssid: ({})", describe(&e))),
    }
    for key in ConfigKey::ALL {
        let value = store.load(key).unwrap_or_else(|e| format!("({})", describe(&e)));
        lines.push(format!("{}: {value}", key.name()));
    }
    lines.join("\n")
}

fn describe(e: &StoreError) -> &'static str {
    if e.is_missing() {
        "not set"
    } else {
        "unreadable"
    }
}
