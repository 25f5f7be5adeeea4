//! Flash file layout for Ignite node configuration
//!
//! Every persisted value lives in its own text file at the filesystem root.
//! The paths are shared by the firmware and any host tooling that reads a
//! flash image, so they must never change.

/// WiFi credentials: SSID on line 1, PSK on line 2
pub const WIFI_CREDENTIALS: &str = "/cl_conf.txt";

/// Node ID assigned during registration
pub const NODE_ID: &str = "/node_conf.txt";

/// Upstream gateway ID
pub const GATEWAY_ID: &str = "/gateway_conf.txt";

/// Registration status flag
pub const REGISTRATION_STATUS: &str = "/registration_conf.txt";

/// WiFi connection retry counter (decimal text)
pub const WIFI_TRY_COUNT: &str = "/wifiTryCount_conf.txt";

/// Last IP address obtained from DHCP
pub const LAST_IP: &str = "/last_ip.txt";

/// Last error log message
pub const ERROR_LOG: &str = "/error_log.txt";

/// Info log placeholder. Never written by the store.
pub const INFO_LOG: &str = "/info_log.txt";

/// Files truncated by a configuration reset, in reset order
///
/// `LAST_IP` and the log files survive a reset.
pub const CLEARED_ON_RESET: [&str; 5] = [
    NODE_ID,
    GATEWAY_ID,
    REGISTRATION_STATUS,
    WIFI_CREDENTIALS,
    WIFI_TRY_COUNT,
];

/// Line terminator appended to every saved value
pub const LINE_END: &str = "\r\n";
