//! Ignite MCU Library
//!
//! Persistent configuration for an Ignite node-registration client running on
//! a microcontroller with a small flash filesystem.
//!
//! This crate provides:
//! - The `FlashFs` trait that a board's filesystem implements
//! - `ConfigStore`: WiFi credentials, node/gateway IDs, registration status,
//!   WiFi retry counter, last IP and the error log, one text file each
//! - In-memory and host-directory filesystems for tests and host tooling
//!
//! # Example
//!
//! ```
//! use ignite_mcu::{ConfigKey, ConfigStore, MemoryFs};
//!
//! let mut store = ConfigStore::start(MemoryFs::new()).unwrap();
//! store.save(ConfigKey::NodeId, "node-1").unwrap();
//! assert_eq!(store.load(ConfigKey::NodeId).unwrap(), "node-1");
//! ```

pub mod dir;
pub mod memory;
pub mod storage;
pub mod store;
pub mod wifi;

pub use dir::DirFs;
pub use memory::MemoryFs;
pub use storage::*;
pub use store::*;
pub use wifi::*;

pub use ignite_proto::{LogCategory, format_message};
