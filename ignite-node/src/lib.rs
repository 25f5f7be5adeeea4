extern crate self as ignite_node;

mod commands;
pub mod console;
mod home;

pub use commands::{Command, Key, execute};
pub use home::{HOME_ENV, HomeError, prepare_home, resolve_home};

/// Mount the flash directory and run `command` against it
///
/// `format-message` is pure and never touches the flash directory.
pub fn run(home: Option<std::path::PathBuf>, command: Command) -> anyhow::Result<String> {
    if let Command::FormatMessage {
        id,
        kind,
        code,
        message,
    } = &command
    {
        return Ok(ignite_mcu::format_message(id, *kind, code, message));
    }

    let home = ignite_node::prepare_home(home)?;
    log::info!("Using flash directory {}", home.display());
    let mut store = ignite_mcu::ConfigStore::start(ignite_mcu::DirFs::new(home))?;
    Ok(ignite_node::execute(&mut store, command)?)
}
