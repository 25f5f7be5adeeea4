use std::path::PathBuf;

pub const HOME_ENV: &str = "IGNITE_HOME";

#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("could not determine home directory, set IGNITE_HOME or pass --home")]
    NoHomeDir,
    #[error("failed to create flash directory {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Directory holding the flash image: `--home`, else `$IGNITE_HOME`, else
/// `~/.ignite`
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf, HomeError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(".ignite"))
        .ok_or(HomeError::NoHomeDir)
}

/// Resolve the flash directory and create it if needed
pub fn prepare_home(explicit: Option<PathBuf>) -> Result<PathBuf, HomeError> {
    let path = resolve_home(explicit)?;
    std::fs::create_dir_all(&path).map_err(|source| HomeError::Create {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
