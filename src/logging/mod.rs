// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger described by `config`.
///
/// Logs go to stderr unless `LOG_FILE` is set, in which case they are appended
/// to that file. Generated passwords are never logged.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = base_builder(config);

    if let Some(path) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    }

    builder.try_init()?;
    log::debug!("Logging initialised at level {}", config.log_level);
    Ok(())
}

fn base_builder(config: &Config) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);
    builder
}

// Open (or create) the log file, creating its directory first
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("passgen.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        // A second open appends to the existing file
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    // The only test that installs the global logger
    #[test]
    fn test_init_pipes_into_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("passgen.log");
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        init(&config).unwrap();
        assert!(path.is_file());
        assert!(matches!(init(&config), Err(LoggingError::AlreadyInitialised(_))));
    }

    #[test]
    fn test_open_log_file_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(open_log_file(dir.path()), Err(LoggingError::Io(_))));
    }
}
