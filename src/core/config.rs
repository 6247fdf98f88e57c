// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::generators::password::DEFAULT_MAX_ATTEMPTS;

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
    pub max_generation_attempts: Option<usize>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 128,
            min_password_length: 8,
            max_password_length: 128,
            max_generation_attempts: Some(DEFAULT_MAX_ATTEMPTS),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown or unparsable values keep their defaults.
    ///
    /// Also returns a warning for every value that was ignored or adjusted. Loading
    /// happens before the logger exists, so the caller logs them once it does.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(length) = parse_var(&lookup, "PASSWORD_MIN_LENGTH", &mut warnings) {
            config.min_password_length = length;
        }

        if let Some(length) = parse_var(&lookup, "PASSWORD_MAX_LENGTH", &mut warnings) {
            config.max_password_length = length;
        }

        if let Some(attempts) = parse_var::<usize, _>(&lookup, "MAX_GENERATION_ATTEMPTS", &mut warnings) {
            config.max_generation_attempts = if attempts == 0 { None } else { Some(attempts) };
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE").filter(|f| !f.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(file));
        }

        config.sanitize_lengths(&mut warnings);
        (config, warnings)
    }

    pub fn length_bounds(&self) -> (usize, usize) {
        (self.min_password_length, self.max_password_length)
    }

    // Inconsistent bounds would make every length invalid, so fall back to the defaults
    fn sanitize_lengths(&mut self, warnings: &mut Vec<String>) {
        let defaults = Config::default();

        if self.min_password_length == 0 || self.min_password_length > self.max_password_length {
            warnings.push(format!(
                "Invalid password length bounds {}..={}, using {}..={}",
                self.min_password_length,
                self.max_password_length,
                defaults.min_password_length,
                defaults.max_password_length
            ));
            self.min_password_length = defaults.min_password_length;
            self.max_password_length = defaults.max_password_length;
        }

        if !(self.min_password_length..=self.max_password_length).contains(&self.default_password_length) {
            let clamped = self
                .default_password_length
                .clamp(self.min_password_length, self.max_password_length);
            warnings.push(format!(
                "Default password length {} is outside {}..={}, using {}",
                self.default_password_length,
                self.min_password_length,
                self.max_password_length,
                clamped
            ));
            self.default_password_length = clamped;
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key));
            None
        }
    }
}
