// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;
pub mod sampler;
pub mod validation;

pub use charset::CharacterClass;
pub use password::PasswordGenerator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("No character classes selected")]
    NoClassesSelected,

    #[error("Password length {length} is too short to include all {required} selected character types")]
    LengthTooShort { length: usize, required: usize },

    #[error("Failed to generate a valid password after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
