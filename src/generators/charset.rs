// src/generators/charset.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Criteria;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
/// Printable ASCII symbols, each listed once. Disjoint from the other alphabets.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// One of the four fixed character classes a password can be required to cover.
///
/// Variant order is the order alphabets are concatenated into a universe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// Lowercase letters a-z
    Lower,
    /// Uppercase letters A-Z
    Upper,
    /// Digits 0-9
    Numeric,
    /// Punctuation and symbols
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Numeric,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Numeric => NUMBERS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Numeric => "numeric",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The pool of characters eligible for sampling.
///
/// Built fresh for every generation call from the selected classes and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterUniverse {
    chars: Vec<char>,
}

impl CharacterUniverse {
    /// Concatenate the alphabets of the selected classes in class order.
    pub fn build(criteria: &Criteria) -> Self {
        let chars = criteria
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect();

        CharacterUniverse { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for CharacterUniverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
