// src/models.rs
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::generators::CharacterClass;

/// The set of character classes a password must cover.
///
/// Iteration always follows class order (lower, upper, numeric, special)
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    classes: BTreeSet<CharacterClass>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::from_iter(CharacterClass::ALL)
    }

    pub fn insert(&mut self, class: CharacterClass) -> bool {
        self.classes.insert(class)
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.classes.iter().copied()
    }
}

impl FromIterator<CharacterClass> for Criteria {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        Criteria {
            classes: iter.into_iter().collect(),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub fn from_criteria(length: usize, criteria: &Criteria) -> Self {
        Self {
            length,
            include_lowercase: criteria.contains(CharacterClass::Lower),
            include_uppercase: criteria.contains(CharacterClass::Upper),
            include_numbers: criteria.contains(CharacterClass::Numeric),
            include_symbols: criteria.contains(CharacterClass::Special),
        }
    }

    pub fn criteria(&self) -> Criteria {
        let flags = [
            (self.include_lowercase, CharacterClass::Lower),
            (self.include_uppercase, CharacterClass::Upper),
            (self.include_numbers, CharacterClass::Numeric),
            (self.include_symbols, CharacterClass::Special),
        ];

        flags
            .into_iter()
            .filter_map(|(selected, class)| selected.then_some(class))
            .collect()
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 128,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

/// Machine-readable result printed with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    pub password: Option<String>,
    pub length: Option<usize>,
    pub classes: Vec<CharacterClass>,
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn success(password: String, criteria: &Criteria) -> Self {
        Self {
            success: true,
            length: Some(password.chars().count()),
            password: Some(password),
            classes: criteria.iter().collect(),
            error: None,
        }
    }

    pub fn failure(error: impl ToString, criteria: Option<&Criteria>) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            classes: criteria.map(|c| c.iter().collect()).unwrap_or_default(),
            error: Some(error.to_string()),
        }
    }
}
