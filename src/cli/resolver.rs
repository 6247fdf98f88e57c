// src/cli/resolver.rs
use inquire::InquireError;
use log::{debug, info};
use thiserror::Error;

use super::prompts::Prompter;
use crate::core::config::Config;
use crate::generators::CharacterClass;
use crate::models::{Criteria, PasswordGenerationOptions};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Password length must be an integer between {min} and {max}, got '{value}'")]
    InvalidLength { value: String, min: usize, max: usize },

    #[error("At least one character type must be included")]
    NoClassesSelected,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] InquireError),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Supplies a bounded length and a non-empty class selection to the generator.
pub trait CriteriaResolver {
    fn resolve(&mut self) -> Result<PasswordGenerationOptions>;
}

/// Check a length against the inclusive bounds.
pub fn check_length(length: usize, min: usize, max: usize) -> Result<usize> {
    if length < min || length > max {
        return Err(ResolveError::InvalidLength {
            value: length.to_string(),
            min,
            max,
        });
    }

    Ok(length)
}

/// Parse a user-supplied length and check it against the inclusive bounds.
pub fn parse_length(input: &str, min: usize, max: usize) -> Result<usize> {
    let length: usize = input
        .trim()
        .parse()
        .map_err(|_| ResolveError::InvalidLength {
            value: input.to_string(),
            min,
            max,
        })?;

    check_length(length, min, max)
}

/// Resolves options from command-line arguments, without prompting.
pub struct ArgsResolver {
    length: Option<usize>,
    classes: Option<Vec<CharacterClass>>,
    default_length: usize,
    min_length: usize,
    max_length: usize,
}

impl ArgsResolver {
    pub fn new(length: Option<usize>, classes: Option<Vec<CharacterClass>>, config: &Config) -> Self {
        let (min_length, max_length) = config.length_bounds();
        Self {
            length,
            classes,
            default_length: config.default_password_length,
            min_length,
            max_length,
        }
    }
}

impl CriteriaResolver for ArgsResolver {
    fn resolve(&mut self) -> Result<PasswordGenerationOptions> {
        let length = check_length(
            self.length.unwrap_or(self.default_length),
            self.min_length,
            self.max_length,
        )?;

        // No --classes means every class
        let criteria = match &self.classes {
            None => Criteria::all(),
            Some(classes) => classes.iter().copied().collect(),
        };
        if criteria.is_empty() {
            return Err(ResolveError::NoClassesSelected);
        }

        debug!("Resolved from arguments: length {}, classes {:?}", length, criteria);
        Ok(PasswordGenerationOptions::from_criteria(length, &criteria))
    }
}

/// Resolves options by asking the user, re-asking until the answers are usable.
pub struct PromptResolver<P: Prompter> {
    prompter: P,
    default_length: usize,
    min_length: usize,
    max_length: usize,
}

impl<P: Prompter> PromptResolver<P> {
    pub fn new(prompter: P, config: &Config) -> Self {
        let (min_length, max_length) = config.length_bounds();
        Self {
            prompter,
            default_length: config.default_password_length,
            min_length,
            max_length,
        }
    }

    fn prompt_length(&mut self) -> Result<usize> {
        let confirm_message = format!(
            "Would you like to provide the length of the password you want generated? (Defaults to {})",
            self.default_length
        );
        let input_message = format!(
            "Please provide an integer between {} and {}",
            self.min_length, self.max_length
        );

        loop {
            if !self.prompter.confirm(&confirm_message, false)? {
                return Ok(self.default_length);
            }

            let input = self.prompter.text(&input_message)?;
            match parse_length(&input, self.min_length, self.max_length) {
                Ok(length) => return Ok(length),
                Err(e) => {
                    info!("Rejected length input: {}", e);
                    self.prompter.alert("Sorry, you didn't enter a valid number!");
                }
            }
        }
    }

    fn prompt_criteria(&mut self) -> Result<Criteria> {
        let questions = [
            (CharacterClass::Lower, "Would you like to include lower case letters in your password?"),
            (CharacterClass::Upper, "Would you like to include upper case letters in your password?"),
            (CharacterClass::Numeric, "Would you like to include numbers in your password?"),
            (CharacterClass::Special, "Would you like to include special characters in your password?"),
        ];

        loop {
            self.prompter
                .alert("Please select at least one of the following character types");

            let mut criteria = Criteria::new();
            for (class, question) in questions {
                if self.prompter.confirm(question, true)? {
                    criteria.insert(class);
                }
            }

            if !criteria.is_empty() {
                return Ok(criteria);
            }
        }
    }
}

impl<P: Prompter> CriteriaResolver for PromptResolver<P> {
    fn resolve(&mut self) -> Result<PasswordGenerationOptions> {
        let length = self.prompt_length()?;
        let criteria = self.prompt_criteria()?;
        debug!("Resolved from prompts: length {}, classes {:?}", length, criteria);
        Ok(PasswordGenerationOptions::from_criteria(length, &criteria))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a script and records every alert.
    #[derive(Default)]
    pub(crate) struct ScriptedPrompter {
        pub confirms: VecDeque<bool>,
        pub texts: VecDeque<String>,
        pub alerts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(confirms: &[bool], texts: &[&str]) -> Self {
            Self {
                confirms: confirms.iter().copied().collect(),
                texts: texts.iter().map(|s| s.to_string()).collect(),
                alerts: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, _message: &str, _default: bool) -> std::result::Result<bool, InquireError> {
            self.confirms.pop_front().ok_or(InquireError::OperationCanceled)
        }

        fn text(&mut self, _message: &str) -> std::result::Result<String, InquireError> {
            self.texts.pop_front().ok_or(InquireError::OperationCanceled)
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    #[test]
    fn test_parse_length_bounds() {
        assert_eq!(parse_length("8", 8, 128).unwrap(), 8);
        assert_eq!(parse_length(" 128 ", 8, 128).unwrap(), 128);
        assert!(parse_length("7", 8, 128).is_err());
        assert!(parse_length("129", 8, 128).is_err());
        assert!(parse_length("", 8, 128).is_err());
        assert!(parse_length("twelve", 8, 128).is_err());
        assert!(parse_length("-10", 8, 128).is_err());
        assert!(parse_length("12.5", 8, 128).is_err());
    }

    #[test]
    fn test_check_length_bounds() {
        assert_eq!(check_length(8, 8, 128).unwrap(), 8);
        assert_eq!(check_length(128, 8, 128).unwrap(), 128);
        assert!(matches!(
            check_length(0, 8, 128),
            Err(ResolveError::InvalidLength { ref value, min: 8, max: 128 }) if value == "0"
        ));
        assert!(check_length(129, 8, 128).is_err());
    }

    #[test]
    fn test_args_resolver_rejects_empty_class_list() {
        let config = Config::default();
        let err = ArgsResolver::new(Some(16), Some(vec![]), &config).resolve().unwrap_err();
        assert!(matches!(err, ResolveError::NoClassesSelected));
    }

    #[test]
    fn test_args_resolver_defaults() {
        let config = Config::default();
        let options = ArgsResolver::new(None, None, &config).resolve().unwrap();
        assert_eq!(options, PasswordGenerationOptions::default());
    }

    #[test]
    fn test_args_resolver_explicit() {
        let config = Config::default();
        let classes = vec![CharacterClass::Numeric, CharacterClass::Upper];
        let options = ArgsResolver::new(Some(10), Some(classes), &config).resolve().unwrap();
        assert_eq!(options.length, 10);
        assert!(options.include_uppercase && options.include_numbers);
        assert!(!options.include_lowercase && !options.include_symbols);
    }

    #[test]
    fn test_args_resolver_rejects_out_of_bounds() {
        let config = Config::default();
        let err = ArgsResolver::new(Some(4), None, &config).resolve().unwrap_err();
        assert!(matches!(err, ResolveError::InvalidLength { min: 8, max: 128, .. }));
        assert!(ArgsResolver::new(Some(500), None, &config).resolve().is_err());
    }

    #[test]
    fn test_prompt_resolver_uses_default_length() {
        // decline length, then lower only
        let prompter = ScriptedPrompter::new(&[false, true, false, false, false], &[]);
        let mut resolver = PromptResolver::new(prompter, &Config::default());
        let options = resolver.resolve().unwrap();
        assert_eq!(options.length, 128);
        assert_eq!(options.criteria(), Criteria::from_iter([CharacterClass::Lower]));
    }

    #[test]
    fn test_prompt_resolver_reprompts_invalid_length() {
        let prompter = ScriptedPrompter::new(
            &[true, true, true, true, true, true, true],
            &["abc", "200", "16"],
        );
        let mut resolver = PromptResolver::new(prompter, &Config::default());
        let options = resolver.resolve().unwrap();
        assert_eq!(options.length, 16);
        assert_eq!(options.criteria(), Criteria::all());

        let invalid_alerts = resolver
            .prompter
            .alerts
            .iter()
            .filter(|a| a.contains("valid number"))
            .count();
        assert_eq!(invalid_alerts, 2);
    }

    #[test]
    fn test_prompt_resolver_reprompts_empty_selection() {
        let prompter = ScriptedPrompter::new(
            &[false, false, false, false, false, false, false, true, true],
            &[],
        );
        let mut resolver = PromptResolver::new(prompter, &Config::default());
        let options = resolver.resolve().unwrap();
        assert_eq!(
            options.criteria(),
            Criteria::from_iter([CharacterClass::Numeric, CharacterClass::Special])
        );
        assert_eq!(resolver.prompter.alerts.len(), 2);
        assert!(resolver.prompter.confirms.is_empty());
    }

    #[test]
    fn test_prompt_resolver_propagates_cancel() {
        let prompter = ScriptedPrompter::new(&[], &[]);
        let mut resolver = PromptResolver::new(prompter, &Config::default());
        assert!(matches!(
            resolver.resolve(),
            Err(ResolveError::Prompt(InquireError::OperationCanceled))
        ));
    }
}
