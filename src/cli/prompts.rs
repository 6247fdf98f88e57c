// src/cli/prompts.rs
use inquire::{Confirm, InquireError, Text};

/// The questions the interactive resolver can ask.
pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, InquireError>;

    fn text(&mut self, message: &str) -> Result<String, InquireError>;

    fn alert(&mut self, message: &str);
}

/// Terminal prompts backed by inquire.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, InquireError> {
        Confirm::new(message).with_default(default).prompt()
    }

    fn text(&mut self, message: &str) -> Result<String, InquireError> {
        Text::new(message).prompt()
    }

    fn alert(&mut self, message: &str) {
        println!("❗ {}", message);
    }
}
