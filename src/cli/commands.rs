// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::CharacterClass;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Choose the length and character types interactively (default)
    Interactive,

    /// Generate a password from command-line options
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(short, long)]
        length: Option<usize>,

        /// Character types to include, comma separated (defaults to all)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        classes: Option<Vec<CharacterClass>>,
    },

    /// List the character types and the characters in each
    Classes,
}
