// src/cli/handlers.rs
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use console::style;
use inquire::InquireError;
use log::{info, warn};

use super::commands::CliCommand;
use super::prompts::InquirePrompter;
use super::resolver::{ArgsResolver, CriteriaResolver, PromptResolver, ResolveError};
use super::Args;
use crate::core::config::Config;
use crate::generators::{CharacterClass, PasswordGenerator};
use crate::models::PasswordGenerationResponse;

/// Output and generator settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub json: bool,
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<ExitCode> {
    let settings = RunSettings {
        json: args.json,
        seed: args.seed,
        max_attempts: args.max_attempts.or(config.max_generation_attempts),
    };
    let mut stdout = std::io::stdout().lock();

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Interactive => {
            let mut resolver = PromptResolver::new(InquirePrompter, config);
            handle_generate(&mut resolver, &settings, &mut stdout)
        }
        CliCommand::Generate { length, classes } => {
            let mut resolver = ArgsResolver::new(length, classes, config);
            handle_generate(&mut resolver, &settings, &mut stdout)
        }
        CliCommand::Classes => handle_classes(settings.json, &mut stdout),
    }
}

pub fn handle_generate<W: Write>(
    resolver: &mut dyn CriteriaResolver,
    settings: &RunSettings,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    let options = match resolver.resolve() {
        Ok(options) => options,
        Err(ResolveError::Prompt(InquireError::OperationCanceled | InquireError::OperationInterrupted)) => {
            info!("Password generation cancelled by user");
            if settings.json {
                write_json(out, &PasswordGenerationResponse::failure("Cancelled by user", None))?;
            } else {
                writeln!(out, "👋 Cancelled.")?;
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) if settings.json => {
            write_json(out, &PasswordGenerationResponse::failure(&e, None))?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Failed to read password criteria"),
    };
    let criteria = options.criteria();

    let result = match settings.seed {
        Some(seed) => {
            warn!("Generator seeded with {}; output is reproducible", seed);
            PasswordGenerator::seeded(seed)
                .with_max_attempts(settings.max_attempts)
                .generate_password(&options)
        }
        None => PasswordGenerator::new()
            .with_max_attempts(settings.max_attempts)
            .generate_password(&options),
    };

    match result {
        Ok(password) if settings.json => {
            write_json(out, &PasswordGenerationResponse::success(password, &criteria))?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(password) => {
            let classes: Vec<&str> = criteria.iter().map(CharacterClass::name).collect();
            writeln!(out, "\nGenerated Password: {}", style(&password).bold().green())?;
            writeln!(out, "Length: {} | Types: {}", options.length, classes.join(", "))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if settings.json => {
            write_json(out, &PasswordGenerationResponse::failure(&e, Some(&criteria)))?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Failed to generate password"),
    }
}

pub fn handle_classes<W: Write>(json: bool, out: &mut W) -> anyhow::Result<ExitCode> {
    if json {
        let classes: Vec<serde_json::Value> = CharacterClass::ALL
            .iter()
            .map(|class| {
                serde_json::json!({
                    "class": class,
                    "characters": class.alphabet(),
                })
            })
            .collect();
        write_json(out, &classes)?;
    } else {
        for class in CharacterClass::ALL {
            writeln!(out, "{:<8} {}", style(class.name()).cyan(), class.alphabet())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize JSON output")?;
    writeln!(out)?;
    Ok(())
}
