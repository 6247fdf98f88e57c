// src/generators/password.rs
use log::{debug, trace, warn};
use rand::rngs::ThreadRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;

use super::charset::CharacterUniverse;
use super::sampler::Sampler;
use super::validation::{is_valid, missing_classes};
use super::{GeneratorError, Result};
use crate::models::{Criteria, PasswordGenerationOptions};

/// Retry cap applied unless the caller picks another one.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Generates passwords that contain at least one character of every selected class.
///
/// Candidates are drawn uniformly from the combined alphabet and thrown away
/// until one covers every class, so the output distribution is uniform over
/// all covering strings of the requested length.
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
    max_attempts: Option<usize>,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<ChaCha8Rng> {
    /// Reproducible generator: the same seed always yields the same passwords.
    pub fn seeded(seed: u64) -> Self {
        PasswordGenerator::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            rng,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// `None` (or `Some(0)`) removes the cap and retries until a candidate passes.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.filter(|&n| n > 0);
        self
    }

    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate(options.length, &options.criteria())
    }

    pub fn generate(&mut self, length: usize, criteria: &Criteria) -> Result<String> {
        check_preconditions(length, criteria)?;

        let universe = CharacterUniverse::build(criteria);
        let sampler = Sampler::new(&universe)?;
        debug!(
            "Generating {}-character password from {} candidates ({} classes)",
            length,
            universe.len(),
            criteria.len()
        );

        let mut attempts = 0;
        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    warn!("Gave up after {} attempts", attempts);
                    return Err(GeneratorError::AttemptsExhausted { attempts });
                }
            }
            attempts += 1;

            let candidate: String = (0..length).map(|_| sampler.sample(&mut self.rng)).collect();

            if is_valid(Some(&candidate), criteria) {
                debug!("Valid password found after {} attempt(s)", attempts);
                return Ok(candidate);
            }

            trace!(
                "Attempt {} rejected, missing: {:?}",
                attempts,
                missing_classes(&candidate, criteria)
            );
        }
    }
}

/// Reject inputs for which no covering password exists.
pub fn check_preconditions(length: usize, criteria: &Criteria) -> Result<()> {
    if criteria.is_empty() {
        return Err(GeneratorError::NoClassesSelected);
    }

    if length < criteria.len() {
        return Err(GeneratorError::LengthTooShort {
            length,
            required: criteria.len(),
        });
    }

    Ok(())
}
