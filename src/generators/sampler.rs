// src/generators/sampler.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::charset::CharacterUniverse;
use super::{GeneratorError, Result};

/// Draws characters uniformly from a universe.
///
/// Holds no randomness of its own; the caller passes the RNG on every draw.
#[derive(Debug, Clone)]
pub struct Sampler<'a> {
    chars: &'a [char],
    dist: Uniform<usize>,
}

impl<'a> Sampler<'a> {
    pub fn new(universe: &'a CharacterUniverse) -> Result<Self> {
        if universe.is_empty() {
            return Err(GeneratorError::NoClassesSelected);
        }

        Ok(Sampler {
            chars: universe.as_slice(),
            dist: Uniform::from(0..universe.len()),
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[self.dist.sample(rng)]
    }
}
