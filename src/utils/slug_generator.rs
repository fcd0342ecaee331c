//! Random slug generation.

use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Alphanumeric alphabet used when `NANOID_ALPHABET` is not set.
pub const DEFAULT_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of generated slugs when `NANOID_SIZE` is not set.
pub const DEFAULT_SIZE: usize = 6;

/// Reasons a [`SlugGenerator`] cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("slug alphabet must not be empty")]
    EmptyAlphabet,
    #[error("slug size must be at least 1")]
    ZeroSize,
}

/// Generates random slugs of a fixed length.
///
/// Every character is drawn uniformly and independently from the alphabet using
/// the thread-local RNG, so a single generator can be shared between tasks.
/// Uniqueness is not checked here: the store's insert-if-absent rejects collisions.
#[derive(Debug, Clone)]
pub struct SlugGenerator {
    alphabet: Vec<char>,
    size: usize,
}

impl SlugGenerator {
    /// Creates a generator over the distinct characters of `alphabet`.
    ///
    /// Repeated characters are dropped (first occurrence wins) so that each
    /// distinct character keeps the same probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if the alphabet is empty or `size` is zero.
    pub fn new(alphabet: &str, size: usize) -> Result<Self, GeneratorError> {
        if size == 0 {
            return Err(GeneratorError::ZeroSize);
        }

        let mut seen = HashSet::new();
        let alphabet: Vec<char> = alphabet.chars().filter(|c| seen.insert(*c)).collect();

        if alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        Ok(Self { alphabet, size })
    }

    /// Returns a fresh random slug.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.size)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Length of generated slugs, in characters.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            size: DEFAULT_SIZE,
        }
    }
}
