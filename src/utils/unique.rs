//! Session-scoped unique string issuing
//!
//! [`UniqueStringRegistry`] remembers every string it has handed out and
//! retries until it produces one it has not seen. It is an ordinary owned
//! value: create one per generation run and pass it where needed. Methods take
//! `&mut self`, so sharing across threads requires external locking.

use std::collections::HashSet;

use crate::error::Result;
use crate::utils::id_gen::{secure_random_string, short_unique_id};

/// Default retry budget for [`UniqueStringRegistry::generate`]
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Subtracted from the requested length to size the fallback's random part
///
/// The `<unix_millis>_` prefix is 14 characters, so a fallback is one
/// character longer than requested.
const FALLBACK_PREFIX_LEN: usize = 13;

/// Issues secure random strings that are unique within its lifetime
#[derive(Debug, Default)]
pub struct UniqueStringRegistry {
    issued: HashSet<String>,
}

impl UniqueStringRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a string not previously issued by this registry
    ///
    /// Tries `secure_random_string(length)` up to `max_attempts` times. When
    /// every attempt collides, falls back to a timestamp-qualified
    /// `short_unique_id` whose random part is `length - 13` characters long
    /// (zero when `length <= 13`). The fallback value is recorded as well.
    pub fn generate(&mut self, length: usize, max_attempts: usize) -> Result<String> {
        for _ in 0..max_attempts {
            let candidate = secure_random_string(length)?;
            if self.issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        let fallback = short_unique_id(length.saturating_sub(FALLBACK_PREFIX_LEN))?;
        tracing::warn!(
            length,
            max_attempts,
            fallback = %fallback,
            "Unique string attempts exhausted, using timestamp fallback"
        );
        self.issued.insert(fallback.clone());
        Ok(fallback)
    }

    /// Forget every issued string
    pub fn reset(&mut self) {
        self.issued.clear();
    }

    /// Number of strings issued since creation or the last reset
    pub fn count(&self) -> usize {
        self.issued.len()
    }

    /// Check whether `value` was issued by this registry
    pub fn contains(&self, value: &str) -> bool {
        self.issued.contains(value)
    }
}

/// Issue `count` strings of `length` characters from `registry`
pub fn generate_multiple_unique_strings(
    registry: &mut UniqueStringRegistry,
    count: usize,
    length: usize,
) -> Result<Vec<String>> {
    (0..count)
        .map(|_| registry.generate(length, DEFAULT_MAX_ATTEMPTS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_records_values() {
        let mut registry = UniqueStringRegistry::new();
        let a = registry.generate(12, DEFAULT_MAX_ATTEMPTS).unwrap();
        let b = registry.generate(12, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(a.len(), 12);
        assert_ne!(a, b);
        assert_eq!(registry.count(), 2);
        assert!(registry.contains(&a));
        assert!(registry.contains(&b));
    }

    #[test]
    fn test_count_matches_calls() {
        let mut registry = UniqueStringRegistry::new();
        let values = generate_multiple_unique_strings(&mut registry, 250, 10).unwrap();
        assert_eq!(values.len(), 250);
        assert_eq!(registry.count(), 250);
        let distinct: HashSet<&String> = values.iter().collect();
        assert_eq!(distinct.len(), 250);
    }

    #[test]
    fn test_reset() {
        let mut registry = UniqueStringRegistry::new();
        generate_multiple_unique_strings(&mut registry, 5, 8).unwrap();
        assert_eq!(registry.count(), 5);
        registry.reset();
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_fallback_when_space_exhausted() {
        // A single character has only 62 possible values
        let mut registry = UniqueStringRegistry::new();
        let values = generate_multiple_unique_strings(&mut registry, 70, 1).unwrap();
        assert_eq!(values.len(), 70);
        // Fallbacks issued within the same millisecond coincide
        let singles = values.iter().filter(|v| v.len() == 1).count();
        let fallbacks: Vec<&String> = values.iter().filter(|v| v.len() > 1).collect();
        assert!(singles <= 62);
        assert!(!fallbacks.is_empty());
        assert!(registry.count() > singles && registry.count() <= 70);
        // length <= 13 clamps the random part to nothing
        assert!(fallbacks.iter().all(|v| v.ends_with('_')));
    }

    #[test]
    fn test_fallback_with_zero_attempts() {
        let mut registry = UniqueStringRegistry::new();
        let value = registry.generate(20, 0).unwrap();
        let (millis, random) = value.split_once('_').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(random.len(), 7);
        assert_eq!(registry.count(), 1);
    }
}
