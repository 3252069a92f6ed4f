//! Pseudo-random seed rows
//!
//! Every text field is a word of [`WORD_LEN`] distinct ASCII letters,
//! sampled without replacement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vlist_core::model::TEXT_FIELDS;

/// Letters a word is sampled from
pub const LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters per word
pub const WORD_LEN: usize = 10;

/// Endless stream of five-word rows
#[derive(Debug, Clone)]
pub struct RandomWords<R = StdRng> {
    rng: R,
}

impl RandomWords<StdRng> {
    /// Reproducible stream: the same seed yields the same rows
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomWords<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn word(&mut self) -> String {
        rand::seq::index::sample(&mut self.rng, LETTERS.len(), WORD_LEN)
            .iter()
            .map(|i| LETTERS[i] as char)
            .collect()
    }
}

impl<R: Rng> Iterator for RandomWords<R> {
    type Item = [String; TEXT_FIELDS];

    fn next(&mut self) -> Option<Self::Item> {
        Some(std::array::from_fn(|_| self.word()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_words_are_ten_distinct_letters() {
        for fields in RandomWords::seeded(7).take(50) {
            for word in fields {
                assert_eq!(word.len(), WORD_LEN);
                assert!(word.bytes().all(|b| b.is_ascii_alphabetic()));
                let distinct: HashSet<char> = word.chars().collect();
                assert_eq!(distinct.len(), WORD_LEN);
            }
        }
    }

    #[test]
    fn test_same_seed_same_rows() {
        let a: Vec<_> = RandomWords::seeded(42).take(5).collect();
        let b: Vec<_> = RandomWords::seeded(42).take(5).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a: Vec<_> = RandomWords::seeded(1).take(5).collect();
        let b: Vec<_> = RandomWords::seeded(2).take(5).collect();
        assert_ne!(a, b);
    }
}
