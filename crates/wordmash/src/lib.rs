//! Frankenword generation — mash fragments of real words into pseudo-random
//! new ones.
//!
//! This is the facade crate that wires together the lower-level components:
//! - [`mash_core`]: error type, constants, configuration
//! - [`mash_chance`]: one-in-N decisions and inclusive ranges
//! - [`mash_subword`]: positional subword extraction
//! - [`mash_select`]: pool selection with used-word tracking
//! - [`mash_engine`]: mashing selected words into one token
//! - [`mash_decorate`]: capitalization, special characters, splitting
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use wordmash::WordMasher;
//!
//! let pool = [
//!     "planet", "squid", "forge", "basement", "cosmos", "laser", "ember", "glacier",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//! let mut masher = WordMasher::new(pool, SmallRng::seed_from_u64(42));
//! let words = masher.generate(2).unwrap();
//! assert_eq!(words.len(), 2);
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use rand::Rng;

// Re-export everything consumers (like the CLI) need.
pub use mash_core::{MashConfig, MashError, RETRY_CEILING, Result, WEIRD_CAP_RATIO};
pub use mash_subword::{Pattern, make_subword, substring_inclusive};

use mash_chance::one_in_n_chance;
use mash_decorate::decorate;
use mash_engine::mash_words;
use mash_select::select_words_to_mash;

/// A frankenword generation session.
///
/// Owns everything the original program kept in statics: the candidate pool,
/// the special-character set, the feature toggles, the used-word set, and the
/// RNG. State is explicit and per-session; two sessions never share anything.
///
/// Generic over the PRNG type `R` so callers can seed a
/// [`SmallRng`](rand::rngs::SmallRng) for reproducible output.
pub struct WordMasher<R: Rng> {
    /// Candidate word pool, immutable for the run.
    pool: Vec<String>,
    /// Special characters available for injection; empty disables the step.
    special_chars: Vec<char>,
    /// Whether decoration may split words into several pieces.
    split_words: bool,
    /// Words already consumed this session. Grows monotonically.
    used: HashSet<String>,
    /// Tunable knobs (retry ceiling, weird-capitalization ratio).
    config: MashConfig,
    rng: R,
}

impl<R: Rng> WordMasher<R> {
    /// Create a session over the given candidate pool.
    ///
    /// Special characters and splitting start disabled; use the builder
    /// methods to opt in.
    pub fn new(pool: Vec<String>, rng: R) -> Self {
        WordMasher {
            pool,
            special_chars: Vec::new(),
            split_words: false,
            used: HashSet::new(),
            config: MashConfig::default(),
            rng,
        }
    }

    /// Enable special-character injection with the given set.
    pub fn with_special_chars(mut self, chars: Vec<char>) -> Self {
        self.special_chars = chars;
        self
    }

    /// Enable or disable word splitting.
    pub fn with_splitting(mut self, enabled: bool) -> Self {
        self.split_words = enabled;
        self
    }

    /// Override the default configuration.
    pub fn with_config(mut self, config: MashConfig) -> Self {
        self.config = config;
        self
    }

    /// Source words consumed so far this session.
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used
    }

    /// Generate exactly `count` frankenwords, in order.
    ///
    /// Each iteration flips a coin for a batch size of 2 or 3, selects that
    /// many fresh words, mashes them, and decorates the result. Any failure
    /// aborts the whole batch; there is no catch-and-continue. An empty
    /// result from the pipeline is reported as an `InvariantViolation` —
    /// it signals a defect, not bad input.
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>> {
        let mut frankenwords = Vec::with_capacity(count);

        for i in 0..count {
            let batch_size = if one_in_n_chance(&mut self.rng, 2)? { 2 } else { 3 };
            let words = select_words_to_mash(
                &mut self.rng,
                batch_size,
                &self.pool,
                &mut self.used,
                self.config.retry_ceiling,
            )?;
            let mashed = mash_words(&mut self.rng, &words)?;
            let frankenword = decorate(
                &mut self.rng,
                mashed,
                &self.special_chars,
                self.split_words,
                &self.config,
            )?;

            if frankenword.is_empty() {
                return Err(MashError::InvariantViolation(
                    "decoration produced an empty frankenword",
                ));
            }

            debug!("frankenword {}/{count}: {frankenword:?}", i + 1);
            frankenwords.push(frankenword);
        }

        info!("generated {} frankenwords", frankenwords.len());
        Ok(frankenwords)
    }
}

/// Load a word list file: one word per line, trimmed, blank lines skipped.
pub fn load_word_list(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect())
}

/// Load a special-character file: one character per line.
///
/// A trimmed line is kept only when it is exactly one code point; anything
/// longer is skipped.
pub fn load_special_chars(path: &Path) -> io::Result<Vec<char>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| {
            let mut chars = line.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        })
        .collect())
}
