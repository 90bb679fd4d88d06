//! Subword extraction: pull a contiguous fragment out of a source word by
//! one of three positional patterns.
//!
//! All index ranges here are inclusive on both ends. That is a deliberate
//! contract, not a half-open-slice oversight: for a word of length L, the
//! prefix and suffix patterns each have exactly L reachable outputs, and the
//! inner pattern has `L*(L+1)/2` (its start and end draws may coincide,
//! yielding single-character fragments).

use mash_chance::random_int_inclusive;
use mash_core::{MashError, Result, SUBWORD_MAX_LEN, SUBWORD_MIN_LEN};
use rand::Rng;

/// Where in the source word a subword is taken from.
///
/// The original program selected these with the integers 1/2/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// A span anchored at the start of the word.
    Prefix,
    /// A span anchored at the end of the word.
    Suffix,
    /// An arbitrary contiguous span, possibly a single character.
    Inner,
}

impl Pattern {
    /// All patterns, for uniform random selection.
    pub const ALL: [Pattern; 3] = [Pattern::Prefix, Pattern::Suffix, Pattern::Inner];
}

/// Characters `i..=j` of `word`, both ends inclusive.
///
/// Requires `i <= j < len`. The result length is exactly `j - i + 1`.
pub fn substring_inclusive(word: &str, i: usize, j: usize) -> Result<String> {
    let chars: Vec<char> = word.chars().collect();
    if i > j || j >= chars.len() {
        return Err(MashError::InvalidArgument {
            parameter: "i..=j",
            constraint: "0 <= i <= j < word length",
            value: format!("i={i}, j={j}, len={}", chars.len()),
        });
    }
    Ok(chars[i..=j].iter().collect())
}

/// Extract a random subword of `word` under the given pattern.
///
/// `word` must be 2 to 10 characters long (inclusive); anything else is an
/// `InvalidArgument`.
pub fn make_subword<R: Rng>(rng: &mut R, word: &str, pattern: Pattern) -> Result<String> {
    let len = word.chars().count();
    if !(SUBWORD_MIN_LEN..=SUBWORD_MAX_LEN).contains(&len) {
        return Err(MashError::InvalidArgument {
            parameter: "word",
            constraint: "2 <= length <= 10",
            value: format!("{word:?} (length {len})"),
        });
    }

    match pattern {
        Pattern::Prefix => {
            let i = random_int_inclusive(rng, 0, len - 1);
            substring_inclusive(word, 0, i)
        }
        Pattern::Suffix => {
            let j = random_int_inclusive(rng, 0, len - 1);
            substring_inclusive(word, j, len - 1)
        }
        Pattern::Inner => {
            let i = random_int_inclusive(rng, 0, len - 1);
            let j = random_int_inclusive(rng, i, len - 1);
            substring_inclusive(word, i, j)
        }
    }
}
