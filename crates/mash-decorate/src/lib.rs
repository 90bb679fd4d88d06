//! Decoration of freshly mashed tokens, applied in a fixed pipeline order:
//!
//! 1. Pad tokens shorter than 3 characters with random lowercase letters.
//! 2. Capitalize, either the standard way (title-case or all-lowercase) or
//!    the "weird" way (an independent per-character coin).
//! 3. Maybe overwrite 1-2 characters with special characters, at distinct
//!    random positions.
//! 4. Maybe split the token into 2 or 3 space-separated pieces.
//!
//! Each step produces a new string; nothing is edited in place from the
//! caller's perspective.

use log::trace;
use mash_chance::{one_in_n_chance, random_int_inclusive};
use mash_core::{MIN_FRANKENWORD_LEN, MashConfig, MashError, Result};
use rand::Rng;

/// Denominator for the outer gates: special-character injection and word
/// splitting each fire with a 1-in-4 chance per word.
const DECORATION_GATE: u32 = 4;

/// Words at least this long may receive 2 special characters, and qualify
/// for a three-way split.
const LONG_WORD_LEN: usize = 6;

fn random_lowercase_letter<R: Rng>(rng: &mut R) -> char {
    (b'a' + rng.random_range(0..26)) as char
}

/// Pad `word` with random lowercase letters until it is at least 3 chars.
///
/// Mashing can degenerate to one character per source word; the floor keeps
/// every frankenword long enough for the later decoration steps.
pub fn pad_short_word<R: Rng>(rng: &mut R, word: String) -> String {
    let mut padded = word;
    while padded.chars().count() < MIN_FRANKENWORD_LEN {
        padded.push(random_lowercase_letter(rng));
    }
    padded
}

/// Standard capitalization: a 1-in-2 chance of Title-case, otherwise
/// all-lowercase.
pub fn add_standard_capitalization<R: Rng>(rng: &mut R, word: &str) -> Result<String> {
    let lower = word.to_lowercase();
    if one_in_n_chance(rng, 2)? {
        let mut chars = lower.chars();
        Ok(match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => lower,
        })
    } else {
        Ok(lower)
    }
}

/// Weird capitalization: lowercase everything, then uppercase each character
/// independently with a 1-in-`ratio` chance.
pub fn add_weird_capitalization<R: Rng>(rng: &mut R, word: &str, ratio: u32) -> Result<String> {
    let mut out = String::with_capacity(word.len());
    for c in word.to_lowercase().chars() {
        if one_in_n_chance(rng, ratio)? {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Apply one of the two capitalization policies, chosen by a coin flip.
pub fn capitalize<R: Rng>(rng: &mut R, word: &str, config: &MashConfig) -> Result<String> {
    if one_in_n_chance(rng, 2)? {
        add_standard_capitalization(rng, word)
    } else {
        add_weird_capitalization(rng, word, config.weird_cap_ratio)
    }
}

/// Overwrite 1 or 2 characters of `word` with entries from `specials`.
///
/// Characters are drawn with replacement from the set; positions are drawn
/// uniformly and redrawn on collision until distinct, bounded by
/// `retry_ceiling`. Word length never changes.
pub fn inject_special_characters<R: Rng>(
    rng: &mut R,
    word: &str,
    specials: &[char],
    retry_ceiling: usize,
) -> Result<String> {
    if specials.is_empty() {
        return Err(MashError::InvalidArgument {
            parameter: "specials",
            constraint: "at least one special character",
            value: "empty set".to_string(),
        });
    }

    let mut chars: Vec<char> = word.chars().collect();
    let how_many = if chars.len() < LONG_WORD_LEN || one_in_n_chance(rng, 2)? {
        1
    } else {
        2
    };

    let mut filled: Vec<usize> = Vec::with_capacity(how_many);
    let mut attempts = 0;
    while filled.len() < how_many {
        if attempts >= retry_ceiling {
            return Err(MashError::ExhaustedRetries {
                operation: "placing special characters",
                limit: retry_ceiling,
            });
        }
        attempts += 1;

        let pos = rng.random_range(0..chars.len());
        if filled.contains(&pos) {
            continue;
        }
        chars[pos] = specials[rng.random_range(0..specials.len())];
        filled.push(pos);
    }

    trace!("overwrote positions {filled:?} of {word:?}");
    Ok(chars.into_iter().collect())
}

/// Insert a single space at a random cut point in `[1, len-1]`.
///
/// Requires a word of 3 to 27 characters. Output is exactly one character
/// longer, with no leading or trailing space.
pub fn break_in_two<R: Rng>(rng: &mut R, word: &str) -> Result<String> {
    let len = word.chars().count();
    if !(3..=27).contains(&len) {
        return Err(MashError::InvalidArgument {
            parameter: "word",
            constraint: "3 <= length <= 27 to break in two",
            value: format!("{word:?} (length {len})"),
        });
    }

    let cut = random_int_inclusive(rng, 1, len - 1);
    let chars: Vec<char> = word.chars().collect();
    let mut out: String = chars[..cut].iter().collect();
    out.push(' ');
    out.extend(&chars[cut..]);
    Ok(out)
}

/// Split `word` around a point in `[3, len-4]`, then break each half in two.
///
/// Requires a word of 7 to 27 characters. Both halves are at least 3 chars,
/// so the recursive breaks always succeed; output carries exactly two spaces
/// and is exactly two characters longer.
pub fn break_in_three<R: Rng>(rng: &mut R, word: &str) -> Result<String> {
    let len = word.chars().count();
    if !(7..=27).contains(&len) {
        return Err(MashError::InvalidArgument {
            parameter: "word",
            constraint: "7 <= length <= 27 to break in three",
            value: format!("{word:?} (length {len})"),
        });
    }

    let split = random_int_inclusive(rng, 3, len - 4);
    let chars: Vec<char> = word.chars().collect();
    let left: String = chars[..split].iter().collect();
    let right: String = chars[split..].iter().collect();

    let mut out = break_in_two(rng, &left)?;
    out.push_str(&break_in_two(rng, &right)?);
    Ok(out)
}

/// Split policy: long words flip a coin between two- and three-way breaks,
/// short words always break in two.
pub fn split_word<R: Rng>(rng: &mut R, word: &str) -> Result<String> {
    if word.chars().count() > LONG_WORD_LEN {
        if one_in_n_chance(rng, 2)? {
            break_in_two(rng, word)
        } else {
            break_in_three(rng, word)
        }
    } else {
        break_in_two(rng, word)
    }
}

/// Run the full decoration pipeline over a freshly mashed token.
///
/// Injection only happens when `specials` is non-empty and its 1-in-4 gate
/// fires; splitting only when `split_enabled` and its own 1-in-4 gate fires.
pub fn decorate<R: Rng>(
    rng: &mut R,
    mashed: String,
    specials: &[char],
    split_enabled: bool,
    config: &MashConfig,
) -> Result<String> {
    let word = pad_short_word(rng, mashed);
    let word = capitalize(rng, &word, config)?;

    let word = if !specials.is_empty() && one_in_n_chance(rng, DECORATION_GATE)? {
        inject_special_characters(rng, &word, specials, config.retry_ceiling)?
    } else {
        word
    };

    let word = if split_enabled && one_in_n_chance(rng, DECORATION_GATE)? {
        split_word(rng, &word)?
    } else {
        word
    };

    Ok(word)
}
