//! The mash step: combine two or three selected words into one raw token.
//!
//! The input order is shuffled, then each word contributes one subword under
//! an independently drawn pattern. Output length is data-dependent and can
//! degenerate to one character per word when the inner pattern lands on a
//! single-character span; the decorator pads such results back up.

use mash_core::{MashError, Result};
use mash_subword::{Pattern, make_subword};
use rand::Rng;
use rand::seq::SliceRandom;

/// Mash the given words into a single token.
///
/// `words` must hold exactly 2 or 3 entries; anything else is an
/// `InvalidArgument`. Patterns are drawn with replacement, one per word.
pub fn mash_words<R: Rng>(rng: &mut R, words: &[String]) -> Result<String> {
    if words.len() < 2 || words.len() > 3 {
        return Err(MashError::InvalidArgument {
            parameter: "words",
            constraint: "exactly 2 or 3 words",
            value: format!("{} words", words.len()),
        });
    }

    let mut order: Vec<&String> = words.iter().collect();
    order.shuffle(rng);

    let mut mashed = String::new();
    for word in order {
        let pattern = Pattern::ALL[rng.random_range(0..Pattern::ALL.len())];
        mashed.push_str(&make_subword(rng, word, pattern)?);
    }
    Ok(mashed)
}
