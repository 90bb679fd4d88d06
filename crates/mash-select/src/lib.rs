//! Word selection: draw distinct, length-bounded, not-yet-used words from a
//! candidate pool.
//!
//! The used-word set is caller-owned state. A generation session threads one
//! set through every call so each source word is consumed at most once per
//! run; tests pass an isolated set and touch no shared state. The set only
//! ever grows.

use std::collections::HashSet;

use log::{debug, trace};
use mash_core::{
    MAX_SELECT_COUNT, MAX_SOURCE_WORD_LEN, MIN_SOURCE_WORD_LEN, MashError, Result,
};
use rand::Rng;

/// Draw `count` distinct words from `pool`, skipping anything in `used`.
///
/// A pool word qualifies only when its length is strictly between 2 and 10.
/// Accepted picks are recorded in `used` immediately, so the exclusion holds
/// both within this batch and across later calls sharing the set.
///
/// The draw loop is bounded by `retry_ceiling` attempts; a pool too small or
/// too homogeneous in length to satisfy the request fails with
/// `ExhaustedRetries` instead of spinning forever.
pub fn select_words_to_mash<R: Rng>(
    rng: &mut R,
    count: usize,
    pool: &[String],
    used: &mut HashSet<String>,
    retry_ceiling: usize,
) -> Result<Vec<String>> {
    if count < 1 || count > MAX_SELECT_COUNT {
        return Err(MashError::InvalidArgument {
            parameter: "count",
            constraint: "1 <= count <= 10",
            value: count.to_string(),
        });
    }
    if pool.is_empty() {
        return Err(MashError::InvalidArgument {
            parameter: "pool",
            constraint: "at least one candidate word",
            value: "empty pool".to_string(),
        });
    }

    let mut picks: Vec<String> = Vec::with_capacity(count);
    let mut attempts = 0;

    while picks.len() < count {
        if attempts >= retry_ceiling {
            return Err(MashError::ExhaustedRetries {
                operation: "selecting words to mash",
                limit: retry_ceiling,
            });
        }
        attempts += 1;

        let candidate = &pool[rng.random_range(0..pool.len())];
        let len = candidate.chars().count();
        if len <= MIN_SOURCE_WORD_LEN || len >= MAX_SOURCE_WORD_LEN {
            trace!("rejecting {candidate:?}: length {len} out of bounds");
            continue;
        }
        if used.contains(candidate) || picks.contains(candidate) {
            continue;
        }

        used.insert(candidate.clone());
        picks.push(candidate.clone());
    }

    debug!("selected {picks:?} in {attempts} attempts");
    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_core::RETRY_CEILING;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_rng(s: u64) -> SmallRng {
        SmallRng::seed_from_u64(s)
    }

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    // --- argument validation ---

    #[test]
    fn zero_count_rejected() {
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let err =
            select_words_to_mash(&mut rng, 0, &pool(&["apple"]), &mut used, RETRY_CEILING)
                .unwrap_err();
        assert!(matches!(err, MashError::InvalidArgument { parameter: "count", .. }));
    }

    #[test]
    fn count_above_ten_rejected() {
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let err =
            select_words_to_mash(&mut rng, 11, &pool(&["apple"]), &mut used, RETRY_CEILING)
                .unwrap_err();
        assert!(matches!(err, MashError::InvalidArgument { parameter: "count", .. }));
    }

    #[test]
    fn empty_pool_rejected() {
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let err = select_words_to_mash(&mut rng, 2, &[], &mut used, RETRY_CEILING).unwrap_err();
        assert!(matches!(err, MashError::InvalidArgument { parameter: "pool", .. }));
    }

    // --- selection semantics ---

    #[test]
    fn picks_are_distinct() {
        let words = pool(&["apple", "berry", "cedar", "dough", "eagle"]);
        let mut rng = make_rng(42);
        for seed in 0..20u64 {
            let mut rng2 = make_rng(seed);
            let mut used = HashSet::new();
            let picks =
                select_words_to_mash(&mut rng2, 3, &words, &mut used, RETRY_CEILING).unwrap();
            let distinct: HashSet<&String> = picks.iter().collect();
            assert_eq!(distinct.len(), picks.len());
        }
        // Also under a longer single-rng sequence.
        let mut used = HashSet::new();
        let picks = select_words_to_mash(&mut rng, 3, &words, &mut used, RETRY_CEILING).unwrap();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn used_words_are_never_picked() {
        let words = pool(&["apple", "berry", "cedar"]);
        let mut rng = make_rng(42);
        let mut used: HashSet<String> = ["apple".to_string()].into_iter().collect();
        let picks = select_words_to_mash(&mut rng, 2, &words, &mut used, RETRY_CEILING).unwrap();
        assert!(!picks.contains(&"apple".to_string()));
    }

    #[test]
    fn used_set_grows_by_exactly_the_picks() {
        let words = pool(&["apple", "berry", "cedar", "dough"]);
        let mut rng = make_rng(42);
        let mut used: HashSet<String> = ["cedar".to_string()].into_iter().collect();
        let before = used.clone();
        let picks = select_words_to_mash(&mut rng, 2, &words, &mut used, RETRY_CEILING).unwrap();

        let mut expected = before;
        expected.extend(picks.iter().cloned());
        assert_eq!(used, expected);
    }

    #[test]
    fn length_bounds_are_exclusive() {
        // "ab" (2) and "abcdefghij" (10) are both out; only the middle three qualify.
        let words = pool(&["ab", "abc", "defgh", "uvwxyzabc", "abcdefghij"]);
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let picks = select_words_to_mash(&mut rng, 3, &words, &mut used, RETRY_CEILING).unwrap();
        let mut sorted = picks.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["abc", "defgh", "uvwxyzabc"]);
    }

    #[test]
    fn repeated_calls_exhaust_the_pool() {
        let words = pool(&["apple", "berry", "cedar", "dough"]);
        let mut rng = make_rng(42);
        let mut used = HashSet::new();

        let first = select_words_to_mash(&mut rng, 2, &words, &mut used, RETRY_CEILING).unwrap();
        let second = select_words_to_mash(&mut rng, 2, &words, &mut used, RETRY_CEILING).unwrap();
        let all: HashSet<String> = first.into_iter().chain(second).collect();
        assert_eq!(all.len(), 4, "two batches of two must cover the whole pool");

        // Nothing qualifying is left.
        let err = select_words_to_mash(&mut rng, 1, &words, &mut used, RETRY_CEILING).unwrap_err();
        assert!(matches!(err, MashError::ExhaustedRetries { .. }));
    }

    #[test]
    fn all_wrong_length_pool_exhausts_retries() {
        let words = pool(&["ab", "no", "extraordinarily"]);
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let err = select_words_to_mash(&mut rng, 1, &words, &mut used, RETRY_CEILING).unwrap_err();
        assert_eq!(
            err,
            MashError::ExhaustedRetries {
                operation: "selecting words to mash",
                limit: RETRY_CEILING,
            }
        );
    }

    #[test]
    fn small_ceiling_is_honored() {
        let words = pool(&["ab"]);
        let mut rng = make_rng(42);
        let mut used = HashSet::new();
        let err = select_words_to_mash(&mut rng, 1, &words, &mut used, 5).unwrap_err();
        assert_eq!(
            err,
            MashError::ExhaustedRetries {
                operation: "selecting words to mash",
                limit: 5,
            }
        );
    }
}
