//! Shared foundation for the wordmash pipeline: the error taxonomy, the
//! tunable generation constants, and [`MashConfig`].
//!
//! Every other wordmash crate depends on this one and nothing else in the
//! workspace, so the error type and the numeric contract live in exactly one
//! place.

use thiserror::Error;

/// Default ceiling for bounded random-selection loops (word selection and
/// special-character placement). Exceeding it means the pool/configuration is
/// statistically incompatible with the request.
pub const RETRY_CEILING: usize = 1000;

/// Default per-character chance denominator for "weird" capitalization:
/// each character is uppercased with probability 1/11.
pub const WEIRD_CAP_RATIO: u32 = 11;

/// Source words qualify for selection only when strictly longer than this.
pub const MIN_SOURCE_WORD_LEN: usize = 2;

/// Source words qualify for selection only when strictly shorter than this.
pub const MAX_SOURCE_WORD_LEN: usize = 10;

/// Subword extraction accepts words of length 2 through 10 inclusive.
pub const SUBWORD_MIN_LEN: usize = 2;
pub const SUBWORD_MAX_LEN: usize = 10;

/// Every finished frankenword is at least this many characters; shorter
/// mash results are padded with random letters.
pub const MIN_FRANKENWORD_LEN: usize = 3;

/// Upper bound on how many words one selection batch may request.
pub const MAX_SELECT_COUNT: usize = 10;

/// Errors raised by the generation pipeline.
///
/// Three kinds, three audiences: `InvalidArgument` is always a caller bug,
/// `ExhaustedRetries` is a fatal statistical mismatch between input and
/// request, and `InvariantViolation` is an internal defect signal. None of
/// them are retried anywhere; one failure aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MashError {
    /// A core function received input that violates its documented contract.
    #[error("invalid argument: {parameter} must satisfy {constraint}, got {value}")]
    InvalidArgument {
        parameter: &'static str,
        constraint: &'static str,
        value: String,
    },

    /// A bounded random-selection loop failed to converge within its ceiling.
    #[error("gave up {operation} after {limit} attempts")]
    ExhaustedRetries {
        operation: &'static str,
        limit: usize,
    },

    /// A pipeline step produced a result the design rules out entirely.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, MashError>;

/// Tunable knobs for a generation session.
///
/// Both fields default to the named constants above; they exist as fields so
/// callers (and tests) can vary them without recompiling.
#[derive(Debug, Clone, Copy)]
pub struct MashConfig {
    /// Iteration cap for bounded retry loops.
    pub retry_ceiling: usize,
    /// Denominator of the per-character uppercase chance in weird capitalization.
    pub weird_cap_ratio: u32,
}

impl Default for MashConfig {
    fn default() -> Self {
        MashConfig {
            retry_ceiling: RETRY_CEILING,
            weird_cap_ratio: WEIRD_CAP_RATIO,
        }
    }
}
