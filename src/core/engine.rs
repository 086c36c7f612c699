use crate::core::digits::{is_palindrome, reverse_digits};
use crate::utils::error::{Result, SearchError};
use num_bigint::BigUint;

/// Result of a bounded reverse-and-add search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { value: BigUint, iterations: u64 },
    Exhausted { iterations: u64 },
}

/// One reverse-and-add step: the value plus the numeric re-parse of its
/// reversed decimal rendering, in exact big-integer arithmetic. Leading
/// zeros in the reversal are a textual artifact and collapse on re-parse.
pub fn reverse_and_add(value: &BigUint) -> Result<BigUint> {
    let reversed = reverse_digits(&value.to_string());
    let addend = reversed
        .parse::<BigUint>()
        .map_err(|_| SearchError::InvalidInput { value: reversed })?;

    Ok(value + addend)
}

pub struct SearchEngine {
    max_iter: u64,
}

impl SearchEngine {
    pub fn new(max_iter: u64) -> Self {
        Self { max_iter }
    }

    /// Applies the reverse-and-add transform up to the configured bound,
    /// testing the palindrome property on each post-transform value's own
    /// canonical rendering. The seed itself is never tested, so an
    /// already-palindromic seed still takes at least one step.
    pub fn run(&self, seed: &BigUint) -> Result<SearchOutcome> {
        let mut current = seed.clone();

        for i in 1..=self.max_iter {
            current = reverse_and_add(&current)?;
            let rendered = current.to_string();
            tracing::trace!(iteration = i, value = %rendered, "reverse-and-add step");

            if is_palindrome(&rendered) {
                tracing::debug!(iteration = i, "palindrome reached");
                return Ok(SearchOutcome::Found {
                    value: current,
                    iterations: i,
                });
            }
        }

        Ok(SearchOutcome::Exhausted {
            iterations: self.max_iter,
        })
    }
}
