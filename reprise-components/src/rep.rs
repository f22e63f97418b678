//! Sequence repetition for building simulated datasets.
//!
//! [`rep`] expands a short sequence into a longer one, the usual way to
//! produce group labels or design columns that line up with a vector of
//! draws.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options controlling how [`rep`] repeats a sequence.
///
/// `each` is applied first, repeating every element contiguously. The
/// expanded sequence is then either cycled to an exact [`length_out`]
/// (in which case [`times`] is ignored entirely) or repeated according
/// to [`times`].
///
/// [`length_out`]: Options::length_out
/// [`times`]: Options::times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Contiguous repetitions of each element, applied first.
    pub each: usize,
    /// Repetitions of the each-expanded sequence.
    pub times: Times,
    /// Exact output length: the each-expanded sequence is cyclically
    /// extended or truncated to this length. Takes precedence over
    /// `times`.
    pub length_out: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            each: 1,
            times: Times::Whole(1),
            length_out: None,
        }
    }
}

/// How many times the expanded sequence repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Times {
    /// Repeat the whole sequence this many times.
    Whole(usize),
    /// Repeat element `i` of the each-expanded sequence `counts[i]`
    /// times. The counts must match the each-expanded length.
    PerElement(Vec<usize>),
}

/// Errors from [`rep`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Per-element repetition counts did not line up with the sequence.
    #[error("per-element times has {actual} counts but the sequence has {expected} elements")]
    TimesLengthMismatch { expected: usize, actual: usize },
}

/// Repeats `values` according to `options`.
///
/// Zero counts are permitted everywhere and simply produce an empty
/// output; a `length_out` on an empty input also yields an empty output.
///
/// # Errors
///
/// Returns [`Error::TimesLengthMismatch`] if [`Times::PerElement`] counts
/// do not match the each-expanded length.
///
/// # Examples
///
/// ```
/// use reprise_components::rep::{Options, Times, rep};
///
/// let values = ["a", "b"];
///
/// let each = rep(&values, &Options { each: 3, ..Options::default() }).unwrap();
/// assert_eq!(each, vec!["a", "a", "a", "b", "b", "b"]);
///
/// let times = rep(&values, &Options { times: Times::Whole(3), ..Options::default() }).unwrap();
/// assert_eq!(times, vec!["a", "b", "a", "b", "a", "b"]);
///
/// let exact = rep(&values, &Options { length_out: Some(5), ..Options::default() }).unwrap();
/// assert_eq!(exact, vec!["a", "b", "a", "b", "a"]);
/// ```
pub fn rep<T: Clone>(values: &[T], options: &Options) -> Result<Vec<T>, Error> {
    let expanded: Vec<T> = values
        .iter()
        .flat_map(|value| std::iter::repeat_n(value.clone(), options.each))
        .collect();

    // An exact output length wins over `times` entirely.
    if let Some(length) = options.length_out {
        return Ok(expanded.iter().cloned().cycle().take(length).collect());
    }

    match &options.times {
        Times::Whole(times) => Ok((0..*times).flat_map(|_| expanded.iter().cloned()).collect()),
        Times::PerElement(counts) => {
            if counts.len() != expanded.len() {
                return Err(Error::TimesLengthMismatch {
                    expected: expanded.len(),
                    actual: counts.len(),
                });
            }
            Ok(expanded
                .iter()
                .zip(counts)
                .flat_map(|(value, &count)| std::iter::repeat_n(value.clone(), count))
                .collect())
        }
    }
}
