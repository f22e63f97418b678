mod error;
mod output;

pub use error::Error;
pub use output::Replicates;

use crate::{Shaped, Stream, Trial};

/// How [`replicate`] collects per-trial results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collect {
    /// Collapse equal-shape numeric results into one flat or rectangular
    /// collection, falling back to list form when shapes differ.
    #[default]
    Simplify,
    /// Keep every result as-is, in invocation order. Always valid,
    /// whatever the trial produces.
    List,
}

/// Runs `trial` exactly `count` times and collects the results.
///
/// Trials run strictly sequentially, in invocation order, each drawing
/// from the shared `stream`. Nothing is memoized: every invocation is
/// independent, and for stochastic trials the results differ unless the
/// caller reseeds the stream between calls.
///
/// With [`Collect::List`] the output is [`Replicates::Trials`], each
/// element kept as its original result. With [`Collect::Simplify`] the
/// outputs are inspected via [`Shaped`]:
///
/// - all scalars collapse to [`Replicates::Scalars`], one value per
///   trial;
/// - numeric series of one common length `k` collapse to
///   [`Replicates::Matrix`], `k` rows by `count` columns, column `c`
///   holding trial `c`'s series;
/// - anything else falls back to [`Replicates::Trials`]. The fallback is
///   silent: failing to simplify is never an error.
///
/// A `count` of 1 still collects into a one-column matrix or a length-1
/// collection, never a bare value.
///
/// Reproducibility is the caller's responsibility: `replicate` takes no
/// seed of its own. Reseed the stream to the same value immediately
/// before two calls to make them identical.
///
/// # Errors
///
/// Returns [`Error::InvalidCount`] if `count` is zero, and
/// [`Error::Trial`] if any invocation fails. Replication is fail-fast:
/// the first failure aborts the run with no partial results and no
/// retry, wrapping the trial's own error as the source.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use rand::Rng;
/// use reprise_core::{Collect, Replicates, Stream, replicate};
///
/// let mut stream = Stream::seeded(42);
/// let mut trial = |stream: &mut Stream| {
///     let draws: Vec<f64> = (0..5).map(|_| stream.random()).collect();
///     Ok::<_, Infallible>(draws)
/// };
///
/// match replicate(3, &mut trial, Collect::Simplify, &mut stream).unwrap() {
///     Replicates::Matrix(matrix) => assert_eq!(matrix.dim(), (5, 3)),
///     other => panic!("expected a matrix, got {other:?}"),
/// }
/// ```
pub fn replicate<T: Trial>(
    count: usize,
    trial: &mut T,
    collect: Collect,
    stream: &mut Stream,
) -> Result<Replicates<T::Output>, Error<T::Error>>
where
    T::Output: Shaped,
{
    if count == 0 {
        return Err(Error::InvalidCount);
    }

    let mut outputs = Vec::with_capacity(count);
    for index in 0..count {
        let output = trial
            .run(stream)
            .map_err(|source| Error::Trial { index, source })?;
        outputs.push(output);
    }

    match collect {
        Collect::List => Ok(Replicates::Trials(outputs)),
        Collect::Simplify => Ok(Replicates::simplified(outputs)),
    }
}

/// Returns an iterator that runs `trial` once per `next` call.
///
/// This is the lazy counterpart of [`replicate`]: it yields each trial
/// result as it is produced, without collecting, and integrates with
/// iterator adapters such as `.take(n)` or `.find(...)`. The iterator
/// never ends on its own; bound it with `.take(n)`.
///
/// Both the trial and the stream are borrowed mutably for the life of the
/// iterator, so no other code can interleave draws while it is in use.
pub fn trials<'a, T: Trial>(trial: &'a mut T, stream: &'a mut Stream) -> TrialIter<'a, T> {
    TrialIter { trial, stream }
}

/// An iterator that runs a trial once per call to `next`.
///
/// Created by [`trials`]. Yields `Result<T::Output, T::Error>` forever;
/// a trial failure is yielded in place and does not end the iteration,
/// since each invocation is independent.
pub struct TrialIter<'a, T: Trial> {
    trial: &'a mut T,
    stream: &'a mut Stream,
}

impl<T: Trial> Iterator for TrialIter<'_, T> {
    type Item = Result<T::Output, T::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.trial.run(self.stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, convert::Infallible};

    use approx::assert_abs_diff_eq;
    use rand_distr::{Distribution, StandardNormal};
    use thiserror::Error;

    use crate::Shape;

    /// A deterministic series trial: invocation `i` (0-based) yields
    /// `[i * 10.0, i * 10.0 + 1.0, ...]` of the configured length.
    fn indexed_series(length: usize) -> impl FnMut(&mut Stream) -> Result<Vec<f64>, Infallible> {
        let mut invocation = 0;
        move |_: &mut Stream| {
            let base = invocation as f64 * 10.0;
            invocation += 1;
            Ok((0..length).map(|offset| base + offset as f64).collect())
        }
    }

    #[test]
    fn list_mode_keeps_every_result_in_order() {
        let mut stream = Stream::seeded(0);
        let mut trial = indexed_series(5);

        let collected = replicate(3, &mut trial, Collect::List, &mut stream).unwrap();

        let Replicates::Trials(outputs) = collected else {
            panic!("list mode must yield trial outputs");
        };
        assert_eq!(outputs.len(), 3);
        assert!(outputs.iter().all(|series| series.len() == 5));
        assert_eq!(outputs[0][0], 0.0);
        assert_eq!(outputs[2][0], 20.0);
    }

    #[test]
    fn simplify_collects_series_into_columns() {
        let mut stream = Stream::seeded(0);
        let mut trial = indexed_series(4);

        let collected = replicate(3, &mut trial, Collect::Simplify, &mut stream).unwrap();

        let Replicates::Matrix(matrix) = collected else {
            panic!("uniform series must simplify to a matrix");
        };
        assert_eq!(matrix.dim(), (4, 3));

        // Column c is trial c's series; row r is element r of each series.
        for column in 0..3 {
            for row in 0..4 {
                assert_eq!(matrix[[row, column]], column as f64 * 10.0 + row as f64);
            }
        }
    }

    #[test]
    fn simplify_collects_scalars_flat() {
        let mut stream = Stream::seeded(0);
        let mut invocation = 0;
        let mut trial = move |_: &mut Stream| {
            invocation += 1;
            Ok::<f64, Infallible>(invocation as f64)
        };

        let collected = replicate(4, &mut trial, Collect::Simplify, &mut stream).unwrap();

        assert_eq!(collected.as_scalars(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn mixed_lengths_fall_back_to_list_form() {
        let mut stream = Stream::seeded(0);
        let mut invocation = 0;
        // Odd invocations yield length 5, even invocations length 3.
        let mut trial = move |_: &mut Stream| {
            invocation += 1;
            let length = if invocation % 2 == 1 { 5 } else { 3 };
            Ok::<Vec<f64>, Infallible>(vec![0.0; length])
        };

        let collected = replicate(4, &mut trial, Collect::Simplify, &mut stream).unwrap();

        let Replicates::Trials(outputs) = collected else {
            panic!("non-uniform shapes must fall back to list form");
        };
        assert_eq!(outputs.len(), 4);
        assert_eq!(outputs[0].len(), 5);
        assert_eq!(outputs[1].len(), 3);
    }

    #[test]
    fn opaque_outputs_never_simplify() {
        /// An output with no numeric form.
        #[derive(Debug, PartialEq)]
        struct Tagged(&'static str);

        impl Shaped for Tagged {
            fn shape(&self) -> Shape<'_> {
                Shape::Opaque
            }
        }

        let mut stream = Stream::seeded(0);
        let mut trial = |_: &mut Stream| Ok::<Tagged, Infallible>(Tagged("run"));

        let collected = replicate(2, &mut trial, Collect::Simplify, &mut stream).unwrap();

        let Replicates::Trials(outputs) = collected else {
            panic!("opaque outputs must stay in list form");
        };
        assert_eq!(outputs, vec![Tagged("run"), Tagged("run")]);
    }

    #[test]
    fn count_of_zero_is_rejected() {
        let mut stream = Stream::seeded(0);
        let mut trial = |_: &mut Stream| Ok::<f64, Infallible>(1.0);

        let error = replicate(0, &mut trial, Collect::List, &mut stream).unwrap_err();

        assert!(matches!(error, Error::InvalidCount));
    }

    #[test]
    fn single_trial_still_collects_as_a_column() {
        let mut stream = Stream::seeded(0);

        let mut series = indexed_series(3);
        let collected = replicate(1, &mut series, Collect::Simplify, &mut stream).unwrap();
        let Replicates::Matrix(matrix) = collected else {
            panic!("a single series must yield a one-column matrix");
        };
        assert_eq!(matrix.dim(), (3, 1));

        let mut scalar = |_: &mut Stream| Ok::<f64, Infallible>(2.5);
        let collected = replicate(1, &mut scalar, Collect::Simplify, &mut stream).unwrap();
        assert_eq!(collected.as_scalars(), Some(&[2.5][..]));
    }

    #[derive(Debug, Error)]
    #[error("trial blew up on invocation {0}")]
    struct BlowUp(usize);

    #[test]
    fn failing_trial_aborts_immediately() {
        let invocations = Cell::new(0_usize);
        let mut trial = |_: &mut Stream| {
            let invocation = invocations.get();
            invocations.set(invocation + 1);
            if invocation == 2 {
                Err(BlowUp(invocation))
            } else {
                Ok(1.0)
            }
        };

        let mut stream = Stream::seeded(0);
        let error = replicate(10, &mut trial, Collect::Simplify, &mut stream).unwrap_err();

        let Error::Trial { index, source } = error else {
            panic!("expected the trial failure to propagate");
        };
        assert_eq!(index, 2);
        assert_eq!(source.0, 2);

        // Fail-fast: nothing after the failing invocation ran.
        assert_eq!(invocations.get(), 3);
    }

    #[test]
    fn reseeding_reproduces_replicates() {
        let mut normal_draws = |stream: &mut Stream| {
            let draws: Vec<f64> = (0..5).map(|_| StandardNormal.sample(stream)).collect();
            Ok::<_, Infallible>(draws)
        };

        let mut stream = Stream::seeded(1234);
        let first = replicate(3, &mut normal_draws, Collect::List, &mut stream).unwrap();

        stream.reseed(1234);
        let second = replicate(3, &mut normal_draws, Collect::List, &mut stream).unwrap();

        let (Replicates::Trials(first), Replicates::Trials(second)) = (first, second) else {
            panic!("list mode must yield trial outputs");
        };
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|series| series.len() == 5));
    }

    #[test]
    fn lazy_iterator_agrees_with_replicate() {
        let mut trial = |stream: &mut Stream| {
            let z: f64 = StandardNormal.sample(stream);
            Ok::<f64, Infallible>(z)
        };

        let mut stream = Stream::seeded(55);
        let lazy: Vec<f64> = trials(&mut trial, &mut stream)
            .take(4)
            .map(|result| result.unwrap())
            .collect();

        stream.reseed(55);
        let eager = replicate(4, &mut trial, Collect::Simplify, &mut stream).unwrap();

        let Some(scalars) = eager.as_scalars() else {
            panic!("scalar trials must simplify to a flat collection");
        };
        for (a, b) in lazy.iter().zip(scalars) {
            assert_abs_diff_eq!(a, b);
        }
    }
}
