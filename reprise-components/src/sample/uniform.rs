use rand::Rng;
use reprise_core::{Stream, Trial};

use super::{Error, Param, validate};

/// Draws a fixed number of values from continuous uniform distributions.
///
/// Draw `j` is distributed as Uniform[`min.at(j)`, `max.at(j)`), with the
/// same cyclic broadcasting rule as [`NormalDraws`](super::NormalDraws).
/// Equal bounds yield that value exactly.
///
/// # Examples
///
/// ```
/// use reprise_components::sample::UniformDraws;
/// use reprise_core::{Stream, Trial};
///
/// let mut stream = Stream::seeded(42);
/// let mut scores = UniformDraws::new(20, 0.0, 100.0).unwrap();
///
/// let draws = scores.run(&mut stream).unwrap();
/// assert!(draws.iter().all(|&score| (0.0..100.0).contains(&score)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformDraws {
    count: usize,
    min: Param,
    max: Param,
}

impl UniformDraws {
    /// Creates a sampler producing `count` uniform draws.
    ///
    /// Bound ordering is not checked here: with cycled bounds of
    /// different lengths, the pairing for each draw only exists at draw
    /// time, so [`run`](Trial::run) reports an inverted pair as
    /// [`Error::InvertedInterval`] with the offending draw index.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or either bound sequence is
    /// empty or contains a non-finite value.
    pub fn new(
        count: usize,
        min: impl Into<Param>,
        max: impl Into<Param>,
    ) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }

        let min = min.into();
        let max = max.into();
        validate("min", &min)?;
        validate("max", &max)?;

        Ok(Self { count, min, max })
    }

    /// The number of draws produced per run.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The lower bound parameter.
    #[must_use]
    pub fn min(&self) -> &Param {
        &self.min
    }

    /// The upper bound parameter.
    #[must_use]
    pub fn max(&self) -> &Param {
        &self.max
    }
}

impl Trial for UniformDraws {
    type Output = Vec<f64>;
    type Error = Error;

    fn run(&mut self, stream: &mut Stream) -> Result<Vec<f64>, Error> {
        let mut draws = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let min = self.min.at(index);
            let max = self.max.at(index);
            if min > max {
                return Err(Error::InvertedInterval { index, min, max });
            }

            let unit: f64 = stream.random();
            draws.push(min + (max - min) * unit);
        }
        Ok(draws)
    }
}
