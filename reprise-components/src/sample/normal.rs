use rand_distr::{Distribution, StandardNormal};
use reprise_core::{Stream, Trial};

use super::{Error, Param, validate};

/// Draws a fixed number of values from normal distributions.
///
/// Draw `j` is distributed as Normal(`mean.at(j)`, `sd.at(j)`), so cycled
/// parameters produce interleaved draws from several distributions in a
/// single run, the usual way to simulate grouped measurements.
///
/// The draw count is always a single integer; it is never inferred from
/// the parameter sequences.
///
/// # Examples
///
/// ```
/// use reprise_components::sample::NormalDraws;
/// use reprise_core::{Stream, Trial};
///
/// let mut stream = Stream::seeded(42);
/// let mut heights = NormalDraws::new(10, 170.0, 10.0).unwrap();
///
/// let draws = heights.run(&mut stream).unwrap();
/// assert_eq!(draws.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NormalDraws {
    count: usize,
    mean: Param,
    sd: Param,
}

impl NormalDraws {
    /// Creates a sampler producing `count` normal draws.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero, either parameter sequence is
    /// empty or contains a non-finite value, or any standard deviation is
    /// negative. A standard deviation of zero is permitted and yields the
    /// mean exactly.
    pub fn new(
        count: usize,
        mean: impl Into<Param>,
        sd: impl Into<Param>,
    ) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }

        let mean = mean.into();
        let sd = sd.into();
        validate("mean", &mean)?;
        validate("sd", &sd)?;
        for &value in sd.values() {
            if value < 0.0 {
                return Err(Error::NegativeSpread { value });
            }
        }

        Ok(Self { count, mean, sd })
    }

    /// The number of draws produced per run.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean parameter.
    #[must_use]
    pub fn mean(&self) -> &Param {
        &self.mean
    }

    /// The standard deviation parameter.
    #[must_use]
    pub fn sd(&self) -> &Param {
        &self.sd
    }
}

impl Trial for NormalDraws {
    type Output = Vec<f64>;
    type Error = Error;

    fn run(&mut self, stream: &mut Stream) -> Result<Vec<f64>, Error> {
        let mut draws = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let z: f64 = StandardNormal.sample(stream);
            draws.push(self.mean.at(index) + self.sd.at(index) * z);
        }
        Ok(draws)
    }
}
