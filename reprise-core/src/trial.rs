use crate::Stream;

/// A stochastic data-generating procedure.
///
/// A `Trial` produces one result per [`run`] call, drawing whatever
/// randomness it needs from the stream it is given. Two runs against an
/// advancing stream are expected to differ; two runs after reseeding the
/// stream to the same value are identical.
///
/// ## Implementing `Trial`
///
/// Implement [`run()`] on a struct when the trial carries parameters or
/// state. Closures of the form `FnMut(&mut Stream) -> Result<T, E>`
/// implement `Trial` automatically, so ad-hoc trials need no wrapper
/// type:
///
/// ```
/// use std::convert::Infallible;
///
/// use rand::Rng;
/// use reprise_core::{Collect, Stream, replicate};
///
/// let mut stream = Stream::seeded(42);
/// let mut trial = |stream: &mut Stream| Ok::<f64, Infallible>(stream.random());
///
/// let results = replicate(10, &mut trial, Collect::Simplify, &mut stream).unwrap();
/// assert_eq!(results.count(), 10);
/// ```
///
/// [`run`]: Trial::run
/// [`run()`]: Trial::run
pub trait Trial {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the trial once, drawing randomness from `stream`.
    ///
    /// # Errors
    ///
    /// Each trial defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn run(&mut self, stream: &mut Stream) -> Result<Self::Output, Self::Error>;
}

/// Blanket implementation for trial closures.
impl<F, T, E> Trial for F
where
    F: FnMut(&mut Stream) -> Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    fn run(&mut self, stream: &mut Stream) -> Result<T, E> {
        self(stream)
    }
}

/// A view of a trial output's structure, used when deciding whether
/// replicated results can collapse into rectangular form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A single numeric value.
    Scalar(f64),
    /// A fixed-length numeric series.
    Series(&'a [f64]),
    /// A value with no rectangular numeric form.
    Opaque,
}

/// Classifies a trial output for the simplify decision in
/// [`replicate`](crate::replicate()).
///
/// Outputs reporting [`Shape::Scalar`] or [`Shape::Series`] can be
/// collapsed into a flat or rectangular collection when every trial
/// agrees on the shape. Any output reporting [`Shape::Opaque`] keeps the
/// collection in list form. Implement this for your own output types,
/// returning `Shape::Opaque` unless the value is genuinely a scalar or a
/// numeric series.
pub trait Shaped {
    /// Returns the shape of this value.
    fn shape(&self) -> Shape<'_>;
}

impl Shaped for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(*self)
    }
}

impl Shaped for Vec<f64> {
    fn shape(&self) -> Shape<'_> {
        Shape::Series(self)
    }
}

impl<const N: usize> Shaped for [f64; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Series(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use rand::Rng;

    /// A trial that tracks how many times it has run.
    struct Counted {
        runs: usize,
    }

    impl Trial for Counted {
        type Output = f64;
        type Error = Infallible;

        fn run(&mut self, stream: &mut Stream) -> Result<f64, Infallible> {
            self.runs += 1;
            Ok(stream.random())
        }
    }

    #[test]
    fn struct_trials_can_carry_state() {
        let mut stream = Stream::seeded(3);
        let mut trial = Counted { runs: 0 };

        trial.run(&mut stream).unwrap();
        trial.run(&mut stream).unwrap();

        assert_eq!(trial.runs, 2);
    }

    #[test]
    fn closures_are_trials() {
        let mut stream = Stream::seeded(3);
        let mut trial = |stream: &mut Stream| Ok::<f64, Infallible>(stream.random());

        let a = trial.run(&mut stream).unwrap();
        let b = trial.run(&mut stream).unwrap();

        assert_ne!(a, b, "an advancing stream should produce fresh draws");
    }

    #[test]
    fn shapes_classify_outputs() {
        assert_eq!(1.5.shape(), Shape::Scalar(1.5));

        let series = vec![1.0, 2.0, 3.0];
        assert_eq!(series.shape(), Shape::Series(&[1.0, 2.0, 3.0]));

        let fixed = [4.0, 5.0];
        assert_eq!(fixed.shape(), Shape::Series(&[4.0, 5.0]));
    }
}
