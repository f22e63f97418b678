use ndarray::Array2;

use crate::{Shape, Shaped};

/// The collected results of a replicated trial.
///
/// Which variant is produced depends on the [`Collect`](super::Collect)
/// mode and on the shapes of the per-trial outputs. Callers match on the
/// variant they expect rather than receiving a dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Replicates<T> {
    /// Every trial produced a scalar: one value per trial, in invocation
    /// order.
    Scalars(Vec<f64>),
    /// Every trial produced a numeric series of one common length `k`:
    /// a `k × count` matrix whose column `c` holds trial `c`'s series.
    Matrix(Array2<f64>),
    /// Per-trial outputs kept as-is, in invocation order.
    Trials(Vec<T>),
}

impl<T> Replicates<T> {
    /// The number of trials collected.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Scalars(values) => values.len(),
            Self::Matrix(matrix) => matrix.ncols(),
            Self::Trials(outputs) => outputs.len(),
        }
    }

    /// The flat scalar collection, if every trial produced a scalar.
    #[must_use]
    pub fn as_scalars(&self) -> Option<&[f64]> {
        match self {
            Self::Scalars(values) => Some(values),
            _ => None,
        }
    }

    /// The rectangular collection, if every trial produced an
    /// equal-length series.
    #[must_use]
    pub fn as_matrix(&self) -> Option<&Array2<f64>> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// The per-trial outputs, if the results were collected in list form.
    #[must_use]
    pub fn as_trials(&self) -> Option<&[T]> {
        match self {
            Self::Trials(outputs) => Some(outputs),
            _ => None,
        }
    }

    /// Consumes the collection, returning the per-trial outputs if the
    /// results were collected in list form.
    #[must_use]
    pub fn into_trials(self) -> Option<Vec<T>> {
        match self {
            Self::Trials(outputs) => Some(outputs),
            _ => None,
        }
    }
}

impl<T: Shaped> Replicates<T> {
    /// Collapses equal-shape outputs into flat or rectangular form.
    ///
    /// Simplification is best-effort: outputs of mixed or opaque shape
    /// are returned unchanged as [`Replicates::Trials`], never an error.
    pub(super) fn simplified(outputs: Vec<T>) -> Self {
        match outputs.first().map(Shaped::shape) {
            Some(Shape::Scalar(_)) => {
                let mut scalars = Vec::with_capacity(outputs.len());
                for output in &outputs {
                    match output.shape() {
                        Shape::Scalar(value) => scalars.push(value),
                        _ => return Self::Trials(outputs),
                    }
                }
                Self::Scalars(scalars)
            }
            Some(Shape::Series(first)) => {
                let rows = first.len();
                for output in &outputs {
                    match output.shape() {
                        Shape::Series(series) if series.len() == rows => {}
                        _ => return Self::Trials(outputs),
                    }
                }

                let mut matrix = Array2::zeros((rows, outputs.len()));
                for (column, output) in outputs.iter().enumerate() {
                    if let Shape::Series(series) = output.shape() {
                        for (row, value) in series.iter().enumerate() {
                            matrix[[row, column]] = *value;
                        }
                    }
                }
                Self::Matrix(matrix)
            }
            Some(Shape::Opaque) | None => Self::Trials(outputs),
        }
    }
}
