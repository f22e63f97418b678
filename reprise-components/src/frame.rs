//! Row-aligned named columns for simulated datasets.

use std::fmt;

use reprise_core::{Shape, Shaped};
use serde::Serialize;
use thiserror::Error;

/// A column of row-aligned data in a [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Column {
    /// Numeric observations.
    Numeric(Vec<f64>),
    /// Categorical labels.
    Labels(Vec<String>),
}

impl Column {
    /// Builds a label column from anything stringly.
    pub fn labels<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Labels(values.into_iter().map(Into::into).collect())
    }

    /// The number of rows in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Labels(values) => values.len(),
        }
    }

    /// Whether the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, if this is a numeric column.
    #[must_use]
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Labels(_) => None,
        }
    }

    /// The labels, if this is a label column.
    #[must_use]
    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            Self::Labels(values) => Some(values),
            Self::Numeric(_) => None,
        }
    }
}

/// Errors from constructing a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A column's length disagreed with the columns before it.
    #[error("column {name} has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns shared a name.
    #[error("duplicate column name {name}")]
    DuplicateName { name: String },
}

/// Equal-length named columns bound into row-aligned records.
///
/// A `Frame` is the output sink for simulated datasets: each column is a
/// variable, each row an observation. Columns keep their construction
/// order.
///
/// A frame has no rectangular numeric form as a whole, so a
/// frame-producing trial always collects in list form under
/// [`replicate`](reprise_core::replicate()), one frame per trial.
///
/// # Examples
///
/// ```
/// use reprise_components::frame::{Column, Frame};
///
/// let frame = Frame::new([
///     ("group", Column::labels(["control", "control", "treated"])),
///     ("score", Column::Numeric(vec![12.1, 9.8, 14.2])),
/// ])
/// .unwrap();
///
/// assert_eq!(frame.len(), 3);
/// assert_eq!(frame.width(), 2);
/// assert_eq!(
///     frame.column("score").and_then(Column::as_numeric),
///     Some(&[12.1, 9.8, 14.2][..])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Binds named columns into a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns are not all the same length or if
    /// two columns share a name.
    pub fn new<I, S>(columns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let columns: Vec<(String, Column)> = columns
            .into_iter()
            .map(|(name, column)| (name.into(), column))
            .collect();

        if let Some((_, first)) = columns.first() {
            let expected = first.len();
            for (name, column) in &columns {
                if column.len() != expected {
                    return Err(Error::LengthMismatch {
                        name: name.clone(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }

        for (index, (name, _)) in columns.iter().enumerate() {
            if columns[..index].iter().any(|(seen, _)| seen == name) {
                return Err(Error::DuplicateName { name: name.clone() });
            }
        }

        Ok(Self { columns })
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    /// Whether the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names, in construction order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, column)| column)
    }

    /// Name/column pairs, in construction order.
    #[must_use]
    pub fn columns(&self) -> &[(String, Column)] {
        &self.columns
    }
}

impl Shaped for Frame {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

/// Renders the frame as an aligned text table, one row per record.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|(_, column)| match column {
                Column::Numeric(values) => {
                    values.iter().map(|value| format!("{value:.4}")).collect()
                }
                Column::Labels(values) => values.clone(),
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|((name, _), column_cells)| {
                column_cells
                    .iter()
                    .map(String::len)
                    .chain([name.len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (index, ((name, _), &width)) in self.columns.iter().zip(&widths).enumerate() {
            if index > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{name:>width$}")?;
        }
        writeln!(f)?;

        for row in 0..self.len() {
            for (index, (column_cells, &width)) in cells.iter().zip(&widths).enumerate() {
                if index > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", column_cells[row])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
