use thiserror::Error;

/// Errors from constructing or running a sampler component.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested draw count was zero.
    #[error("draw count must be at least 1")]
    InvalidCount,

    /// A cycled parameter was given an empty sequence.
    #[error("{name} parameter sequence is empty")]
    EmptyParam { name: &'static str },

    /// A parameter contained a NaN or infinite value.
    #[error("{name} contains non-finite value {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// A normal standard deviation was negative.
    #[error("standard deviation must be non-negative, got {value}")]
    NegativeSpread { value: f64 },

    /// A uniform draw paired a minimum above its maximum.
    ///
    /// With cycled bounds of different lengths the offending pairing can
    /// appear at any draw, so this is detected while drawing and carries
    /// the draw index.
    #[error("uniform bounds inverted at draw {index}: min {min} exceeds max {max}")]
    InvertedInterval { index: usize, min: f64, max: f64 },
}
