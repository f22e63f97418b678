//! Sampler components that draw from standard distributions.
//!
//! Each sampler is constructed with a draw count and broadcastable
//! parameters ([`Param`]), validates its configuration up front, and
//! implements [`Trial`](reprise_core::Trial) so it can be handed straight
//! to [`replicate`](reprise_core::replicate()).

mod error;
mod normal;
mod param;
mod uniform;

pub use error::Error;
pub use normal::NormalDraws;
pub use param::Param;
pub use uniform::UniformDraws;

/// Rejects empty and non-finite parameter sequences.
fn validate(name: &'static str, param: &Param) -> Result<(), Error> {
    if param.is_empty_cycle() {
        return Err(Error::EmptyParam { name });
    }
    for &value in param.values() {
        if !value.is_finite() {
            return Err(Error::NonFinite { name, value });
        }
    }
    Ok(())
}
