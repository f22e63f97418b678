//! Reusable components for simulating datasets with Reprise.
//!
//! - [`sample`]: normal and uniform sampler components with cyclic
//!   parameter broadcasting, each implementing
//!   [`Trial`](reprise_core::Trial).
//! - [`rep`]: sequence repetition with `each`, `times`, and
//!   `length_out` controls.
//! - [`frame`]: row-aligned named columns for holding simulated
//!   datasets.

pub mod frame;
pub mod rep;
pub mod sample;
