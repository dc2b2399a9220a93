//! Core traits and types for bisection root finding.
//!
//! This crate defines the shared abstractions that the solver, observers, and
//! report renderer build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Cubic`] — the fixed target function `f(x) = x³ − 6x² + 8x`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Precision`] — decimal rounding applied to every stored solver value

mod cubic;
mod model;
mod observer;
mod precision;

pub use cubic::Cubic;
pub use model::Model;
pub use observer::Observer;
pub use precision::{Precision, PrecisionError};
