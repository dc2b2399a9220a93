//! Numerical solvers built on [`bisect_core`].
//!
//! # Modules
//!
//! - [`equation`] — root finding for scalar equations

pub mod equation;
