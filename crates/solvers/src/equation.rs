//! Solvers for scalar equations — finding where a model's output crosses zero.
//!
//! A scalar [`Model`] maps `x` to `f(x)`. Solvers in this module search a
//! bracket for an `x` where `f(x)` changes sign.
//!
//! # Solvers
//!
//! - [`bisection`] — interval halving with a rounded per-iteration trace
//!
//! [`Model`]: bisect_core::Model

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod bisection;
