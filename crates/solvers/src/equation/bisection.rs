//! Bisection with a rounded per-iteration trace.
//!
//! Each pass halves the bracket, rounds the midpoint and both function values
//! to the configured [`Precision`], and appends an [`IterationRecord`]. The
//! run stops once the relative change between successive midpoints falls to
//! or below the tolerance, or after `max_iters` passes.
//!
//! # Example
//!
//! ```
//! use bisect_core::Cubic;
//! use bisect_solvers::equation::bisection::{self, Config, Status};
//!
//! let solution = bisection::solve_unobserved(&Cubic, [3.0, 6.0], &Config::default())?;
//!
//! assert_eq!(solution.status(), Status::Converged);
//! assert_eq!(solution.root(), Some(4.0002));
//! # Ok::<(), bisection::Error>(())
//! ```
//!
//! [`Precision`]: bisect_core::Precision

mod bracket;
mod config;
mod error;
mod event;
mod record;
mod solution;


pub use bracket::BracketError;
pub use config::{BracketCheck, Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use record::{IterationRecord, Subinterval};
pub use solution::{Solution, Status};

use std::convert::Infallible;

use bisect_core::{Cubic, Model, Observer, Precision};

use crate::equation::evaluate;

use bracket::Bracket;

/// Relative error reported for the first pass, which has no prior midpoint.
pub const FIRST_PASS_ERROR: f64 = 100.0;

/// Finds a root of a scalar model using the bisection method.
///
/// Each pass:
///
/// 1. Takes the rounded midpoint of the current bracket.
/// 2. Evaluates the model at the lower bound and the midpoint, rounding both.
/// 3. Computes the relative error against the previous midpoint
///    ([`FIRST_PASS_ERROR`] on the first pass).
/// 4. Appends an [`IterationRecord`] and emits an [`Event`] to the observer.
/// 5. Keeps `[lower, midpoint]` if `f(lower) * f(midpoint) < 0`, otherwise
///    `[midpoint, upper]`.
///
/// The tolerance is checked from the second pass onward.
///
/// The initial bounds are rounded before use, so every stored field,
/// including the first record's bounds, is already rounded.
///
/// The initial bracket is not required to straddle a root unless the config
/// asks for [`BracketCheck::RequireSignChange`].
///
/// # Errors
///
/// Returns an error if the bracket (after rounding) or config is invalid, the model fails or
/// returns a non-finite value, or a midpoint of zero leaves the relative
/// error undefined. No partial trace is returned on error.
pub fn solve<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Infallible>,
{
    let precision = config.precision();
    let mut bracket = Bracket::new(bracket, precision)?;

    if config.bracket_check() == BracketCheck::RequireSignChange {
        let [lower, upper] = bracket.as_array();
        let value_at_lower = evaluate(model, lower, precision)?;
        let value_at_upper = evaluate(model, upper, precision)?;
        if value_at_lower * value_at_upper >= 0.0 {
            return Err(BracketError::NoSignChange.into());
        }
    }

    let mut records = Vec::with_capacity(config.max_iters().min(128));
    let mut previous_midpoint = None;

    for iteration in 1..=config.max_iters() {
        let [lower, upper] = bracket.as_array();
        let midpoint = bracket.midpoint(precision);
        let value_at_lower = evaluate(model, lower, precision)?;
        let value_at_midpoint = evaluate(model, midpoint, precision)?;

        let relative_error = match previous_midpoint {
            None => FIRST_PASS_ERROR,
            Some(previous) => relative_error(midpoint, previous, precision)
                .ok_or(Error::DegenerateMidpoint { iteration })?,
        };

        let record = IterationRecord {
            iteration,
            lower,
            upper,
            midpoint,
            value_at_lower,
            value_at_midpoint,
            relative_error,
        };
        records.push(record);

        bracket.shrink(record.retained(), midpoint);

        let event = Event {
            record: &record,
            next_bracket: bracket.as_array(),
        };
        if let Some(never) = observer.observe(&event) {
            match never {}
        }

        if iteration > 1 && relative_error <= config.tolerance_percent() {
            return Ok(Solution::new(Status::Converged, records));
        }

        previous_midpoint = Some(midpoint);
    }

    Ok(Solution::new(Status::MaxIters, records))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M>(model: &M, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bracket, config, ())
}

/// Runs bisection on the fixed [`Cubic`] and returns its trace.
///
/// This is the plain five-parameter entry point: bounds, tolerance in
/// percent, iteration cap, and decimal digits.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the run fails.
pub fn calculate(
    lower: f64,
    upper: f64,
    tolerance_percent: f64,
    max_iters: usize,
    digits: u32,
) -> Result<Vec<IterationRecord>, Error> {
    let config = Config::new(tolerance_percent, max_iters, digits)?;
    solve_unobserved(&Cubic, [lower, upper], &config).map(Solution::into_records)
}

/// Returns the rounded percentage change from `previous` to `midpoint`, or
/// `None` when `midpoint` is zero.
fn relative_error(midpoint: f64, previous: f64, precision: Precision) -> Option<f64> {
    #[allow(clippy::float_cmp)]
    if midpoint == 0.0 {
        return None;
    }
    Some(precision.round((midpoint - previous).abs() / midpoint.abs() * 100.0))
}
