use thiserror::Error;

use bisect_core::Precision;

use super::Subinterval;

/// Errors that can occur when creating a [`Bracket`] or checking its signs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// The lower endpoint is not strictly below the upper endpoint.
    #[error("lower bound must be less than upper bound")]
    Misordered,
    /// Function values at the endpoints do not change sign.
    #[error("no sign change")]
    NoSignChange,
}

/// Current search interval of a bisection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    /// Rounds the initial bounds to `precision` and validates them.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if a bound is non-finite or the rounded bounds
    /// have `lower >= upper`.
    pub(super) fn new(bounds: [f64; 2], precision: Precision) -> Result<Self, BracketError> {
        let [lower, upper] = bounds;

        if !lower.is_finite() || !upper.is_finite() {
            return Err(BracketError::NonFinite);
        }

        let lower = precision.round(lower);
        let upper = precision.round(upper);

        if lower >= upper {
            return Err(BracketError::Misordered);
        }

        Ok(Self { lower, upper })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint of the bracket rounded to `precision`.
    pub(super) fn midpoint(&self, precision: Precision) -> f64 {
        precision.round((self.lower + self.upper) / 2.0)
    }

    /// Moves one bound to `midpoint`, keeping the given half.
    pub(super) fn shrink(&mut self, keep: Subinterval, midpoint: f64) {
        match keep {
            Subinterval::Lower => self.upper = midpoint,
            Subinterval::Upper => self.lower = midpoint,
        }
    }
}
