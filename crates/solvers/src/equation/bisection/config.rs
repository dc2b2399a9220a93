use thiserror::Error;

use bisect_core::{Precision, PrecisionError};

/// Whether the solver checks that the initial bracket straddles a root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BracketCheck {
    /// Accept any ordered bracket, even one without a sign change.
    #[default]
    Unchecked,
    /// Reject brackets where `f(lower) * f(upper) >= 0`.
    RequireSignChange,
}

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance_percent: f64,
    max_iters: usize,
    precision: Precision,
    bracket_check: BracketCheck,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance_percent must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error(transparent)]
    Precision(#[from] PrecisionError),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance_percent: 0.005,
            max_iters: 100,
            precision: Precision::default(),
            bracket_check: BracketCheck::Unchecked,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance, iteration cap, and
    /// digit count.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not a finite positive number,
    /// `max_iters` is zero, or `digits` exceeds [`Precision::MAX_DIGITS`].
    pub fn new(tolerance_percent: f64, max_iters: usize, digits: u32) -> Result<Self, ConfigError> {
        if !tolerance_percent.is_finite() || tolerance_percent <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        let precision = Precision::new(digits)?;

        Ok(Self {
            tolerance_percent,
            max_iters,
            precision,
            bracket_check: BracketCheck::Unchecked,
        })
    }

    /// Sets how the initial bracket is checked.
    #[must_use]
    pub fn with_bracket_check(mut self, bracket_check: BracketCheck) -> Self {
        self.bracket_check = bracket_check;
        self
    }

    /// Returns the relative error, in percent, at which the run stops.
    #[must_use]
    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// Returns the maximum number of passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the precision applied to every stored value.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns how the initial bracket is checked.
    #[must_use]
    pub fn bracket_check(&self) -> BracketCheck {
        self.bracket_check
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_run() {
        let config = Config::default();
        assert_eq!(config, Config::new(0.005, 100, 4).expect("valid config"));
        assert_eq!(config.bracket_check(), BracketCheck::Unchecked);
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(tolerance, 10, 4), Err(ConfigError::Tolerance));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0.1, 0, 4), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_excess_digits() {
        assert!(matches!(
            Config::new(0.1, 10, 101),
            Err(ConfigError::Precision(PrecisionError::TooManyDigits { .. }))
        ));
    }

    #[test]
    fn bracket_check_builder() {
        let config = Config::default().with_bracket_check(BracketCheck::RequireSignChange);
        assert_eq!(config.bracket_check(), BracketCheck::RequireSignChange);
    }
}
