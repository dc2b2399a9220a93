#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The half of a bracket kept for the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Subinterval {
    /// `[lower, midpoint]`, kept when the function changes sign across it.
    Lower,
    /// `[midpoint, upper]`, kept otherwise.
    Upper,
}

impl Subinterval {
    /// Chooses the half to keep from the values at the lower bound and midpoint.
    ///
    /// Only a strictly negative product keeps the lower half. A product of
    /// exactly zero keeps the upper half, so a root landing on the midpoint
    /// moves the lower bound.
    #[must_use]
    pub fn from_values(value_at_lower: f64, value_at_midpoint: f64) -> Self {
        if value_at_lower * value_at_midpoint < 0.0 {
            Subinterval::Lower
        } else {
            Subinterval::Upper
        }
    }
}

/// A snapshot of one bisection pass.
///
/// Bounds are the bracket on entry to the pass. Every other field has been
/// rounded to the run's precision before it is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationRecord {
    /// Pass number, starting at 1.
    pub iteration: usize,
    /// Lower bracket bound before the midpoint is taken.
    pub lower: f64,
    /// Upper bracket bound before the midpoint is taken.
    pub upper: f64,
    /// Rounded midpoint of the bracket.
    pub midpoint: f64,
    /// Rounded `f(lower)`.
    pub value_at_lower: f64,
    /// Rounded `f(midpoint)`.
    pub value_at_midpoint: f64,
    /// Rounded percentage change of the midpoint from the previous pass,
    /// or 100 on the first pass.
    pub relative_error: f64,
}

impl IterationRecord {
    /// Returns the half of the bracket this pass keeps.
    #[must_use]
    pub fn retained(&self) -> Subinterval {
        Subinterval::from_values(self.value_at_lower, self.value_at_midpoint)
    }

    /// Returns the two candidate halves, lower first.
    #[must_use]
    pub fn subintervals(&self) -> [[f64; 2]; 2] {
        [[self.lower, self.midpoint], [self.midpoint, self.upper]]
    }

    /// Returns the bounds of the half this pass keeps.
    #[must_use]
    pub fn retained_bounds(&self) -> [f64; 2] {
        let [lower_half, upper_half] = self.subintervals();
        match self.retained() {
            Subinterval::Lower => lower_half,
            Subinterval::Upper => upper_half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value_at_lower: f64, value_at_midpoint: f64) -> IterationRecord {
        IterationRecord {
            iteration: 1,
            lower: 3.0,
            upper: 6.0,
            midpoint: 4.5,
            value_at_lower,
            value_at_midpoint,
            relative_error: 100.0,
        }
    }

    #[test]
    fn sign_change_keeps_lower_half() {
        let record = record(-3.0, 5.625);
        assert_eq!(record.retained(), Subinterval::Lower);
        assert_eq!(record.retained_bounds(), [3.0, 4.5]);
    }

    #[test]
    fn same_sign_keeps_upper_half() {
        let record = record(-3.0, -1.0);
        assert_eq!(record.retained(), Subinterval::Upper);
        assert_eq!(record.retained_bounds(), [4.5, 6.0]);
    }

    #[test]
    fn zero_product_keeps_upper_half() {
        assert_eq!(record(-3.0, 0.0).retained(), Subinterval::Upper);
        assert_eq!(record(0.0, 5.0).retained(), Subinterval::Upper);
    }
}
