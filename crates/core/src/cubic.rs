use std::convert::Infallible;

use crate::Model;

/// The fixed target function `f(x) = x³ − 6x² + 8x`.
///
/// It factors as `x (x − 2) (x − 4)`, so its roots are 0, 2, and 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl Cubic {
    /// Human-readable form of the function, used in reports.
    pub const LABEL: &'static str = "f(x) = x^3 - 6x^2 + 8x";

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn eval(x: f64) -> f64 {
        x.powi(3) - 6.0 * x.powi(2) + 8.0 * x
    }
}

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok(Self::eval(*input))
    }
}
