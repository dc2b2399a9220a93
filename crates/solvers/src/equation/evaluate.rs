use thiserror::Error;

use bisect_core::{Model, Precision};

/// Errors that can occur when evaluating a scalar model.
#[derive(Debug, Error)]
pub enum EvalError<ME> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// The model returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates a scalar model at `x` and rounds the result to `precision`.
///
/// # Errors
///
/// Returns an error if the model call fails or produces a non-finite value.
pub fn evaluate<M>(model: &M, x: f64, precision: Precision) -> Result<f64, EvalError<M::Error>>
where
    M: Model<Input = f64, Output = f64>,
{
    let value = model.call(&x).map_err(EvalError::Model)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite { x, value });
    }
    Ok(precision.round(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use bisect_core::Cubic;

    /// Model that divides one by its input.
    struct Reciprocal;

    impl Model for Reciprocal {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(1.0 / input)
        }
    }

    /// Model that always fails.
    struct Broken;

    impl Model for Broken {
        type Input = f64;
        type Output = f64;
        type Error = std::fmt::Error;

        fn call(&self, _input: &f64) -> Result<f64, std::fmt::Error> {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn rounds_model_output() {
        let value = evaluate(&Cubic, 3.75, Precision::default()).expect("finite value");
        assert_relative_eq!(value, -1.6406);
    }

    #[test]
    fn rejects_non_finite_output() {
        let result = evaluate(&Reciprocal, 0.0, Precision::default());
        assert!(matches!(
            result,
            Err(EvalError::NonFinite { x, value }) if x == 0.0 && value.is_infinite()
        ));
    }

    #[test]
    fn forwards_model_errors() {
        let result = evaluate(&Broken, 1.0, Precision::default());
        assert!(matches!(result, Err(EvalError::Model(std::fmt::Error))));
    }
}
