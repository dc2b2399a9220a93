use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("midpoint is zero at iteration {iteration}; relative error is undefined")]
    DegenerateMidpoint { iteration: usize },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME> From<EvalError<ME>> for Error
where
    ME: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}
