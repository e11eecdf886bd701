use thiserror::Error;

use crate::evaluate::EvaluationError;

use super::bracket::BracketError;

/// Errors that can occur during bracket validation or bisection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
}
