use std::fmt;

use telemetry::IsErr;

use crate::brackets::BracketError;
use crate::eval::EvalError;
use crate::format::failure_message;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Empty,
    /// Fragments that could not be parsed and unbalanced parentheses,
    /// reported together
    Unparseable {
        fragments: Vec<String>,
        brackets: Vec<BracketError>,
    },
    Internal(EvalError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Empty => write!(f, "Nothing to calculate"),
            CalcError::Unparseable {
                fragments,
                brackets,
            } => write!(f, "{}", failure_message(fragments, brackets)),
            CalcError::Internal(e) => write!(f, "Internal Error: {}", e),
        }
    }
}

impl std::error::Error for CalcError {}

impl CalcError {
    /// The message shown to the user, which hides internal details
    pub fn user_message(&self) -> String {
        match self {
            CalcError::Internal(_) => "Internal error while evaluating expression".to_string(),
            e => e.to_string(),
        }
    }
}

impl IsErr for CalcError {
    fn is_err(&self) -> bool {
        matches!(self, CalcError::Internal(_))
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        CalcError::Internal(e)
    }
}
