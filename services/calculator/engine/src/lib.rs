#[macro_use]
extern crate lazy_static;

use log::debug;

pub use calculator::{Calculator, HistoryEntry, Snapshot};
pub use config::EngineConfig;
pub use error::CalcError;
pub use format::NOT_A_NUMBER;
pub use token::{CalcNode, Operator, Token};

pub mod brackets;
mod calculator;
mod config;
mod error;
pub mod eval;
pub mod format;
pub mod scanner;
pub mod segment;
mod token;
pub mod tree;

/// Parses and evaluates one input line, substituting `previous` for `Ans`.
///
/// The result may be infinite or NaN, e.g. for a division by zero.
/// Unparseable fragments and unbalanced parentheses are all reported in a
/// single error.
pub fn parse_and_evaluate(line: &str, previous: f64) -> Result<f64, CalcError> {
    let stripped = format::strip_whitespace(line);
    if stripped.is_empty() {
        return Err(CalcError::Empty);
    }

    let split = brackets::split(&stripped);
    let (tree, bad) = tree::build(&split.fragments, previous);
    if !bad.is_empty() || !split.errors.is_empty() {
        return Err(CalcError::Unparseable {
            fragments: bad,
            brackets: split.errors,
        });
    }

    debug!("Token tree for \"{}\": {:?}", line, tree);
    Ok(eval::evaluate(&tree)?)
}
