use derive_more::Display;

use crate::token::{CalcNode, Operator, Token};

#[derive(Debug, Display, Clone, PartialEq)]
pub enum EvalError {
    #[display(fmt = "Malformed expression: {}", _0)]
    Malformed(String),
}

impl std::error::Error for EvalError {}

/// Reduces a token tree to a single number, innermost groups first.
///
/// Division by zero is not an error; it produces an infinite or NaN result.
pub fn evaluate(node: &CalcNode) -> Result<f64, EvalError> {
    match node {
        CalcNode::Leaf(tokens) => reduce(tokens.clone()),
        CalcNode::Group(children) => {
            let mut tokens = Vec::new();
            for child in children {
                match child {
                    CalcNode::Leaf(inner) => tokens.extend_from_slice(inner),
                    CalcNode::Group(_) => tokens.push(Token::Number(evaluate(child)?)),
                }
            }
            reduce(tokens)
        }
    }
}

/// Reduces a flat sequence, multiplicative operators before additive ones.
///
/// Within each pass the leftmost operator is applied first, so chains like
/// `10 − 3 − 2` associate to the left.
pub fn reduce(mut tokens: Vec<Token>) -> Result<f64, EvalError> {
    reduce_pass(&mut tokens, true)?;
    reduce_pass(&mut tokens, false)?;

    match tokens.as_slice() {
        [Token::Number(value)] => Ok(*value),
        [] => Err(EvalError::Malformed("empty expression".to_string())),
        other => Err(EvalError::Malformed(format!(
            "{} tokens left after reduction",
            other.len()
        ))),
    }
}

fn reduce_pass(tokens: &mut Vec<Token>, multiplicative: bool) -> Result<(), EvalError> {
    while let Some((pos, op)) = tokens.iter().enumerate().find_map(|(i, t)| match t {
        Token::Operator(op) if op.is_multiplicative() == multiplicative => Some((i, *op)),
        _ => None,
    }) {
        let value = apply(tokens, pos, op)?;
        tokens.splice(pos - 1..=pos + 1, std::iter::once(Token::Number(value)));
    }
    Ok(())
}

fn apply(tokens: &[Token], pos: usize, op: Operator) -> Result<f64, EvalError> {
    let left = pos.checked_sub(1).and_then(|i| tokens.get(i));
    let right = tokens.get(pos + 1);

    match (left, right) {
        (Some(Token::Number(l)), Some(Token::Number(r))) => Ok(op.apply(*l, *r)),
        _ => Err(EvalError::Malformed(format!(
            "operator {} at {} lacks a number on each side",
            op, pos
        ))),
    }
}
