use crate::scanner::{ans_keyword, match_at, number, operator};
use crate::token::{Operator, Token};

/// Parses one parenthesis-free fragment into alternating numbers and operators.
///
/// `needs_leading_operator` is set when the fragment follows a group, and
/// `needs_trailing_operator` when a group follows it. Where an expected
/// operator is missing an implicit multiplication is inserted. The `Ans`
/// keyword is replaced with `previous`.
///
/// On failure returns the text that could not be consumed.
pub fn parse_segment(
    fragment: &str,
    needs_leading_operator: bool,
    needs_trailing_operator: bool,
    previous: f64,
) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    let mut first = true;
    // Where the most recent operator starts in `fragment`
    let mut operator_start = 0;

    while cursor < fragment.len() {
        if !first || needs_leading_operator {
            operator_start = cursor;
            let (op, next) = match_at(operator, fragment, cursor);
            tokens.push(Token::Operator(op.unwrap_or(Operator::Mul)));
            cursor = next;
            if cursor == fragment.len() {
                break;
            }
        }
        first = false;

        let (value, next) = match match_at(ans_keyword, fragment, cursor) {
            (Some(_), next) => (Some(previous), next),
            (None, _) => match_at(number, fragment, cursor),
        };

        match value {
            Some(value) => {
                tokens.push(Token::Number(value));
                cursor = next;
            }
            None => break,
        }
    }

    if cursor < fragment.len() {
        return Err(fragment[cursor..].to_string());
    }

    match tokens.last().copied() {
        Some(Token::Number(_)) if needs_trailing_operator => {
            tokens.push(Token::Operator(Operator::Mul));
        }
        // Nothing follows to complete the operation
        Some(Token::Operator(_)) if !needs_trailing_operator => {
            return Err(fragment[operator_start..].to_string());
        }
        _ => {}
    }

    Ok(tokens)
}
