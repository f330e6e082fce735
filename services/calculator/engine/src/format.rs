use crate::brackets::BracketError;
use crate::scanner::{ans_display, match_at, operator};
use crate::token::{Operator, MINUS};

/// Displayed in place of an answer that is not a finite number
pub const NOT_A_NUMBER: &str = "NaN";

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 11;

/// Magnitudes outside `[EXPONENT_BELOW, EXPONENT_ABOVE)` are shown with an exponent
const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Rounds to `digits` significant decimal digits, hiding representation
/// noise such as `0.1 + 0.2 = 0.30000000000000004`
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0. {
        return value;
    }
    format!("{:.*e}", digits.max(1) - 1, value)
        .parse()
        .unwrap_or(value)
}

pub fn format_answer(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.to_string();
    }

    let rounded = round_significant(value, digits);
    // Avoid displaying "-0"
    let rounded = if rounded == 0. { 0. } else { rounded };

    let abs = rounded.abs();
    let text = if abs != 0. && (abs >= EXPONENT_ABOVE || abs < EXPONENT_BELOW) {
        format!("{:e}", rounded)
    } else {
        rounded.to_string()
    };
    match text.strip_prefix('-') {
        Some(magnitude) => format!("{}{}", MINUS, magnitude),
        None => text,
    }
}

pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strips whitespace and inserts the multiplication implied by `)(`
pub fn compact(line: &str) -> String {
    strip_whitespace(line).replace(")(", &format!("){}(", Operator::Mul))
}

/// Normalizes an input line for display in the history.
///
/// Operators are rendered with their canonical glyph, binary operators are
/// surrounded by single spaces and the `Ans` keyword gets consistent casing.
/// Nothing is evaluated.
pub fn format_input(line: &str) -> String {
    let compacted = compact(line);
    let mut out = String::with_capacity(compacted.len() * 2);
    let mut cursor = 0;
    // Whether the previous output ends an operand, making the next operator binary
    let mut after_operand = false;

    while let Some(c) = compacted[cursor..].chars().next() {
        if let (Some(keyword), next) = match_at(ans_display, &compacted, cursor) {
            out.push_str(keyword);
            after_operand = true;
            cursor = next;
            continue;
        }

        if let (Some(op), next) = match_at(operator, &compacted, cursor) {
            if after_operand {
                out.push(' ');
                out.push_str(op.as_ref());
                out.push(' ');
            } else {
                out.push_str(op.as_ref());
            }
            after_operand = false;
            cursor = next;
            continue;
        }

        out.push(c);
        after_operand = c != '(';
        cursor += c.len_utf8();
    }

    out
}

/// Message listing every fragment that could not be parsed, followed by
/// every unbalanced parenthesis
pub fn failure_message(bad: &[String], brackets: &[BracketError]) -> String {
    let problems: Vec<String> = bad
        .iter()
        .map(|b| format!("'{}'", b))
        .chain(brackets.iter().map(BracketError::to_string))
        .collect();
    format!("Failed to parse: {}", problems.join(", "))
}
