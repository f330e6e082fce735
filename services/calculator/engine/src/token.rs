use strum_macros::{AsRefStr, Display, EnumString};

/// Glyph used when rendering a negative number
pub const MINUS: char = '−';

/// The four binary operators, displayed with their canonical glyph.
///
/// Parsing accepts both the canonical glyph and the ASCII variant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "−", serialize = "-")]
    Sub,
    #[strum(to_string = "×", serialize = "*")]
    Mul,
    #[strum(to_string = "÷", serialize = "/")]
    Div,
}

impl Operator {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// A (sub)expression. Every `Group` corresponds to one pair of parentheses,
/// or to the whole input line at the root.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcNode {
    Leaf(Vec<Token>),
    Group(Vec<CalcNode>),
}
