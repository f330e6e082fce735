use derive_more::Display;

use crate::token::Operator;

/// Output of [`split`]: text between parentheses, or a parenthesized group
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Group(Vec<Fragment>),
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum BracketError {
    #[display(fmt = "Unmatched '(' at position {}", _0)]
    UnmatchedOpen(usize),

    #[display(fmt = "Unmatched ')' at position {}", _0)]
    UnmatchedClose(usize),
}

impl BracketError {
    pub fn position(&self) -> usize {
        match self {
            BracketError::UnmatchedOpen(pos) | BracketError::UnmatchedClose(pos) => *pos,
        }
    }
}

impl std::error::Error for BracketError {}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Split {
    pub fragments: Vec<Fragment>,
    /// Unbalanced parentheses, ordered by position
    pub errors: Vec<BracketError>,
}

/// Splits a whitespace-free line into fragments nested by parentheses.
///
/// Adjacent groups, as in `(2)(3)`, are joined by an implicit multiplication.
/// Splitting never stops early: a stray `)` is recorded and skipped, and a
/// `(` still open at the end of the input is recorded and closed there.
/// Positions in errors are character offsets into `input`.
pub fn split(input: &str) -> Split {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut errors = Vec::new();
    let fragments = split_group(&chars, &mut pos, None, &mut errors);

    errors.sort_by_key(BracketError::position);
    Split { fragments, errors }
}

fn split_group(
    chars: &[char],
    pos: &mut usize,
    opened_at: Option<usize>,
    errors: &mut Vec<BracketError>,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut text = String::new();

    while let Some(&c) = chars.get(*pos) {
        match c {
            '(' => {
                let start = *pos;
                if !text.is_empty() {
                    fragments.push(Fragment::Text(std::mem::take(&mut text)));
                } else if matches!(fragments.last(), Some(Fragment::Group(_))) {
                    fragments.push(Fragment::Text(Operator::Mul.to_string()));
                }
                *pos += 1;
                let group = split_group(chars, pos, Some(start), errors);
                fragments.push(Fragment::Group(group));
            }
            ')' if opened_at.is_none() => {
                errors.push(BracketError::UnmatchedClose(*pos));
                *pos += 1;
                // Keep the text on either side apart
                if !text.is_empty() {
                    fragments.push(Fragment::Text(std::mem::take(&mut text)));
                }
            }
            ')' => {
                *pos += 1;
                if !text.is_empty() {
                    fragments.push(Fragment::Text(text));
                }
                return fragments;
            }
            c => {
                text.push(c);
                *pos += 1;
            }
        }
    }

    if let Some(start) = opened_at {
        errors.push(BracketError::UnmatchedOpen(start));
    }
    if !text.is_empty() {
        fragments.push(Fragment::Text(text));
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Fragment {
        Fragment::Text(s.to_string())
    }

    fn balanced(input: &str) -> Vec<Fragment> {
        let result = split(input);
        assert!(result.errors.is_empty(), "unbalanced: {}", input);
        result.fragments
    }

    fn errors(input: &str) -> Vec<BracketError> {
        split(input).errors
    }

    #[test]
    fn test_flat() {
        assert_eq!(balanced("1+2×3"), vec![text("1+2×3")]);
        assert_eq!(balanced(""), vec![]);
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            balanced("2×(3+(4−1))−5"),
            vec![
                text("2×"),
                Fragment::Group(vec![
                    text("3+"),
                    Fragment::Group(vec![text("4−1")])
                ]),
                text("−5"),
            ]
        );
    }

    #[test]
    fn test_adjacent_groups() {
        assert_eq!(
            balanced("(2)(3)"),
            vec![
                Fragment::Group(vec![text("2")]),
                text("×"),
                Fragment::Group(vec![text("3")]),
            ]
        );

        // Applies at every depth
        assert_eq!(
            balanced("((1)(2))"),
            vec![Fragment::Group(vec![
                Fragment::Group(vec![text("1")]),
                text("×"),
                Fragment::Group(vec![text("2")]),
            ])]
        );
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(balanced("()"), vec![Fragment::Group(vec![])]);
    }

    #[test]
    fn test_unbalanced() {
        use BracketError::*;

        assert_eq!(errors("(1+2"), vec![UnmatchedOpen(0)]);
        assert_eq!(errors("1+(2×(3)"), vec![UnmatchedOpen(2)]);
        assert_eq!(errors("1+2)"), vec![UnmatchedClose(3)]);
        assert_eq!(errors("(1))("), vec![UnmatchedClose(3), UnmatchedOpen(4)]);
        assert_eq!(errors("((1"), vec![UnmatchedOpen(0), UnmatchedOpen(1)]);
        assert_eq!(
            errors("÷(1")[0].to_string(),
            "Unmatched '(' at position 1"
        );
    }

    #[test]
    fn test_positions_after_adjacent_groups() {
        use BracketError::*;

        assert_eq!(errors("(1)(2))"), vec![UnmatchedClose(6)]);
        assert_eq!(errors("(1)(2)(3)("), vec![UnmatchedOpen(9)]);
    }

    #[test]
    fn test_recovers() {
        // A stray ')' is skipped, keeping the text around it apart
        let stray = split("1+2)3");
        assert_eq!(stray.fragments, vec![text("1+2"), text("3")]);
        assert_eq!(stray.errors, vec![BracketError::UnmatchedClose(3)]);

        // An open group is closed at the end of the input
        let open = split("x+(1");
        assert_eq!(
            open.fragments,
            vec![text("x+"), Fragment::Group(vec![text("1")])]
        );
        assert_eq!(open.errors, vec![BracketError::UnmatchedOpen(2)]);
    }
}
