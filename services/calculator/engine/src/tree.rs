use crate::brackets::Fragment;
use crate::segment::parse_segment;
use crate::token::CalcNode;

/// Builds the token tree for the output of [`crate::brackets::split`].
///
/// Fragments that fail to parse are returned alongside the tree; they
/// contribute nothing to it.
pub fn build(fragments: &[Fragment], previous: f64) -> (CalcNode, Vec<String>) {
    let mut bad = Vec::new();
    let node = build_group(fragments, previous, &mut bad);
    (node, bad)
}

fn build_group(fragments: &[Fragment], previous: f64, bad: &mut Vec<String>) -> CalcNode {
    let n = fragments.len();
    let mut children = Vec::with_capacity(n);

    for (i, fragment) in fragments.iter().enumerate() {
        match fragment {
            Fragment::Text(text) => match parse_segment(text, i > 0, i + 1 < n, previous) {
                Ok(tokens) => children.push(CalcNode::Leaf(tokens)),
                Err(leftover) => bad.push(leftover),
            },
            Fragment::Group(inner) if inner.is_empty() => bad.push("()".to_string()),
            Fragment::Group(inner) => children.push(build_group(inner, previous, bad)),
        }
    }

    CalcNode::Group(children)
}
