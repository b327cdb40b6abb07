//! Names bound by binding and assignment patterns.

use crate::node::Node;

/// Appends every identifier a pattern binds, in source order.
///
/// Handles plain identifiers and the ES2015 destructuring forms. Member
/// expressions (valid assignment targets) bind nothing.
pub fn collect_bound_names<'a>(pattern: &'a Node, out: &mut Vec<&'a str>) {
    match pattern {
        Node::Identifier { name } => out.push(name),
        Node::ObjectPattern { properties } => {
            for property in properties {
                match property {
                    Node::Property { value, .. } => collect_bound_names(value, out),
                    other => collect_bound_names(other, out),
                }
            }
        }
        Node::ArrayPattern { elements } => {
            for element in elements.iter().flatten() {
                collect_bound_names(element, out);
            }
        }
        Node::RestElement { argument } => collect_bound_names(argument, out),
        Node::AssignmentPattern { left, .. } => collect_bound_names(left, out),
        _ => {}
    }
}

/// Names bound by a pattern.
pub fn bound_names(pattern: &Node) -> Vec<&str> {
    let mut out = Vec::new();
    collect_bound_names(pattern, &mut out);
    out
}

/// Whether `pattern` binds `name`.
pub fn binds(pattern: &Node, name: &str) -> bool {
    bound_names(pattern).contains(&name)
}
