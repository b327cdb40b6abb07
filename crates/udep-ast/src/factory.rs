//! Builders for the synthetic nodes the rewriter emits.

use crate::node::Node;
use serde_json::Value;

/// Member name that is always accessed in computed form (`obj["default"]`).
pub const DEFAULT_MEMBER: &str = "default";

/// String literal `"value"`.
pub fn literal(value: &str) -> Node {
    Node::Literal {
        value: Value::String(value.to_string()),
        raw: Some(quote(value)),
        regex: None,
    }
}

fn quote(value: &str) -> String {
    // JSON string escaping is a valid JavaScript string literal.
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{value}\""))
}

pub fn identifier(name: &str) -> Node {
    Node::Identifier {
        name: name.to_string(),
    }
}

/// `object.property`, or `object["property"]` for the reserved default member
/// and for names that are not identifiers (`export { v as "a-b" }`).
pub fn member(object: &str, property: &str) -> Node {
    let computed = property == DEFAULT_MEMBER || !is_identifier_name(property);
    Node::MemberExpression {
        object: Box::new(identifier(object)),
        property: Box::new(if computed {
            literal(property)
        } else {
            identifier(property)
        }),
        computed,
        optional: false,
    }
}

/// Whether `name` can follow a `.` in a member access.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |c: char| c == '$' || c == '_' || c.is_alphabetic();
    // ZWNJ and ZWJ may continue an identifier.
    let is_part =
        |c: char| is_start(c) || c.is_alphanumeric() || matches!(c, '\u{200c}' | '\u{200d}');
    is_start(first) && chars.all(is_part)
}

/// `left = right`
pub fn assignment(left: Node, right: Node) -> Node {
    Node::AssignmentExpression {
        operator: "=".to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// `left = right;`
pub fn assignment_statement(left: Node, right: Node) -> Node {
    expression_statement(assignment(left, right))
}

pub fn expression_statement(expression: Node) -> Node {
    Node::ExpressionStatement {
        expression: Box::new(expression),
        directive: None,
    }
}

pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::CallExpression {
        callee: Box::new(callee),
        arguments,
        optional: false,
    }
}

pub fn array(elements: Vec<Node>) -> Node {
    Node::ArrayExpression {
        elements: elements.into_iter().map(Some).collect(),
    }
}

/// Anonymous `function (params) { body }`.
pub fn function_expression(params: Vec<Node>, body: Vec<Node>) -> Node {
    Node::FunctionExpression {
        id: None,
        params,
        body: Box::new(Node::BlockStatement { body }),
        generator: false,
        is_async: false,
    }
}
