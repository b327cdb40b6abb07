//! Scope Declaration Collector.
//!
//! A deliberately shallow model of lexical scope: the names a scope body
//! declares are its `var`/`let`/`const` declarators and the names of nested
//! function and class declarations. Descent stops at declarations, functions
//! and class static blocks, so a single scan answers "is this name
//! re-declared in this scope?" without walking nested scopes.

use udep_ast::Node;
use udep_ast::patterns::collect_bound_names;

/// Names declared directly in the scope rooted at `node`.
pub fn scope_declarations(node: &Node) -> Vec<&str> {
    let mut names = Vec::new();
    collect(node, &mut names);
    names
}

/// Whether the scope rooted at `node` declares `name`.
pub fn declares(node: &Node, name: &str) -> bool {
    scope_declarations(node).contains(&name)
}

fn collect<'a>(node: &'a Node, names: &mut Vec<&'a str>) {
    match node {
        Node::VariableDeclaration { declarations, .. } => {
            for declarator in declarations {
                if let Node::VariableDeclarator { id, .. } = declarator {
                    collect_bound_names(id, names);
                }
            }
        }
        Node::FunctionDeclaration { id, .. } | Node::ClassDeclaration { id, .. } => {
            if let Some(name) = id.as_deref().and_then(Node::as_identifier) {
                names.push(name);
            }
        }
        Node::FunctionExpression { .. }
        | Node::ArrowFunctionExpression { .. }
        | Node::ClassExpression { .. }
        | Node::StaticBlock { .. } => {}
        _ => {
            for child in node.children() {
                collect(child, names);
            }
        }
    }
}
