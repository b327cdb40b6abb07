//! Scope-Aware Substitution Engine.
//!
//! Rewrites every *free* reference to one name into an access on a synthetic
//! object (`__uDep0__.a`, `__exports__.x`, ...). Descent stops wherever the
//! name is re-bound: a function or arrow whose parameters or body scope
//! declare it, a class static block declaring it, a named function/class
//! expression carrying it, or a catch clause binding it.
//!
//! Declarations of the name in the scope being rewritten are not shadows but
//! writes into the target slot:
//!
//! ```javascript
//! var x = 1;          // var x = (__exports__.x = 1);
//! function x() {}     // __exports__.x = function x() {};
//! ```
//!
//! In strict mode (import bindings) any assignment to the name is rejected.

use crate::error::{Result, TransformError};
use crate::scope::declares;
use tracing::trace;
use udep_ast::Node;
use udep_ast::factory;
use udep_ast::patterns::binds;

/// Replacement for a rewritten name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `object.member`, or `object["default"]` for the default member.
    Member { object: String, member: String },
    /// The bare `object` identifier (namespace imports).
    Object(String),
}

impl Target {
    pub fn member(object: impl Into<String>, member: impl Into<String>) -> Self {
        Self::Member {
            object: object.into(),
            member: member.into(),
        }
    }

    pub fn object(object: impl Into<String>) -> Self {
        Self::Object(object.into())
    }

    /// Fresh node for one occurrence of the target.
    pub fn to_node(&self) -> Node {
        match self {
            Self::Member { object, member } => factory::member(object, member),
            Self::Object(object) => factory::identifier(object),
        }
    }
}

/// One substitution pass: `name` becomes `target` wherever it is free.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    name: &'a str,
    target: &'a Target,
    strict: bool,
}

impl<'a> Substitution<'a> {
    /// Non-strict pass, used for exported bindings (which the module may
    /// reassign).
    pub const fn new(name: &'a str, target: &'a Target) -> Self {
        Self {
            name,
            target,
            strict: false,
        }
    }

    /// Strict pass, used for imported bindings: assigning to the name is an
    /// [`TransformError::IllegalReassignment`].
    pub const fn strict(name: &'a str, target: &'a Target) -> Self {
        Self {
            name,
            target,
            strict: true,
        }
    }

    pub fn apply_all<'n>(&self, nodes: impl IntoIterator<Item = &'n mut Node>) -> Result<()> {
        trace!(name = self.name, strict = self.strict, "substitution pass");
        for node in nodes {
            self.apply(node)?;
        }
        Ok(())
    }

    /// Rewrites free references in `node`, in place.
    pub fn apply(&self, node: &mut Node) -> Result<()> {
        if self.is_reference(node) {
            *node = self.target.to_node();
            return Ok(());
        }
        if self.declares_own_function(node) {
            self.rebind_function_declaration(node);
            return Ok(());
        }

        match node {
            Node::Property {
                value, shorthand, ..
            } => {
                // `{ a }` -> `{ a: __uDep0__.a }`
                if *shorthand && self.is_reference(value) {
                    *shorthand = false;
                }
            }
            Node::VariableDeclaration { declarations, .. } => {
                for declarator in declarations {
                    self.apply_declarator(declarator)?;
                }
                return Ok(());
            }
            Node::FunctionDeclaration { params, body, .. } => {
                if self.shadowed_by(params, body) {
                    return Ok(());
                }
            }
            Node::FunctionExpression {
                id, params, body, ..
            } => {
                if self.is_own_name(id.as_deref()) || self.shadowed_by(params, body) {
                    return Ok(());
                }
            }
            Node::ArrowFunctionExpression { params, body, .. } => {
                if self.shadowed_by(params, body) {
                    return Ok(());
                }
            }
            Node::ClassExpression { id, .. } => {
                if self.is_own_name(id.as_deref()) {
                    return Ok(());
                }
            }
            Node::StaticBlock { body } => {
                if body.iter().any(|statement| declares(statement, self.name)) {
                    return Ok(());
                }
            }
            Node::CatchClause { param, .. } => {
                if param.as_deref().is_some_and(|param| binds(param, self.name)) {
                    return Ok(());
                }
            }
            Node::ImportDeclaration { .. } => return Ok(()),
            Node::ExportNamedDeclaration {
                declaration: Some(declaration),
                ..
            }
            | Node::ExportDefaultDeclaration { declaration } => {
                // An import and a local declaration of the same name.
                if self.strict && exported_declaration_binds(declaration, self.name) {
                    return Err(self.duplicate());
                }
            }
            Node::AssignmentExpression { left, .. } => self.check_write(left)?,
            Node::UpdateExpression { argument, .. } => self.check_write(argument)?,
            Node::ForInStatement { left, .. } | Node::ForOfStatement { left, .. } => {
                if !matches!(**left, Node::VariableDeclaration { .. }) {
                    self.check_write(left)?;
                }
            }
            _ => {}
        }

        for child in node.children_mut() {
            self.apply(child)?;
        }
        Ok(())
    }

    fn apply_declarator(&self, declarator: &mut Node) -> Result<()> {
        let Node::VariableDeclarator { id, init } = declarator else {
            return Ok(());
        };
        if id.is_identifier(self.name) {
            // The declaration writes its initial value into the target slot.
            if let Some(value) = init.take() {
                let assignment = factory::assignment(self.target.to_node(), *value);
                *init = Some(Box::new(assignment));
            }
            return Ok(());
        }
        if binds(id, self.name) {
            return Ok(());
        }
        match init {
            Some(init) => self.apply(init),
            None => Ok(()),
        }
    }

    fn rebind_function_declaration(&self, node: &mut Node) {
        let declaration = std::mem::replace(node, Node::EmptyStatement);
        *node = factory::assignment_statement(self.target.to_node(), declaration.into_expression());
    }

    fn check_write(&self, target: &Node) -> Result<()> {
        if self.strict && binds(target, self.name) {
            return Err(TransformError::IllegalReassignment {
                name: self.name.to_string(),
            });
        }
        Ok(())
    }

    fn is_reference(&self, node: &Node) -> bool {
        node.is_identifier(self.name)
    }

    fn is_own_name(&self, id: Option<&Node>) -> bool {
        id.is_some_and(|id| id.is_identifier(self.name))
    }

    fn declares_own_function(&self, node: &Node) -> bool {
        matches!(node, Node::FunctionDeclaration { id, .. } if self.is_own_name(id.as_deref()))
    }

    fn shadowed_by(&self, params: &[Node], body: &Node) -> bool {
        params.iter().any(|param| binds(param, self.name)) || declares(body, self.name)
    }

    fn duplicate(&self) -> TransformError {
        TransformError::DuplicateBinding {
            name: self.name.to_string(),
        }
    }
}

/// Whether `export <declaration>` / `export default <declaration>` introduces
/// a local binding named `name`.
fn exported_declaration_binds(declaration: &Node, name: &str) -> bool {
    match declaration {
        Node::VariableDeclaration { declarations, .. } => {
            declarations.iter().any(|declarator| {
                matches!(declarator, Node::VariableDeclarator { id, .. } if binds(id, name))
            })
        }
        Node::FunctionDeclaration { id, .. } | Node::ClassDeclaration { id, .. } => {
            id.as_deref().is_some_and(|id| id.is_identifier(name))
        }
        _ => false,
    }
}
