//! Per-variant child table.
//!
//! [`Node::children`] and [`Node::children_mut`] list the child nodes that sit
//! in *reference positions*: places where an identifier names a variable.
//! Labels, dot-form member properties, non-computed keys, import specifiers,
//! declaration names and the specifiers of `export ... from` are names rather
//! than references and are never listed. Binding patterns (parameters, catch
//! parameters) are listed because their default values are references.
//!
//! Both accessors share one match so the shared and mutable tables cannot
//! drift apart; adding a `Node` variant is a compile error until it has a row.

use crate::node::Node;
use smallvec::SmallVec;

pub type Children<'a> = SmallVec<[&'a Node; 4]>;
pub type ChildrenMut<'a> = SmallVec<[&'a mut Node; 4]>;

macro_rules! child_table {
    ($node:expr, $out:ident) => {
        match $node {
            Node::Identifier { .. }
            | Node::PrivateIdentifier { .. }
            | Node::Literal { .. }
            | Node::ThisExpression
            | Node::Super
            | Node::MetaProperty { .. }
            | Node::EmptyStatement
            | Node::DebuggerStatement
            | Node::BreakStatement { .. }
            | Node::ContinueStatement { .. }
            | Node::TemplateElement { .. }
            | Node::ImportDeclaration { .. }
            | Node::ImportSpecifier { .. }
            | Node::ImportDefaultSpecifier { .. }
            | Node::ImportNamespaceSpecifier { .. }
            | Node::ExportAllDeclaration { .. } => {}

            Node::ExpressionStatement { expression, .. }
            | Node::ChainExpression { expression } => $out.push(expression),
            Node::BlockStatement { body }
            | Node::ClassBody { body }
            | Node::StaticBlock { body } => $out.extend(body),
            Node::WithStatement { object, body } => {
                $out.push(object);
                $out.push(body);
            }
            Node::ReturnStatement { argument } | Node::YieldExpression { argument, .. } => {
                if let Some(argument) = argument {
                    $out.push(argument);
                }
            }
            Node::LabeledStatement { body, .. } => $out.push(body),
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                $out.push(test);
                $out.push(consequent);
                if let Some(alternate) = alternate {
                    $out.push(alternate);
                }
            }
            Node::SwitchStatement {
                discriminant,
                cases,
            } => {
                $out.push(discriminant);
                $out.extend(cases);
            }
            Node::SwitchCase { test, consequent } => {
                if let Some(test) = test {
                    $out.push(test);
                }
                $out.extend(consequent);
            }
            Node::ThrowStatement { argument }
            | Node::SpreadElement { argument }
            | Node::AwaitExpression { argument }
            | Node::RestElement { argument }
            | Node::UnaryExpression { argument, .. }
            | Node::UpdateExpression { argument, .. } => $out.push(argument),
            Node::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                $out.push(block);
                if let Some(handler) = handler {
                    $out.push(handler);
                }
                if let Some(finalizer) = finalizer {
                    $out.push(finalizer);
                }
            }
            Node::CatchClause { param, body } => {
                if let Some(param) = param {
                    $out.push(param);
                }
                $out.push(body);
            }
            Node::WhileStatement { test, body } | Node::DoWhileStatement { body, test } => {
                $out.push(test);
                $out.push(body);
            }
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                for part in [init, test, update] {
                    if let Some(part) = part {
                        $out.push(part);
                    }
                }
                $out.push(body);
            }
            Node::ForInStatement { left, right, body }
            | Node::ForOfStatement {
                left, right, body, ..
            } => {
                $out.push(left);
                $out.push(right);
                $out.push(body);
            }
            Node::FunctionDeclaration { params, body, .. }
            | Node::FunctionExpression { params, body, .. }
            | Node::ArrowFunctionExpression { params, body, .. } => {
                $out.extend(params);
                $out.push(body);
            }
            Node::VariableDeclaration { declarations, .. } => $out.extend(declarations),
            Node::VariableDeclarator { init, .. } => {
                if let Some(init) = init {
                    $out.push(init);
                }
            }
            Node::ClassDeclaration {
                super_class, body, ..
            }
            | Node::ClassExpression {
                super_class, body, ..
            } => {
                if let Some(super_class) = super_class {
                    $out.push(super_class);
                }
                $out.push(body);
            }
            Node::MethodDefinition {
                key,
                value,
                computed,
                ..
            }
            | Node::Property {
                key,
                value,
                computed,
                ..
            } => {
                if *computed {
                    $out.push(key);
                }
                $out.push(value);
            }
            Node::PropertyDefinition {
                key,
                value,
                computed,
                ..
            } => {
                if *computed {
                    $out.push(key);
                }
                if let Some(value) = value {
                    $out.push(value);
                }
            }
            Node::ArrayExpression { elements } | Node::ArrayPattern { elements } => {
                $out.extend(elements.into_iter().flatten());
            }
            Node::ObjectExpression { properties } | Node::ObjectPattern { properties } => {
                $out.extend(properties);
            }
            Node::BinaryExpression { left, right, .. }
            | Node::LogicalExpression { left, right, .. }
            | Node::AssignmentExpression { left, right, .. }
            | Node::AssignmentPattern { left, right } => {
                $out.push(left);
                $out.push(right);
            }
            Node::MemberExpression {
                object,
                property,
                computed,
                ..
            } => {
                $out.push(object);
                if *computed {
                    $out.push(property);
                }
            }
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                $out.push(test);
                $out.push(consequent);
                $out.push(alternate);
            }
            Node::CallExpression {
                callee, arguments, ..
            }
            | Node::NewExpression { callee, arguments } => {
                $out.push(callee);
                $out.extend(arguments);
            }
            Node::SequenceExpression { expressions } => $out.extend(expressions),
            Node::TemplateLiteral { quasis, expressions } => {
                $out.extend(quasis);
                $out.extend(expressions);
            }
            Node::TaggedTemplateExpression { tag, quasi } => {
                $out.push(tag);
                $out.push(quasi);
            }
            Node::ImportExpression { source, options } => {
                $out.push(source);
                if let Some(options) = options {
                    $out.push(options);
                }
            }
            Node::ExportNamedDeclaration {
                declaration,
                specifiers,
                source,
            } => {
                if let Some(declaration) = declaration {
                    $out.push(declaration);
                }
                // `export { a } from "m"` names bindings of another module.
                if source.is_none() {
                    $out.extend(specifiers);
                }
            }
            Node::ExportSpecifier { local, .. } => $out.push(local),
            Node::ExportDefaultDeclaration { declaration } => $out.push(declaration),
        }
    };
}

impl Node {
    /// Child nodes in reference positions, in source order.
    pub fn children(&self) -> Children<'_> {
        let mut out = Children::new();
        child_table!(self, out);
        out
    }

    /// Mutable child nodes in reference positions, in source order.
    pub fn children_mut(&mut self) -> ChildrenMut<'_> {
        let mut out = ChildrenMut::new();
        child_table!(self, out);
        out
    }
}
