//! ESTree node model.
//!
//! Every ESTree node kind the rewriter understands is one variant of the closed
//! [`Node`] enum. The `type` field of the JSON form is the serde tag, so the
//! output of any ESTree-producing parser deserializes directly into this model
//! and the rewritten tree serializes back into the same shape for a printer.
//!
//! Source locations (`loc`, `range`, `start`/`end`) are accepted on input and
//! dropped; synthetic nodes have no position anyway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root of an ESTree module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Program", rename_all = "camelCase")]
pub struct Program {
    pub body: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// ESTree node, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Node {
    // =========================================================================
    // Identifiers and literals
    // =========================================================================
    Identifier {
        name: String,
    },
    /// `#name` in class members, `this.#name` and `#name in obj`.
    PrivateIdentifier {
        name: String,
    },
    Literal {
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        regex: Option<Value>,
    },
    ThisExpression,
    Super,
    MetaProperty {
        meta: Box<Node>,
        property: Box<Node>,
    },

    // =========================================================================
    // Statements
    // =========================================================================
    ExpressionStatement {
        expression: Box<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        directive: Option<String>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement,
    DebuggerStatement,
    WithStatement {
        object: Box<Node>,
        body: Box<Node>,
    },
    ReturnStatement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },
    BreakStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },
    ContinueStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        #[serde(default)]
        alternate: Option<Box<Node>>,
    },
    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },
    SwitchCase {
        #[serde(default)]
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },
    ThrowStatement {
        argument: Box<Node>,
    },
    TryStatement {
        block: Box<Node>,
        #[serde(default)]
        handler: Option<Box<Node>>,
        #[serde(default)]
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        #[serde(default)]
        param: Option<Box<Node>>,
        body: Box<Node>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },
    ForStatement {
        #[serde(default)]
        init: Option<Box<Node>>,
        #[serde(default)]
        test: Option<Box<Node>>,
        #[serde(default)]
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    ForOfStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
        #[serde(default, rename = "await")]
        is_await: bool,
    },

    // =========================================================================
    // Declarations
    // =========================================================================
    FunctionDeclaration {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
        #[serde(default)]
        generator: bool,
        #[serde(default, rename = "async")]
        is_async: bool,
    },
    VariableDeclaration {
        declarations: Vec<Node>,
        kind: VariableKind,
    },
    VariableDeclarator {
        id: Box<Node>,
        #[serde(default)]
        init: Option<Box<Node>>,
    },
    ClassDeclaration {
        #[serde(default)]
        id: Option<Box<Node>>,
        #[serde(default)]
        super_class: Option<Box<Node>>,
        body: Box<Node>,
    },
    ClassBody {
        body: Vec<Node>,
    },
    MethodDefinition {
        key: Box<Node>,
        value: Box<Node>,
        kind: String,
        #[serde(default)]
        computed: bool,
        #[serde(default, rename = "static")]
        is_static: bool,
    },
    PropertyDefinition {
        key: Box<Node>,
        #[serde(default)]
        value: Option<Box<Node>>,
        #[serde(default)]
        computed: bool,
        #[serde(default, rename = "static")]
        is_static: bool,
    },
    /// `static { ... }` inside a class body.
    StaticBlock {
        body: Vec<Node>,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: String,
        #[serde(default)]
        computed: bool,
        #[serde(default)]
        method: bool,
        #[serde(default)]
        shorthand: bool,
    },
    FunctionExpression {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
        #[serde(default)]
        generator: bool,
        #[serde(default, rename = "async")]
        is_async: bool,
    },
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
        #[serde(default)]
        expression: bool,
        #[serde(default, rename = "async")]
        is_async: bool,
    },
    ClassExpression {
        #[serde(default)]
        id: Option<Box<Node>>,
        #[serde(default)]
        super_class: Option<Box<Node>>,
        body: Box<Node>,
    },
    UnaryExpression {
        operator: String,
        #[serde(default = "default_true")]
        prefix: bool,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: String,
        #[serde(default)]
        prefix: bool,
        argument: Box<Node>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    LogicalExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        #[serde(default)]
        computed: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        optional: bool,
    },
    ChainExpression {
        expression: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        #[serde(default, skip_serializing_if = "is_false")]
        optional: bool,
    },
    NewExpression {
        callee: Box<Node>,
        #[serde(default)]
        arguments: Vec<Node>,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    SpreadElement {
        argument: Box<Node>,
    },
    YieldExpression {
        #[serde(default)]
        argument: Option<Box<Node>>,
        #[serde(default)]
        delegate: bool,
    },
    AwaitExpression {
        argument: Box<Node>,
    },
    TemplateLiteral {
        quasis: Vec<Node>,
        expressions: Vec<Node>,
    },
    TemplateElement {
        value: Value,
        #[serde(default)]
        tail: bool,
    },
    TaggedTemplateExpression {
        tag: Box<Node>,
        quasi: Box<Node>,
    },
    ImportExpression {
        source: Box<Node>,
        /// Second argument of `import(source, options)`.
        #[serde(default, alias = "attributes", skip_serializing_if = "Option::is_none")]
        options: Option<Box<Node>>,
    },

    // =========================================================================
    // Patterns
    // =========================================================================
    ObjectPattern {
        properties: Vec<Node>,
    },
    ArrayPattern {
        elements: Vec<Option<Node>>,
    },
    RestElement {
        argument: Box<Node>,
    },
    AssignmentPattern {
        left: Box<Node>,
        right: Box<Node>,
    },

    // =========================================================================
    // Module forms
    // =========================================================================
    ImportDeclaration {
        #[serde(default)]
        specifiers: Vec<Node>,
        source: Box<Node>,
    },
    ImportSpecifier {
        imported: Box<Node>,
        local: Box<Node>,
    },
    ImportDefaultSpecifier {
        local: Box<Node>,
    },
    ImportNamespaceSpecifier {
        local: Box<Node>,
    },
    ExportNamedDeclaration {
        #[serde(default)]
        declaration: Option<Box<Node>>,
        #[serde(default)]
        specifiers: Vec<Node>,
        #[serde(default)]
        source: Option<Box<Node>>,
    },
    ExportSpecifier {
        local: Box<Node>,
        exported: Box<Node>,
    },
    ExportDefaultDeclaration {
        declaration: Box<Node>,
    },
    ExportAllDeclaration {
        source: Box<Node>,
        #[serde(default)]
        exported: Option<Box<Node>>,
    },
}

const fn default_true() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl Node {
    /// ESTree `type` name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Identifier { .. } => "Identifier",
            Self::PrivateIdentifier { .. } => "PrivateIdentifier",
            Self::Literal { .. } => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::Super => "Super",
            Self::MetaProperty { .. } => "MetaProperty",
            Self::ExpressionStatement { .. } => "ExpressionStatement",
            Self::BlockStatement { .. } => "BlockStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::DebuggerStatement => "DebuggerStatement",
            Self::WithStatement { .. } => "WithStatement",
            Self::ReturnStatement { .. } => "ReturnStatement",
            Self::LabeledStatement { .. } => "LabeledStatement",
            Self::BreakStatement { .. } => "BreakStatement",
            Self::ContinueStatement { .. } => "ContinueStatement",
            Self::IfStatement { .. } => "IfStatement",
            Self::SwitchStatement { .. } => "SwitchStatement",
            Self::SwitchCase { .. } => "SwitchCase",
            Self::ThrowStatement { .. } => "ThrowStatement",
            Self::TryStatement { .. } => "TryStatement",
            Self::CatchClause { .. } => "CatchClause",
            Self::WhileStatement { .. } => "WhileStatement",
            Self::DoWhileStatement { .. } => "DoWhileStatement",
            Self::ForStatement { .. } => "ForStatement",
            Self::ForInStatement { .. } => "ForInStatement",
            Self::ForOfStatement { .. } => "ForOfStatement",
            Self::FunctionDeclaration { .. } => "FunctionDeclaration",
            Self::VariableDeclaration { .. } => "VariableDeclaration",
            Self::VariableDeclarator { .. } => "VariableDeclarator",
            Self::ClassDeclaration { .. } => "ClassDeclaration",
            Self::ClassBody { .. } => "ClassBody",
            Self::MethodDefinition { .. } => "MethodDefinition",
            Self::PropertyDefinition { .. } => "PropertyDefinition",
            Self::StaticBlock { .. } => "StaticBlock",
            Self::ArrayExpression { .. } => "ArrayExpression",
            Self::ObjectExpression { .. } => "ObjectExpression",
            Self::Property { .. } => "Property",
            Self::FunctionExpression { .. } => "FunctionExpression",
            Self::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            Self::ClassExpression { .. } => "ClassExpression",
            Self::UnaryExpression { .. } => "UnaryExpression",
            Self::UpdateExpression { .. } => "UpdateExpression",
            Self::BinaryExpression { .. } => "BinaryExpression",
            Self::LogicalExpression { .. } => "LogicalExpression",
            Self::AssignmentExpression { .. } => "AssignmentExpression",
            Self::MemberExpression { .. } => "MemberExpression",
            Self::ChainExpression { .. } => "ChainExpression",
            Self::ConditionalExpression { .. } => "ConditionalExpression",
            Self::CallExpression { .. } => "CallExpression",
            Self::NewExpression { .. } => "NewExpression",
            Self::SequenceExpression { .. } => "SequenceExpression",
            Self::SpreadElement { .. } => "SpreadElement",
            Self::YieldExpression { .. } => "YieldExpression",
            Self::AwaitExpression { .. } => "AwaitExpression",
            Self::TemplateLiteral { .. } => "TemplateLiteral",
            Self::TemplateElement { .. } => "TemplateElement",
            Self::TaggedTemplateExpression { .. } => "TaggedTemplateExpression",
            Self::ImportExpression { .. } => "ImportExpression",
            Self::ObjectPattern { .. } => "ObjectPattern",
            Self::ArrayPattern { .. } => "ArrayPattern",
            Self::RestElement { .. } => "RestElement",
            Self::AssignmentPattern { .. } => "AssignmentPattern",
            Self::ImportDeclaration { .. } => "ImportDeclaration",
            Self::ImportSpecifier { .. } => "ImportSpecifier",
            Self::ImportDefaultSpecifier { .. } => "ImportDefaultSpecifier",
            Self::ImportNamespaceSpecifier { .. } => "ImportNamespaceSpecifier",
            Self::ExportNamedDeclaration { .. } => "ExportNamedDeclaration",
            Self::ExportSpecifier { .. } => "ExportSpecifier",
            Self::ExportDefaultDeclaration { .. } => "ExportDefaultDeclaration",
            Self::ExportAllDeclaration { .. } => "ExportAllDeclaration",
        }
    }

    /// Identifier name, if this node is a bare identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// Whether this node is the bare identifier `name`.
    pub fn is_identifier(&self, name: &str) -> bool {
        self.as_identifier() == Some(name)
    }

    /// String value of a string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Self::Literal {
                value: Value::String(value),
                ..
            } => Some(value),
            _ => None,
        }
    }

    /// Name carried by an import/export specifier position: an identifier or,
    /// for arbitrary module namespace names (`export { x as "a-b" }`), a string
    /// literal.
    pub fn module_export_name(&self) -> Option<&str> {
        self.as_identifier().or_else(|| self.as_string_literal())
    }

    /// Import or export statement that is only legal at module top level.
    pub const fn is_module_declaration(&self) -> bool {
        matches!(
            self,
            Self::ImportDeclaration { .. }
                | Self::ExportNamedDeclaration { .. }
                | Self::ExportDefaultDeclaration { .. }
                | Self::ExportAllDeclaration { .. }
        )
    }

    /// Converts a function or class declaration into the equivalent expression
    /// so it can sit on the right-hand side of an assignment. Any other node is
    /// returned unchanged.
    pub fn into_expression(self) -> Self {
        match self {
            Self::FunctionDeclaration {
                id,
                params,
                body,
                generator,
                is_async,
            } => Self::FunctionExpression {
                id,
                params,
                body,
                generator,
                is_async,
            },
            Self::ClassDeclaration {
                id,
                super_class,
                body,
            } => Self::ClassExpression {
                id,
                super_class,
                body,
            },
            other => other,
        }
    }
}
