//! ESTree fixture builders shared by the transform tests.
//!
//! Fixtures are written as the JSON an ESTree parser would produce and then
//! deserialized, so tests exercise the same shapes real input has.

#![allow(dead_code)]

use serde_json::{Value, json};
use udep_ast::factory::is_identifier_name;
use udep_ast::{Node, Program};

pub fn node(value: Value) -> Node {
    serde_json::from_value(value).expect("valid ESTree node")
}

pub fn program(body: Vec<Value>) -> Program {
    serde_json::from_value(json!({
        "type": "Program",
        "sourceType": "module",
        "body": body
    }))
    .expect("valid ESTree program")
}

pub fn to_json(node: &Node) -> Value {
    serde_json::to_value(node).expect("serializable node")
}

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("{value:?}") })
}

pub fn number(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn member(object: Value, property: &str) -> Value {
    json!({
        "type": "MemberExpression",
        "computed": false,
        "object": object,
        "property": ident(property)
    })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

pub fn assign(left: Value, right: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": "=", "left": left, "right": right })
}

pub fn update(argument: Value) -> Value {
    json!({ "type": "UpdateExpression", "operator": "++", "prefix": false, "argument": argument })
}

pub fn expr(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn ret(argument: Value) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

pub fn var(name: &str, init: Option<Value>) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": ident(name),
            "init": init
        }]
    })
}

pub fn function(name: Option<&str>, params: &[&str], body: Vec<Value>) -> Value {
    json!({
        "type": "FunctionDeclaration",
        "id": name.map(ident),
        "params": params.iter().map(|param| ident(param)).collect::<Vec<_>>(),
        "body": block(body),
        "generator": false,
        "async": false
    })
}

pub fn function_expr(name: Option<&str>, params: &[&str], body: Vec<Value>) -> Value {
    let mut value = function(name, params, body);
    value["type"] = json!("FunctionExpression");
    value
}

pub fn arrow(params: &[&str], body: Value) -> Value {
    let expression = body["type"] != "BlockStatement";
    json!({
        "type": "ArrowFunctionExpression",
        "params": params.iter().map(|param| ident(param)).collect::<Vec<_>>(),
        "body": body,
        "expression": expression
    })
}

pub fn try_catch(param: &str, handler: Vec<Value>) -> Value {
    json!({
        "type": "TryStatement",
        "block": block(vec![]),
        "handler": {
            "type": "CatchClause",
            "param": ident(param),
            "body": block(handler)
        },
        "finalizer": null
    })
}

pub fn import_named(names: &[(&str, &str)], source: &str) -> Value {
    let specifiers: Vec<Value> = names
        .iter()
        .map(|(imported, local)| {
            json!({ "type": "ImportSpecifier", "imported": ident(imported), "local": ident(local) })
        })
        .collect();
    json!({ "type": "ImportDeclaration", "specifiers": specifiers, "source": string(source) })
}

pub fn import_default(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportDefaultSpecifier", "local": ident(local) }],
        "source": string(source)
    })
}

pub fn import_namespace(local: &str, source: &str) -> Value {
    json!({
        "type": "ImportDeclaration",
        "specifiers": [{ "type": "ImportNamespaceSpecifier", "local": ident(local) }],
        "source": string(source)
    })
}

pub fn import_bare(source: &str) -> Value {
    json!({ "type": "ImportDeclaration", "specifiers": [], "source": string(source) })
}

pub fn export_declaration(declaration: Value) -> Value {
    json!({
        "type": "ExportNamedDeclaration",
        "declaration": declaration,
        "specifiers": [],
        "source": null
    })
}

pub fn export_list(names: &[(&str, &str)], source: Option<&str>) -> Value {
    let specifiers: Vec<Value> = names
        .iter()
        .map(|(local, exported)| {
            json!({ "type": "ExportSpecifier", "local": ident(local), "exported": ident(exported) })
        })
        .collect();
    json!({
        "type": "ExportNamedDeclaration",
        "declaration": null,
        "specifiers": specifiers,
        "source": source.map(string)
    })
}

pub fn export_default(declaration: Value) -> Value {
    json!({ "type": "ExportDefaultDeclaration", "declaration": declaration })
}

/// Expected JSON of the synthetic `object.property` access.
pub fn access(object: &str, property: &str) -> Value {
    if property == "default" || !is_identifier_name(property) {
        json!({
            "type": "MemberExpression",
            "object": ident(object),
            "property": { "type": "Literal", "value": property, "raw": format!("{property:?}") },
            "computed": true
        })
    } else {
        json!({
            "type": "MemberExpression",
            "object": ident(object),
            "property": ident(property),
            "computed": false
        })
    }
}

/// Names of every `Identifier` node in a JSON tree, in document order.
pub fn identifier_names(value: &Value) -> Vec<String> {
    let mut names = Vec::new();
    collect_identifier_names(value, &mut names);
    names
}

fn collect_identifier_names(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("Identifier") {
                if let Some(name) = map.get("name").and_then(Value::as_str) {
                    names.push(name.to_string());
                }
            }
            for child in map.values() {
                collect_identifier_names(child, names);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_identifier_names(item, names);
            }
        }
        _ => {}
    }
}

/// Number of `Identifier` nodes named `name`.
pub fn count_identifier(value: &Value, name: &str) -> usize {
    identifier_names(value)
        .iter()
        .filter(|found| found.as_str() == name)
        .count()
}

/// `class <id> { static { ...body } }`.
pub fn class_with_static_block(id: &str, body: Vec<Value>) -> Value {
    json!({
        "type": "ClassDeclaration",
        "id": ident(id),
        "superClass": null,
        "body": {
            "type": "ClassBody",
            "body": [{ "type": "StaticBlock", "body": body }]
        }
    })
}
