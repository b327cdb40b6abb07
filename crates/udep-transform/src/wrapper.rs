//! Wrapper Builder.
//!
//! ```javascript
//! define(["./a", "./b", "exports"], function (__uDep0__, __uDep1__, __exports__) {
//!     ...body...
//! });
//! ```

use crate::dependencies::{EXPORTS_DEPENDENCY, EXPORTS_PARAM, dependency_param};
use crate::options::TransformOptions;
use udep_ast::Node;
use udep_ast::factory::{array, call, expression_statement, function_expression, identifier, literal};

/// Builds the single top-level registration call for a module.
pub fn build_wrapper<S: AsRef<str>>(
    dependencies: &[S],
    body: Vec<Node>,
    options: &TransformOptions,
) -> Node {
    let names = dependencies
        .iter()
        .map(|dependency| literal(dependency.as_ref()))
        .chain(std::iter::once(literal(EXPORTS_DEPENDENCY)))
        .collect();
    let params = (0..dependencies.len())
        .map(|index| identifier(&dependency_param(index)))
        .chain(std::iter::once(identifier(EXPORTS_PARAM)))
        .collect();

    let mut arguments = Vec::with_capacity(3);
    if let Some(module_id) = &options.module_id {
        arguments.push(literal(module_id));
    }
    arguments.push(array(names));
    arguments.push(function_expression(params, body));

    expression_statement(call(identifier(&options.define_callee), arguments))
}
