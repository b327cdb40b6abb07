//! udep: rewrites ES module syntax trees into dependency-injection wrappers.
//!
//! The input is an ESTree `Program` (the JSON any ESTree parser produces). Its
//! `import`/`export` forms are removed and the module body is wrapped in one
//! `define([...deps, "exports"], function (__uDep0__, ..., __exports__) {...})`
//! call; the output is again an ESTree `Program`, ready for any printer.
//!
//! The tree model lives in [`udep_ast`] and the rewrite itself in
//! [`udep_transform`]; this crate adds the JSON facade, the CLI driver and
//! tracing setup.

use anyhow::{Context, Result};

pub mod cli;
pub mod tracing_config;

pub use udep_ast::{Node, Program};
pub use udep_transform::{
    TransformError, TransformOptions, TransformOutput, transform as transform_program,
};

/// Parses an ESTree `Program` from JSON text.
pub fn parse_program(source: &str) -> Result<Program> {
    serde_json::from_str(source).context("input is not an ESTree Program")
}

/// Parses, rewrites and returns the wrapped module.
///
/// A [`TransformError`] is returned as-is inside the `anyhow::Error`, so
/// callers can `downcast_ref::<TransformError>()` it.
pub fn transform_json(source: &str, options: &TransformOptions) -> Result<TransformOutput> {
    let program = parse_program(source)?;
    Ok(transform_program(program, options)?)
}

/// Serializes a program back to ESTree JSON.
pub fn render_program(program: &Program, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(program)
    } else {
        serde_json::to_string(program)
    };
    rendered.context("failed to serialize program")
}

#[cfg(test)]
#[path = "tests/transform_api_tests.rs"]
mod transform_api_tests;
