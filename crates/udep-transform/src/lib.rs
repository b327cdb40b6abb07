//! Rewrites ES module `import`/`export` forms into a single dependency-injection
//! registration call:
//!
//! ```javascript
//! import { a } from "./m";
//! export function f() { return a; }
//! ```
//!
//! becomes
//!
//! ```javascript
//! define(["./m", "exports"], function (__uDep0__, __exports__) {
//!     __exports__.f = function f() { return __uDep0__.a; };
//! });
//! ```
//!
//! Components, leaves first:
//!
//! - [`scope`]: names declared directly in a scope body
//! - [`walk`]: depth-first descendant walk, used to reject nested module forms
//! - [`substitute`]: scope-aware free-reference rewriting
//! - [`dependencies`]: specifier table and import bindings
//! - [`rewriter`]: the top-level pass
//! - [`wrapper`]: the `define(...)` call

pub mod dependencies;
pub mod error;
pub mod options;
pub mod rewriter;
pub mod scope;
pub mod substitute;
pub mod walk;
pub mod wrapper;

pub use dependencies::{DependencyTable, EXPORTS_DEPENDENCY, EXPORTS_PARAM, dependency_param};
pub use error::{Result, TransformError};
pub use options::TransformOptions;
pub use rewriter::{TransformOutput, transform};
pub use substitute::{Substitution, Target};

#[cfg(test)]
#[path = "../tests/test_utils.rs"]
mod test_utils;
#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod scope_tests;
#[cfg(test)]
#[path = "../tests/walk_tests.rs"]
mod walk_tests;
#[cfg(test)]
#[path = "../tests/substitute_tests.rs"]
mod substitute_tests;
#[cfg(test)]
#[path = "../tests/dependencies_tests.rs"]
mod dependencies_tests;
#[cfg(test)]
#[path = "../tests/wrapper_tests.rs"]
mod wrapper_tests;
#[cfg(test)]
#[path = "../tests/rewriter_tests.rs"]
mod rewriter_tests;
