//! ESTree syntax tree model for the udep module rewriter.
//!
//! The tree is produced by an external ESTree parser and consumed by an
//! external printer; this crate only models it:
//!
//! - [`node`]: the `Program` root and the closed [`Node`] enum, serde-tagged
//!   by the ESTree `type` field
//! - [`children`]: the per-variant table of child nodes in reference positions
//! - [`patterns`]: names bound by destructuring patterns
//! - [`factory`]: builders for synthetic nodes

pub mod children;
pub mod factory;
pub mod node;
pub mod patterns;

pub use children::{Children, ChildrenMut};
pub use node::{Node, Program, VariableKind};

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod node_tests;
#[cfg(test)]
#[path = "../tests/children_tests.rs"]
mod children_tests;
#[cfg(test)]
#[path = "../tests/patterns_tests.rs"]
mod patterns_tests;
#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod factory_tests;
