//! Dependency Table.
//!
//! Module specifiers in first-use order plus the local names bound by
//! imports. Dependency `i` is injected as the parameter `__uDep<i>__`.

use crate::error::{Result, TransformError};
use crate::substitute::Target;
use indexmap::{IndexMap, IndexSet};
use udep_ast::factory::DEFAULT_MEMBER;

/// Parameter that receives the exports object.
pub const EXPORTS_PARAM: &str = "__exports__";

/// Dependency name that asks the loader for the exports object.
pub const EXPORTS_DEPENDENCY: &str = "exports";

/// Parameter name for dependency `index`.
pub fn dependency_param(index: usize) -> String {
    format!("__uDep{index}__")
}

/// What an import binding refers to in its dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedMember {
    /// A named export; `"default"` for default imports.
    Named(String),
    /// The whole module object (`import * as ns`).
    Namespace,
}

impl ImportedMember {
    pub fn default_export() -> Self {
        Self::Named(DEFAULT_MEMBER.to_string())
    }
}

/// A local name bound by an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub local: String,
    pub dependency: usize,
    pub member: ImportedMember,
}

impl Binding {
    /// Replacement for free references to the local name.
    pub fn target(&self) -> Target {
        let param = dependency_param(self.dependency);
        match &self.member {
            ImportedMember::Named(member) => Target::member(param, member.as_str()),
            ImportedMember::Namespace => Target::object(param),
        }
    }
}

#[derive(Debug, Default)]
pub struct DependencyTable {
    specifiers: IndexSet<String>,
    bindings: IndexMap<String, Binding>,
}

impl DependencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `specifier` (once) and returns its dependency index.
    pub fn register(&mut self, specifier: &str) -> usize {
        if let Some(index) = self.specifiers.get_index_of(specifier) {
            return index;
        }
        self.specifiers.insert_full(specifier.to_string()).0
    }

    /// Binds `local` to `member` of `specifier`, registering the specifier.
    pub fn bind(&mut self, local: &str, specifier: &str, member: ImportedMember) -> Result<&Binding> {
        if self.bindings.contains_key(local) {
            return Err(TransformError::DuplicateBinding {
                name: local.to_string(),
            });
        }
        let dependency = self.register(specifier);
        let binding = Binding {
            local: local.to_string(),
            dependency,
            member,
        };
        let (index, _) = self.bindings.insert_full(local.to_string(), binding);
        Ok(&self.bindings[index])
    }

    /// Whether `name` is the parameter of a registered dependency.
    pub fn is_param(&self, name: &str) -> bool {
        name.strip_prefix("__uDep")
            .and_then(|rest| rest.strip_suffix("__"))
            .and_then(|index| index.parse::<usize>().ok())
            .is_some_and(|index| index < self.specifiers.len() && dependency_param(index) == name)
    }

    pub fn into_specifiers(self) -> Vec<String> {
        self.specifiers.into_iter().collect()
    }
}
