//! Module Rewriter.
//!
//! Imports are bound first, as the language hoists them; the remaining
//! top-level statements are then scanned once, left to right, building the
//! new statement sequence as it goes. Each import/export statement maps to
//! zero or more replacement statements:
//!
//! | input | output |
//! |---|---|
//! | `import "x"` | (registers `x`) |
//! | `import { a } from "x"` | (free `a` becomes `__uDep0__.a`) |
//! | `export default e` | `__exports__["default"] = e;` |
//! | `export var v = e` | `__exports__.v = e;` (free `v` becomes `__exports__.v`) |
//! | `export { a as b } from "x"` | `__exports__.b = __uDep0__.a;` |
//! | `export { v as w }` | (free `v` becomes `__exports__.w`) |
//!
//! Every other statement is kept after checking that no import/export form is
//! nested inside it. Substitutions run over both the statements already
//! emitted and the ones still pending, so a binding is rewritten everywhere in
//! the module regardless of where its import appears.

use crate::dependencies::{DependencyTable, EXPORTS_PARAM, ImportedMember, dependency_param};
use crate::error::{Result, TransformError};
use crate::options::TransformOptions;
use crate::substitute::{Substitution, Target};
use crate::walk::reject_nested_module_forms;
use crate::wrapper::build_wrapper;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, debug_span};
use udep_ast::factory::{self, DEFAULT_MEMBER};
use udep_ast::{Node, Program};

/// Result of rewriting one module.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// Program whose only statement is the wrapper call.
    pub program: Program,
    /// Module specifiers in dependency-slot order (without `"exports"`).
    pub dependencies: Vec<String>,
}

/// Rewrites a module's import/export forms into a `define(...)` wrapper.
///
/// The program is consumed: on error the partially rewritten tree is dropped.
pub fn transform(program: Program, options: &TransformOptions) -> Result<TransformOutput> {
    let module = options.module_id.as_deref().unwrap_or("<anonymous>");
    let _span = debug_span!("transform_module", module).entered();

    let mut rewriter = ModuleRewriter::new(program.body);
    rewriter.run()?;

    let ModuleRewriter {
        dependencies,
        emitted,
        ..
    } = rewriter;
    let dependencies = dependencies.into_specifiers();
    let wrapper = build_wrapper(&dependencies, emitted, options);
    debug!(dependencies = dependencies.len(), "module wrapped");

    Ok(TransformOutput {
        program: Program {
            body: vec![wrapper],
            source_type: Some("script".to_string()),
        },
        dependencies,
    })
}

struct ModuleRewriter {
    dependencies: DependencyTable,
    /// Exported names, to reject duplicate exports.
    exported: FxHashSet<String>,
    emitted: Vec<Node>,
    pending: VecDeque<Node>,
}

impl ModuleRewriter {
    fn new(body: Vec<Node>) -> Self {
        Self {
            dependencies: DependencyTable::new(),
            exported: FxHashSet::default(),
            emitted: Vec::with_capacity(body.len()),
            pending: body.into(),
        }
    }

    fn run(&mut self) -> Result<()> {
        self.register_specifiers()?;

        // Imports are hoisted: every import binding is in place before any
        // export decides whether a name is local.
        let (imports, statements): (VecDeque<Node>, VecDeque<Node>) = self
            .pending
            .drain(..)
            .partition(|statement| matches!(statement, Node::ImportDeclaration { .. }));
        self.pending = statements;
        for import in imports {
            self.rewrite_statement(import)?;
        }

        while let Some(statement) = self.pending.pop_front() {
            self.rewrite_statement(statement)?;
        }
        Ok(())
    }

    /// Registers every top-level import and re-export specifier in source
    /// order, so dependency slots follow first use in the module text.
    fn register_specifiers(&mut self) -> Result<()> {
        for statement in &self.pending {
            let source = match statement {
                Node::ImportDeclaration { source, .. }
                | Node::ExportNamedDeclaration {
                    source: Some(source),
                    ..
                } => source,
                _ => continue,
            };
            self.dependencies.register(module_specifier(source)?);
        }
        Ok(())
    }

    fn rewrite_statement(&mut self, statement: Node) -> Result<()> {
        match statement {
            Node::ImportDeclaration { specifiers, source } => {
                self.rewrite_import(&specifiers, &source)
            }
            Node::ExportDefaultDeclaration { declaration } => {
                self.rewrite_export_default(*declaration)
            }
            Node::ExportNamedDeclaration {
                declaration: Some(declaration),
                ..
            } => self.rewrite_export_declaration(*declaration),
            Node::ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source: Some(source),
            } => self.rewrite_reexport(&specifiers, &source),
            Node::ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source: None,
            } => self.rewrite_export_list(specifiers),
            Node::ExportAllDeclaration { .. } => Err(TransformError::UnsupportedModuleForm {
                form: "export * from",
            }),
            statement => {
                reject_nested_module_forms(&statement)?;
                self.emitted.push(statement);
                Ok(())
            }
        }
    }

    fn rewrite_import(&mut self, specifiers: &[Node], source: &Node) -> Result<()> {
        let specifier = module_specifier(source)?;
        if specifiers.is_empty() {
            let index = self.dependencies.register(specifier);
            debug!(specifier, index, "side-effect import");
            return Ok(());
        }

        for import in specifiers {
            let (local, member) = import_binding(import)?;
            let binding = self.dependencies.bind(local, specifier, member)?;
            let target = binding.target();
            debug!(local, specifier, index = binding.dependency, "import binding");
            self.substitute(Substitution::strict(local, &target))?;
        }
        Ok(())
    }

    fn rewrite_export_default(&mut self, declaration: Node) -> Result<()> {
        self.record_export(DEFAULT_MEMBER)?;
        reject_nested_module_forms(&declaration)?;

        let local = match &declaration {
            Node::FunctionDeclaration { id: Some(id), .. }
            | Node::ClassDeclaration { id: Some(id), .. } => {
                id.as_identifier().map(str::to_string)
            }
            Node::ExpressionStatement { .. } => return Err(export_list_before_declaration()),
            _ => None,
        };
        // A named declaration keeps its local binding (and hoisting); the
        // default slot receives a snapshot of it.
        let value = match local {
            Some(name) => {
                self.emitted.push(declaration);
                factory::identifier(&name)
            }
            None => declaration.into_expression(),
        };
        self.emitted.push(factory::assignment_statement(
            factory::member(EXPORTS_PARAM, DEFAULT_MEMBER),
            value,
        ));
        debug!("export default");
        Ok(())
    }

    fn rewrite_export_declaration(&mut self, declaration: Node) -> Result<()> {
        reject_nested_module_forms(&declaration)?;

        match declaration {
            Node::VariableDeclaration { declarations, .. } => self.export_variables(declarations),
            declaration => self.export_function_or_class(declaration),
        }
    }

    /// `export var a = 1, b;` assigns each initialized declarator, then binds
    /// every declared name to its export slot.
    fn export_variables(&mut self, declarations: Vec<Node>) -> Result<()> {
        let mut names = Vec::with_capacity(declarations.len());
        for declarator in declarations {
            let Node::VariableDeclarator { id, init } = declarator else {
                continue;
            };
            let Some(name) = id.as_identifier().map(str::to_string) else {
                return Err(TransformError::UnsupportedModuleForm {
                    form: "exported destructuring declaration",
                });
            };
            if let Some(init) = init {
                self.emitted.push(factory::assignment_statement(
                    factory::member(EXPORTS_PARAM, &name),
                    *init,
                ));
            }
            names.push(name);
        }
        for name in &names {
            self.export_local(name)?;
        }
        Ok(())
    }

    fn export_function_or_class(&mut self, declaration: Node) -> Result<()> {
        let name = match &declaration {
            Node::FunctionDeclaration { id: Some(id), .. }
            | Node::ClassDeclaration { id: Some(id), .. } => id.as_identifier().map(str::to_string),
            _ => None,
        };
        // Anything else here is a declaration an earlier export list already
        // rebound into an assignment.
        let Some(name) = name else {
            return Err(export_list_before_declaration());
        };
        self.emitted.push(factory::assignment_statement(
            factory::member(EXPORTS_PARAM, &name),
            declaration.into_expression(),
        ));
        self.export_local(&name)
    }

    /// `export { a as b } from "x"`: one snapshot assignment per specifier.
    fn rewrite_reexport(&mut self, specifiers: &[Node], source: &Node) -> Result<()> {
        let specifier = module_specifier(source)?;
        let index = self.dependencies.register(specifier);
        let param = dependency_param(index);

        for export in specifiers {
            let (local, exported) = export_names(export)?;
            self.record_export(exported)?;
            self.emitted.push(factory::assignment_statement(
                factory::member(EXPORTS_PARAM, exported),
                factory::member(&param, local),
            ));
        }
        debug!(specifier, index, count = specifiers.len(), "re-export");
        Ok(())
    }

    /// `export { a as b }`.
    fn rewrite_export_list(&mut self, specifiers: Vec<Node>) -> Result<()> {
        for export in specifiers {
            let Node::ExportSpecifier { local, exported } = export else {
                return Err(TransformError::UnsupportedModuleForm {
                    form: "export specifier",
                });
            };
            let exported = exported
                .module_export_name()
                .ok_or(TransformError::UnsupportedModuleForm {
                    form: "export specifier",
                })?
                .to_string();
            self.record_export(&exported)?;

            match local.as_identifier().map(str::to_string) {
                Some(name) if !self.is_injected(&name) => {
                    let target = Target::member(EXPORTS_PARAM, exported.as_str());
                    debug!(local = name.as_str(), exported = exported.as_str(), "export binding");
                    self.substitute(Substitution::new(&name, &target))?;
                }
                // Already rewritten into a dependency access by an import.
                _ => {
                    self.emitted.push(factory::assignment_statement(
                        factory::member(EXPORTS_PARAM, &exported),
                        *local,
                    ));
                }
            }
        }
        Ok(())
    }

    fn export_local(&mut self, name: &str) -> Result<()> {
        self.record_export(name)?;
        let target = Target::member(EXPORTS_PARAM, name);
        debug!(name, "export declaration");
        self.substitute(Substitution::new(name, &target))
    }

    fn record_export(&mut self, name: &str) -> Result<()> {
        if !self.exported.insert(name.to_string()) {
            return Err(TransformError::DuplicateBinding {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn substitute(&mut self, substitution: Substitution<'_>) -> Result<()> {
        substitution.apply_all(self.emitted.iter_mut().chain(self.pending.iter_mut()))
    }

    /// Whether `name` is one of the wrapper's parameters.
    fn is_injected(&self, name: &str) -> bool {
        name == EXPORTS_PARAM || self.dependencies.is_param(name)
    }
}

fn export_list_before_declaration() -> TransformError {
    TransformError::UnsupportedModuleForm {
        form: "export list naming a function or class before its exported declaration",
    }
}

fn module_specifier(source: &Node) -> Result<&str> {
    source
        .as_string_literal()
        .ok_or(TransformError::UnsupportedModuleForm {
            form: "non-string module specifier",
        })
}

fn import_binding(specifier: &Node) -> Result<(&str, ImportedMember)> {
    let (local, member) = match specifier {
        Node::ImportSpecifier { imported, local } => {
            let imported = imported
                .module_export_name()
                .ok_or(TransformError::UnsupportedModuleForm {
                    form: "import specifier",
                })?;
            (local, ImportedMember::Named(imported.to_string()))
        }
        Node::ImportDefaultSpecifier { local } => (local, ImportedMember::default_export()),
        Node::ImportNamespaceSpecifier { local } => (local, ImportedMember::Namespace),
        _ => {
            return Err(TransformError::UnsupportedModuleForm {
                form: "import specifier",
            });
        }
    };
    let local = local
        .as_identifier()
        .ok_or(TransformError::UnsupportedModuleForm {
            form: "import specifier",
        })?;
    Ok((local, member))
}

fn export_names(specifier: &Node) -> Result<(&str, &str)> {
    let unsupported = TransformError::UnsupportedModuleForm {
        form: "export specifier",
    };
    let Node::ExportSpecifier { local, exported } = specifier else {
        return Err(unsupported);
    };
    match (local.module_export_name(), exported.module_export_name()) {
        (Some(local), Some(exported)) => Ok((local, exported)),
        _ => Err(unsupported),
    }
}
