//! Discovers input modules and rewrites them in parallel.
//!
//! Each module is read, transformed and written independently; one module's
//! failure is reported without stopping the others.

use anyhow::{Context, Result};
use globset::GlobSet;
use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info_span};
use walkdir::WalkDir;

use crate::cli::config::{CONFIG_FILE_NAME, ResolvedConfig};
use crate::{render_program, transform_json};

const ESTREE_SUFFIX: &str = ".estree.json";
const JSON_SUFFIX: &str = ".json";
/// JSON files a project directory commonly holds that are never modules.
const MANIFEST_FILE_NAMES: &[&str] = &[
    CONFIG_FILE_NAME,
    "package.json",
    "package-lock.json",
    "tsconfig.json",
    "jsconfig.json",
];

/// A successfully rewritten module.
#[derive(Debug, Clone)]
pub struct CompiledModule {
    pub module_id: String,
    pub dependencies: Vec<String>,
    /// Rendered program, kept when there is no output directory to write to.
    pub rendered: Option<String>,
    /// Where the program was written, with an output directory.
    pub written: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ModuleOutcome {
    pub input: PathBuf,
    pub result: Result<CompiledModule>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// One outcome per input module, in discovery order.
    pub modules: Vec<ModuleOutcome>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.modules
            .iter()
            .filter(|module| module.result.is_err())
            .count()
    }

    pub fn succeeded(&self) -> usize {
        self.modules.len() - self.failed()
    }
}

/// Rewrites every module named by `config.inputs`.
pub fn run(config: &ResolvedConfig) -> Result<RunSummary> {
    let files = discover_inputs(
        &config.inputs,
        config.include.as_ref(),
        &config.root_dir,
        config.out_dir.as_deref(),
    )?;
    debug!(count = files.len(), "discovered modules");

    let modules = files
        .into_par_iter()
        .map(|input| {
            let result = compile_module(&input, config);
            ModuleOutcome { input, result }
        })
        .collect();
    Ok(RunSummary { modules })
}

fn compile_module(input: &Path, config: &ResolvedConfig) -> Result<CompiledModule> {
    let module_id = module_id(input, &config.root_dir);
    let _span = info_span!("module", id = module_id.as_str()).entered();

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let output = transform_json(&source, &config.transform_options(&module_id))?;

    let mut module = CompiledModule {
        module_id,
        dependencies: output.dependencies,
        rendered: None,
        written: None,
    };
    if config.dependencies_only {
        return Ok(module);
    }

    let rendered = render_program(&output.program, config.pretty)?;
    match &config.out_dir {
        Some(out_dir) => {
            let path = output_path(input, &config.root_dir, out_dir);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote module");
            module.written = Some(path);
        }
        None => module.rendered = Some(rendered),
    }
    Ok(module)
}

/// Expands directory inputs into the ESTree files below them.
///
/// Files named explicitly are kept as given; files found by walking a
/// directory must look like ESTree JSON and match `include`, when set,
/// relative to `root_dir`. Manifests such as the project file are never
/// inputs, and walks skip `out_dir` so earlier output is not read back.
pub fn discover_inputs(
    inputs: &[PathBuf],
    include: Option<&GlobSet>,
    root_dir: &Path,
    out_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            if !input.is_file() {
                anyhow::bail!("input not found: {}", input.display());
            }
            files.push(input.clone());
            continue;
        }

        let walker = WalkDir::new(input)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| out_dir.is_none_or(|out_dir| entry.path() != out_dir));
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_estree_file(path) {
                continue;
            }
            if let Some(include) = include {
                let relative = path.strip_prefix(root_dir).unwrap_or(path);
                if !include.is_match(relative) {
                    continue;
                }
            }
            files.push(path.to_path_buf());
        }
    }
    files.dedup();
    Ok(files)
}

/// Whether a file found by directory discovery is an ESTree module.
pub fn is_estree_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(JSON_SUFFIX) && !MANIFEST_FILE_NAMES.contains(&name)
}

/// Module id: the path relative to `root_dir`, `/`-separated, without the
/// `.estree.json`/`.json` suffix.
pub fn module_id(path: &Path, root_dir: &Path) -> String {
    let relative = path.strip_prefix(root_dir).unwrap_or(path);
    let joined = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    joined
        .strip_suffix(ESTREE_SUFFIX)
        .or_else(|| joined.strip_suffix(JSON_SUFFIX))
        .unwrap_or(&joined)
        .to_string()
}

/// Output location of `input`: its path under `root_dir`, re-rooted at
/// `out_dir`. Inputs outside `root_dir` land directly in `out_dir`.
pub fn output_path(input: &Path, root_dir: &Path, out_dir: &Path) -> PathBuf {
    match input.strip_prefix(root_dir) {
        Ok(relative) => out_dir.join(relative),
        Err(_) => out_dir.join(input.file_name().unwrap_or(input.as_os_str())),
    }
}
