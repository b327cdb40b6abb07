//! `udep.json` project file and its merge with command-line flags.
//!
//! ```json
//! {
//!     "rootDir": "src",
//!     "outDir": "build",
//!     "include": ["**/*.estree.json"],
//!     "defineCallee": "define",
//!     "nameModules": true,
//!     "pretty": false
//! }
//! ```
//!
//! Paths in the file are relative to the file's directory; paths on the
//! command line are relative to the working directory. Flags win over the file.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use udep_transform::TransformOptions;
use udep_transform::options::DEFAULT_DEFINE_CALLEE;

use crate::cli::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "udep.json";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UdepConfig {
    #[serde(default)]
    pub define_callee: Option<String>,
    #[serde(default)]
    pub name_modules: Option<bool>,
    #[serde(default)]
    pub root_dir: Option<String>,
    #[serde(default)]
    pub out_dir: Option<String>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub pretty: Option<bool>,
}

/// Settings for one run, after merging the project file and the flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub define_callee: String,
    pub name_modules: bool,
    pub root_dir: PathBuf,
    pub out_dir: Option<PathBuf>,
    /// Filter for files found by walking directory inputs.
    pub include: Option<GlobSet>,
    pub pretty: bool,
    pub dependencies_only: bool,
    /// Files and directories to process, absolute.
    pub inputs: Vec<PathBuf>,
}

impl ResolvedConfig {
    /// Options for the module with id `module_id`.
    pub fn transform_options(&self, module_id: &str) -> TransformOptions {
        TransformOptions {
            define_callee: self.define_callee.clone(),
            module_id: self.name_modules.then(|| module_id.to_string()),
        }
    }
}

pub fn parse_config(source: &str) -> Result<UdepConfig> {
    let config = serde_json::from_str(source).context("failed to parse udep.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<UdepConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project file: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid project file: {}", path.display()))
}

/// Locates the project file: `--project` (a file, or a directory holding
/// `udep.json`), else `udep.json` in the working directory if present.
pub fn find_config(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let mut path = cwd.join(project);
    if path.is_dir() {
        path.push(CONFIG_FILE_NAME);
    }
    if !path.is_file() {
        bail!("project file not found: {}", path.display());
    }
    Ok(Some(path))
}

pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = find_config(cwd, args.project.as_deref())?;
    let (config, base_dir) = match &config_path {
        Some(path) => {
            let base_dir = path
                .parent()
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
            (load_config(path)?, base_dir)
        }
        None => (UdepConfig::default(), cwd.to_path_buf()),
    };

    let root_dir = match (&args.root_dir, &config.root_dir) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => base_dir.join(dir),
        (None, None) => base_dir.clone(),
    };
    let out_dir = match (&args.out_dir, &config.out_dir) {
        (Some(dir), _) => Some(cwd.join(dir)),
        (None, Some(dir)) => Some(base_dir.join(dir)),
        (None, None) => None,
    };

    let define_callee = args
        .define_callee
        .clone()
        .or(config.define_callee)
        .unwrap_or_else(|| DEFAULT_DEFINE_CALLEE.to_string());
    if define_callee.trim().is_empty() {
        bail!("defineCallee must not be empty");
    }

    let include = config
        .include
        .as_deref()
        .map(build_include_set)
        .transpose()?;

    let inputs = if !args.files.is_empty() {
        args.files.iter().map(|file| cwd.join(file)).collect()
    } else if config_path.is_some() {
        vec![root_dir.clone()]
    } else {
        bail!("no input files: pass files or directories, or run with a {CONFIG_FILE_NAME} project");
    };

    Ok(ResolvedConfig {
        define_callee,
        name_modules: args.name_modules || config.name_modules.unwrap_or(false),
        root_dir,
        out_dir,
        include,
        pretty: args.pretty || config.pretty.unwrap_or(false),
        dependencies_only: args.dependencies,
        inputs,
    })
}

pub fn build_include_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid include pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile include patterns")
}
