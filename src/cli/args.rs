use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the udep binary.
#[derive(Parser, Debug)]
#[command(
    name = "udep",
    version,
    about = "Rewrite ES module syntax trees into define() dependency-injection wrappers"
)]
pub struct CliArgs {
    /// Path to udep.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Write rewritten modules here, mirroring their layout under rootDir.
    /// Without it the rewritten programs are printed to stdout.
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Root that module ids and output paths are computed from.
    #[arg(long = "rootDir", alias = "root-dir")]
    pub root_dir: Option<PathBuf>,

    /// Name of the registration function the wrapper calls.
    #[arg(long = "defineCallee", alias = "define-callee")]
    pub define_callee: Option<String>,

    /// Pass each module's id as the first wrapper argument.
    #[arg(long = "nameModules", alias = "name-modules")]
    pub name_modules: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Only print each module's dependency list.
    #[arg(long)]
    pub dependencies: bool,

    /// ESTree JSON files or directories to rewrite.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
