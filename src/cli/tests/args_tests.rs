use clap::Parser;
use std::path::{Path, PathBuf};

use super::args::CliArgs;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["udep"]).expect("default args should parse");

    assert!(args.project.is_none());
    assert!(args.out_dir.is_none());
    assert!(args.root_dir.is_none());
    assert!(args.define_callee.is_none());
    assert!(!args.name_modules);
    assert!(!args.pretty);
    assert!(!args.dependencies);
    assert!(args.files.is_empty());
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "udep",
        "--project",
        "configs/udep.json",
        "--outDir",
        "build",
        "--rootDir",
        "src",
        "--defineCallee",
        "register",
        "--nameModules",
        "--pretty",
        "src/main.estree.json",
        "src/lib",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.project.as_deref(), Some(Path::new("configs/udep.json")));
    assert_eq!(args.out_dir.as_deref(), Some(Path::new("build")));
    assert_eq!(args.root_dir.as_deref(), Some(Path::new("src")));
    assert_eq!(args.define_callee.as_deref(), Some("register"));
    assert!(args.name_modules);
    assert!(args.pretty);
    assert_eq!(
        args.files,
        vec![
            PathBuf::from("src/main.estree.json"),
            PathBuf::from("src/lib")
        ]
    );
}

#[test]
fn accepts_kebab_case_aliases() {
    let args = CliArgs::try_parse_from([
        "udep",
        "-p",
        ".",
        "--out-dir",
        "dist",
        "--define-callee",
        "load",
        "--name-modules",
        "--dependencies",
    ])
    .expect("aliases should parse");

    assert_eq!(args.project.as_deref(), Some(Path::new(".")));
    assert_eq!(args.out_dir.as_deref(), Some(Path::new("dist")));
    assert_eq!(args.define_callee.as_deref(), Some("load"));
    assert!(args.name_modules);
    assert!(args.dependencies);
}
