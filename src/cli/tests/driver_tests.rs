use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::config::{ResolvedConfig, build_include_set};
use super::driver::{discover_inputs, is_estree_file, module_id, output_path, run};
use crate::TransformError;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create test directory");
    }
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn config(root_dir: &Path, inputs: Vec<PathBuf>) -> ResolvedConfig {
    ResolvedConfig {
        define_callee: "define".to_string(),
        name_modules: false,
        root_dir: root_dir.to_path_buf(),
        out_dir: None,
        include: None,
        pretty: false,
        dependencies_only: false,
        inputs,
    }
}

/// `import { value } from "<source>"; export default value;`
fn importing_module(source: &str) -> String {
    json!({
        "type": "Program",
        "sourceType": "module",
        "body": [
            {
                "type": "ImportDeclaration",
                "specifiers": [{
                    "type": "ImportSpecifier",
                    "imported": { "type": "Identifier", "name": "value" },
                    "local": { "type": "Identifier", "name": "value" }
                }],
                "source": { "type": "Literal", "value": source }
            },
            {
                "type": "ExportDefaultDeclaration",
                "declaration": { "type": "Identifier", "name": "value" }
            }
        ]
    })
    .to_string()
}

/// A module that assigns to its own import.
fn broken_module() -> String {
    json!({
        "type": "Program",
        "body": [
            {
                "type": "ImportDeclaration",
                "specifiers": [{
                    "type": "ImportDefaultSpecifier",
                    "local": { "type": "Identifier", "name": "value" }
                }],
                "source": { "type": "Literal", "value": "./x" }
            },
            {
                "type": "ExpressionStatement",
                "expression": {
                    "type": "UpdateExpression",
                    "operator": "++",
                    "prefix": true,
                    "argument": { "type": "Identifier", "name": "value" }
                }
            }
        ]
    })
    .to_string()
}

#[test]
fn module_ids_are_relative_and_suffixless() {
    let root = Path::new("/project/src");
    assert_eq!(module_id(&root.join("main.json"), root), "main");
    assert_eq!(module_id(&root.join("lib/util.estree.json"), root), "lib/util");
    assert_eq!(module_id(Path::new("/elsewhere/x.json"), root), "elsewhere/x");
}

#[test]
fn output_paths_mirror_the_root() {
    let root = Path::new("/project/src");
    let out = Path::new("/project/build");
    assert_eq!(
        output_path(&root.join("lib/util.json"), root, out),
        out.join("lib/util.json")
    );
    assert_eq!(
        output_path(Path::new("/elsewhere/x.json"), root, out),
        out.join("x.json")
    );
}

#[test]
fn recognises_estree_files() {
    assert!(is_estree_file(Path::new("src/main.json")));
    assert!(is_estree_file(Path::new("src/main.estree.json")));
    assert!(!is_estree_file(Path::new("src/main.js")));
    assert!(!is_estree_file(Path::new("src/udep.json")));
    assert!(!is_estree_file(Path::new("package.json")));
    assert!(!is_estree_file(Path::new("src/tsconfig.json")));
}

#[test]
fn discovers_directory_inputs_in_name_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(root, "b.json", "{}");
    write_file(root, "a.estree.json", "{}");
    write_file(root, "nested/c.json", "{}");
    write_file(root, "notes.txt", "");
    write_file(root, "udep.json", "{}");
    write_file(root, "package.json", "{}");

    let files = discover_inputs(&[root.to_path_buf()], None, root, None).unwrap();
    assert_eq!(
        files,
        vec![
            root.join("a.estree.json"),
            root.join("b.json"),
            root.join("nested/c.json"),
        ]
    );
}

#[test]
fn include_filters_walked_files_only() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(root, "lib/a.json", "{}");
    let explicit = write_file(root, "test/b.json", "{}");

    let include = build_include_set(&["lib/**".to_string()]).unwrap();
    let files = discover_inputs(&[root.to_path_buf(), explicit.clone()], Some(&include), root, None)
        .unwrap();
    assert_eq!(files, vec![root.join("lib/a.json"), explicit]);
}

#[test]
fn walks_skip_the_output_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let out = root.join("build");
    write_file(root, "main.json", "{}");
    write_file(&out, "main.json", "{}");

    let files = discover_inputs(&[root.to_path_buf()], None, root, Some(&out)).unwrap();
    assert_eq!(files, vec![root.join("main.json")]);
}

#[test]
fn second_run_does_not_rewrite_its_own_output() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(root, "main.json", &importing_module("./dep"));

    let mut config = config(root, vec![root.to_path_buf()]);
    config.out_dir = Some(root.join("build"));

    assert_eq!(run(&config).unwrap().modules.len(), 1);
    let second = run(&config).unwrap();
    assert_eq!(second.modules.len(), 1);
    assert_eq!(second.failed(), 0);
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let err = discover_inputs(&[missing], None, dir.path(), None).unwrap_err();
    assert!(err.to_string().starts_with("input not found"));
}

#[test]
fn renders_to_memory_without_out_dir() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "main.json", &importing_module("./dep"));

    let summary = run(&config(dir.path(), vec![input])).unwrap();
    assert_eq!(summary.failed(), 0);

    let compiled = summary.modules[0].result.as_ref().unwrap();
    assert_eq!(compiled.module_id, "main");
    assert_eq!(compiled.dependencies, vec!["./dep"]);
    assert!(compiled.written.is_none());

    let program: Value = serde_json::from_str(compiled.rendered.as_deref().unwrap()).unwrap();
    let call = &program["body"][0]["expression"];
    assert_eq!(call["callee"]["name"], "define");
    assert_eq!(call["arguments"][0]["elements"][0]["value"], "./dep");
}

#[test]
fn writes_named_modules_under_out_dir() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("build");
    write_file(&src, "lib/util.estree.json", &importing_module("./base"));

    let mut config = config(&src, vec![src.clone()]);
    config.out_dir = Some(out.clone());
    config.name_modules = true;
    config.define_callee = "register".to_string();

    let summary = run(&config).unwrap();
    let compiled = summary.modules[0].result.as_ref().unwrap();
    let written = out.join("lib/util.estree.json");
    assert_eq!(compiled.written.as_deref(), Some(written.as_path()));
    assert!(compiled.rendered.is_none());

    let program: Value =
        serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
    let call = &program["body"][0]["expression"];
    assert_eq!(call["callee"]["name"], "register");
    assert_eq!(call["arguments"][0]["value"], "lib/util");
}

#[test]
fn one_failure_does_not_stop_the_others() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(root, "a.json", &importing_module("./dep"));
    write_file(root, "b.json", &broken_module());
    write_file(root, "c.json", "not json");

    let summary = run(&config(root, vec![root.to_path_buf()])).unwrap();
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 2);

    let broken = summary.modules[1].result.as_ref().unwrap_err();
    assert_eq!(
        broken.downcast_ref::<TransformError>(),
        Some(&TransformError::IllegalReassignment {
            name: "value".to_string()
        })
    );
    let unparsable = summary.modules[2].result.as_ref().unwrap_err();
    assert_eq!(unparsable.to_string(), "input is not an ESTree Program");
}

#[test]
fn dependencies_only_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let out = root.join("build");
    let input = write_file(root, "main.json", &importing_module("./dep"));

    let mut config = config(root, vec![input]);
    config.out_dir = Some(out.clone());
    config.dependencies_only = true;

    let summary = run(&config).unwrap();
    let compiled = summary.modules[0].result.as_ref().unwrap();
    assert_eq!(compiled.dependencies, vec!["./dep"]);
    assert!(compiled.rendered.is_none());
    assert!(!out.exists());
}
