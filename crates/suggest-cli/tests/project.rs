use super::*;
use crate::config::SuggestConfig;
use std::fs;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create directory");
    }
    fs::write(path, "").expect("write file");
}

#[test]
fn test_discover_source_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    for file in [
        "src/main.ts",
        "src/styles/app.css",
        "src/README.md",
        "dist/main.js",
        "node_modules/dep/index.js",
        ".cache/tmp.ts",
    ] {
        touch(dir.path(), file);
    }

    let root = project_root(dir.path()).expect("root resolves");
    let config = SuggestConfig {
        exclude: vec!["dist/**".to_string()],
        ..SuggestConfig::default()
    }
    .resolve()
    .expect("config resolves");

    let files: Vec<String> = discover_source_files(&root, &config)
        .into_iter()
        .map(|file| relative_path(&root, &file))
        .collect();
    assert_eq!(files, vec!["src/main.ts", "src/styles/app.css"]);
}

#[test]
fn test_project_root_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(project_root(&dir.path().join("missing")).is_err());

    touch(dir.path(), "file.ts");
    assert!(project_root(&dir.path().join("file.ts")).is_err());
}

#[test]
fn test_absolute_file() {
    assert_eq!(absolute_file("/repo", Path::new("/elsewhere/a.ts")), "/elsewhere/a.ts");
    assert_eq!(absolute_file("/repo", Path::new("src/a.ts")), "/repo/src/a.ts");
}
