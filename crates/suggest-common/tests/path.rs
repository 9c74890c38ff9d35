use super::*;
use crate::limits::SUPPORTED_EXTENSIONS;

#[test]
fn test_normalize_path_converts_backslashes() {
    assert_eq!(normalize_path(r"C:\repo\src\main.ts"), "C:/repo/src/main.ts");
    assert_eq!(normalize_path("/repo/src"), "/repo/src");
}

#[test]
fn test_dirname() {
    assert_eq!(dirname("/repo/src/main.ts"), "/repo/src");
    assert_eq!(dirname("/repo"), "/");
    assert_eq!(dirname("/"), "/");
    assert_eq!(dirname("main.ts"), ".");
    assert_eq!(dirname("/repo/src/"), "/repo");
}

#[test]
fn test_join_path_single_separator() {
    assert_eq!(join_path("/repo", "package.json"), "/repo/package.json");
    assert_eq!(join_path("/", "package.json"), "/package.json");
    assert_eq!(join_path("/repo", ""), "/repo");
}

#[test]
fn test_collapse_segments() {
    assert_eq!(collapse_segments("/repo/src/../lib/./a.ts"), "/repo/lib/a.ts");
    assert_eq!(collapse_segments("/../a"), "/a");
    assert_eq!(collapse_segments("../a/../../b"), "../../b");
    assert_eq!(collapse_segments("a/.."), ".");
}

#[test]
fn test_resolve_relative() {
    assert_eq!(
        resolve_relative("/repo/src/pages/App.tsx", "./HamsterKombatPage.css"),
        "/repo/src/pages/HamsterKombatPage.css"
    );
    assert_eq!(
        resolve_relative("/repo/src/pages/App.tsx", "../lib/util"),
        "/repo/src/lib/util"
    );
    assert_eq!(resolve_relative("/repo/src/a.ts", "/abs/b"), "/abs/b");
    assert_eq!(resolve_relative(r"C:\repo\src\a.ts", "./b"), "C:/repo/src/b");
}

#[test]
fn test_relative_path_and_module_specifier() {
    assert_eq!(relative_path("/repo/src", "/repo/src/util"), "util");
    assert_eq!(relative_path("/repo/src/a", "/repo/src/b/c"), "../b/c");
    assert_eq!(relative_path("/repo/src", "/repo/src"), "");

    assert_eq!(to_module_specifier("/repo/src", "/repo/src/util"), "./util");
    assert_eq!(to_module_specifier("/repo/src/a", "/repo/src/b/c"), "../b/c");
    assert_eq!(to_module_specifier("/repo/src/a", "/repo/src"), "..");
}

#[test]
fn test_extension_helpers() {
    assert_eq!(extension_of("/a/b.tsx", SUPPORTED_EXTENSIONS), Some(".tsx"));
    assert_eq!(extension_of("/a/b.mts", SUPPORTED_EXTENSIONS), Some(".mts"));
    assert_eq!(extension_of("/a/b.txt", SUPPORTED_EXTENSIONS), None);
    assert_eq!(strip_known_extension("/a/b.ts", SUPPORTED_EXTENSIONS), "/a/b");
    assert_eq!(strip_known_extension("/a/b.css", SUPPORTED_EXTENSIONS), "/a/b");
    assert_eq!(strip_known_extension("/a/b", SUPPORTED_EXTENSIONS), "/a/b");
}

#[test]
fn test_file_classification() {
    assert!(is_declaration_file("/a/types.d.ts"));
    assert!(is_declaration_file("/a/types.d.mts"));
    assert!(!is_declaration_file("/a/types.ts"));

    assert!(is_under_directory_named("/repo/node_modules/react/index.js", "node_modules"));
    assert!(!is_under_directory_named("/repo/src/node_modules.ts", "node_modules"));

    assert!(is_test_file("./button.test"));
    assert!(is_test_file("./button.spec.tsx"));
    assert!(!is_test_file("./button"));
    assert_eq!(file_name("/repo/src/main.ts"), "main.ts");
}
