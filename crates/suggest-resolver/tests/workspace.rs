use super::*;
use crate::fs::MemoryFileSystem;

fn tree() -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();
    fs.add_directory("/repo/packages/api");
    fs.add_directory("/repo/packages/web/src");
    fs.add_directory("/repo/packages/node_modules/dep");
    fs.add_directory("/repo/packages/.cache");
    fs.add_directory("/repo/apps/admin/nested/deep");
    fs.add_directory("/repo/tools");
    fs
}

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[test]
fn test_single_star_matches_one_level() {
    let found = expand_workspace_globs(&tree(), "/repo", &patterns(&["packages/*"]), "node_modules");
    assert_eq!(found, vec!["/repo/packages/api", "/repo/packages/web"]);
}

#[test]
fn test_leading_dot_slash_and_trailing_slash_are_ignored() {
    let found = expand_workspace_globs(&tree(), "/repo", &patterns(&["./apps/*/"]), "node_modules");
    assert_eq!(found, vec!["/repo/apps/admin"]);
}

#[test]
fn test_negated_patterns_exclude() {
    let found = expand_workspace_globs(
        &tree(),
        "/repo",
        &patterns(&["packages/*", "!packages/web"]),
        "node_modules",
    );
    assert_eq!(found, vec!["/repo/packages/api"]);
}

#[test]
fn test_double_star_descends() {
    let found = expand_workspace_globs(&tree(), "/repo", &patterns(&["apps/**"]), "node_modules");
    assert!(found.contains(&"/repo/apps/admin".to_string()));
    assert!(found.contains(&"/repo/apps/admin/nested/deep".to_string()));
}

#[test]
fn test_literal_pattern() {
    let found = expand_workspace_globs(&tree(), "/repo", &patterns(&["tools"]), "node_modules");
    assert_eq!(found, vec!["/repo/tools"]);
}

#[test]
fn test_no_usable_patterns() {
    assert!(expand_workspace_globs(&tree(), "/repo", &[], "node_modules").is_empty());
    assert!(expand_workspace_globs(&tree(), "/repo", &patterns(&["!x", ""]), "node_modules").is_empty());
}
