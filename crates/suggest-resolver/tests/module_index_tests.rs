//! Module path index over a monorepo laid out on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use suggest_resolver::{
    CompilationUnit, IndexOptions, ModuleIndexCache, ModulePathIndex, ModuleResolver, NodeModulesResolver,
    OsFileSystem, ProjectUnit, UnitId,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, content).expect("write fixture file");
}

fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Root workspace with two members, a stray app outside the workspace
/// globs, and vendored packages.
fn monorepo() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path().join("repo");

    write(
        &root,
        "package.json",
        r#"{
            "name": "root",
            "private": true,
            "workspaces": ["packages/*", "!packages/ignored"],
            "devDependencies": { "typescript": "^5.0.0" }
        }"#,
    );
    write(
        &root,
        "packages/app/package.json",
        r#"{
            "name": "@acme/app",
            "dependencies": { "effect": "^3.0.0", "@effect/platform": "^0.1.0" },
            "devDependencies": { "@types/babel__core": "^7.0.0" },
            "peerDependencies": { "react": "*" },
            "optionalDependencies": { "fsevents": "*" }
        }"#,
    );
    write(&root, "packages/app/src/main.ts", "");
    write(&root, "packages/app/src/util.ts", "");
    write(&root, "packages/app/src/types.d.ts", "");
    write(&root, "packages/app/src/components/Button.tsx", "");
    write(&root, "packages/lib/package.json", r#"{ "name": "@acme/lib" }"#);
    write(&root, "packages/ignored/package.json", r#"{ "name": "@acme/ignored" }"#);
    write(&root, "packages/broken/package.json", "{ not json");
    write(&root, "apps/admin/package.json", r#"{ "name": "auth-admin" }"#);
    write(&root, "node_modules/effect/package.json", r#"{ "name": "effect" }"#);
    write(&root, "node_modules/effect/index.ts", "");

    let root = slash(&root);
    (dir, root)
}

fn app_unit(root: &str, id: u64) -> ProjectUnit {
    let files = [
        "packages/app/src/main.ts",
        "packages/app/src/util.ts",
        "packages/app/src/types.d.ts",
        "packages/app/src/components/Button.tsx",
        "node_modules/effect/index.ts",
    ];
    ProjectUnit::new(
        UnitId::new(id),
        root,
        files.iter().map(|file| format!("{root}/{file}")).collect(),
    )
}

#[test]
fn test_index_collects_local_files() {
    let (_dir, root) = monorepo();
    let index = ModulePathIndex::build(&app_unit(&root, 1), &OsFileSystem, &IndexOptions::default());

    assert_eq!(index.local_file_count(), 3);
    assert!(index.has_local_file(&format!("{root}/packages/app/src/util.ts")));
    assert!(!index.has_local_file(&format!("{root}/packages/app/src/types.d.ts")));
    assert!(!index.has_local_file(&format!("{root}/node_modules/effect/index.ts")));
}

#[test]
fn test_index_collects_dependencies_from_every_section() {
    let (_dir, root) = monorepo();
    let index = ModulePathIndex::build(&app_unit(&root, 1), &OsFileSystem, &IndexOptions::default());

    for name in ["effect", "@effect/platform", "react", "fsevents", "typescript"] {
        assert!(index.has_package(name), "missing {name}");
    }
    assert!(index.has_package("@types/babel__core"));
    assert!(index.has_package("@babel/core"));
    assert_eq!(
        index.manifests(),
        [
            format!("{root}/packages/app/package.json"),
            format!("{root}/package.json"),
        ]
    );
}

#[test]
fn test_index_collects_workspace_and_sibling_packages() {
    let (_dir, root) = monorepo();
    let index = ModulePathIndex::build(&app_unit(&root, 1), &OsFileSystem, &IndexOptions::default());

    assert!(index.has_package("@acme/app"));
    assert!(index.has_package("@acme/lib"));
    // Excluded from the workspace globs but still a sibling of `app`.
    assert!(index.has_package("@acme/ignored"));
    assert!(index.has_package("root"));
    assert!(!index.has_package("auth-admin"));
}

#[test]
fn test_unlisted_package_falls_back_to_resolver() {
    struct HostResolver;

    impl ModuleResolver for HostResolver {
        fn can_resolve(&self, specifier: &str, _containing_file: &str) -> bool {
            specifier.starts_with("auth-admin/")
        }
    }

    let (_dir, root) = monorepo();
    let unit = app_unit(&root, 1).with_resolver(Arc::new(HostResolver));
    let index = ModulePathIndex::build(&unit, &OsFileSystem, &IndexOptions::default());
    let main = format!("{root}/packages/app/src/main.ts");

    assert!(!index.has_package("auth-admin"));
    assert!(index.can_resolve_module("auth-admin/app/lib/auth-config", &main));
    assert!(!index.can_resolve_module("not-installed", &main));
}

#[test]
fn test_node_modules_resolver_on_disk() {
    let (_dir, root) = monorepo();
    let resolver = NodeModulesResolver::new(Arc::new(OsFileSystem), IndexOptions::default());
    let main = format!("{root}/packages/app/src/main.ts");

    assert!(resolver.can_resolve("effect", &main));
    assert!(resolver.can_resolve("./util", &main));
    assert!(resolver.can_resolve("./components/Button", &main));
    assert!(!resolver.can_resolve("./missing", &main));
    assert!(!resolver.can_resolve("auth-admin", &main));
}

#[test]
fn test_cache_is_keyed_by_unit_identity() {
    let (_dir, root) = monorepo();
    let options = IndexOptions::default();
    let mut cache = ModuleIndexCache::new();

    let first = cache.get_or_build(&app_unit(&root, 1), &OsFileSystem, &options);
    write(Path::new(&root), "packages/app/src/added.ts", "");
    let again = cache.get_or_build(&app_unit(&root, 1), &OsFileSystem, &options);
    assert!(Arc::ptr_eq(&first, &again));

    let added = format!("{root}/packages/app/src/added.ts");
    let mut files = app_unit(&root, 2).source_files().to_vec();
    files.push(added.clone());
    let unit = ProjectUnit::new(UnitId::new(2), root.as_str(), files);
    let rebuilt = cache.get_or_build(&unit, &OsFileSystem, &options);
    assert!(rebuilt.has_local_file(&added));
    assert!(!first.has_local_file(&added));
}
