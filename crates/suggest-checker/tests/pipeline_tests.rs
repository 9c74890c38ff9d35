//! End-to-end validation through the public API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use suggest_checker::{ImportSite, OracleError, SuggestionChecker, TypeOracle, ValidationResult};
use suggest_common::RuleName;
use suggest_resolver::{
    FileSystem, IndexOptions, MemoryFileSystem, ModuleResolver, NodeModulesResolver, OsFileSystem,
    ProjectUnit, UnitId,
};

struct AliasResolver;

impl ModuleResolver for AliasResolver {
    fn can_resolve(&self, specifier: &str, _containing_file: &str) -> bool {
        specifier.starts_with("auth-admin/")
    }
}

fn monorepo() -> Arc<dyn FileSystem> {
    let mut fs = MemoryFileSystem::new();
    fs.add_file(
        "/repo/package.json",
        r#"{ "private": true, "workspaces": ["packages/*"] }"#,
    );
    fs.add_file(
        "/repo/packages/web/package.json",
        r#"{ "name": "@repo/web", "dependencies": { "react": "18" } }"#,
    );
    fs.add_file("/repo/packages/web/src/pages/HamsterKombatPage.tsx", "");
    fs.add_file("/repo/packages/web/src/pages/HamsterKombatPage.css", "");
    fs.add_file("/repo/packages/shared/package.json", r#"{ "name": "@repo/shared" }"#);
    Arc::new(fs)
}

fn web_unit() -> ProjectUnit {
    ProjectUnit::new(
        UnitId::new(1),
        "/repo",
        vec![
            "/repo/packages/web/src/pages/HamsterKombatPage.tsx".to_string(),
            "/repo/packages/web/src/pages/HamsterKombatPage.css".to_string(),
        ],
    )
}

const PAGE: &str = "/repo/packages/web/src/pages/HamsterKombatPage.tsx";

#[test]
fn test_unlisted_workspace_import_resolved_by_fallback_is_valid() {
    let mut checker = SuggestionChecker::new(monorepo());
    let unit = web_unit().with_resolver(Arc::new(AliasResolver));

    let result = checker.check_module_path(&unit, "auth-admin/app/lib/auth-config", PAGE);
    assert_eq!(result, ValidationResult::Valid);
}

#[test]
fn test_sibling_packages_are_known() {
    let mut checker = SuggestionChecker::new(monorepo());
    let unit = web_unit();

    assert!(checker.check_module_path(&unit, "@repo/shared", PAGE).is_valid());
    assert!(checker.check_module_path(&unit, "react/jsx-runtime", PAGE).is_valid());

    let result = checker.check_module_path(&unit, "@repo/shard", PAGE);
    assert_eq!(
        result.suggestions().and_then(|s| s.first()).map(|s| s.name.as_str()),
        Some("@repo/shared")
    );
}

#[test]
fn test_misspelled_relative_stylesheet() {
    let mut checker = SuggestionChecker::new(monorepo());
    let result = checker.check_module_path(&web_unit(), "./HamsterKo1mbatPage.css", PAGE);

    let names: Vec<&str> = result
        .suggestions()
        .map(|set| set.names().collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["./HamsterKombatPage.css"]);

    let diagnostic = result
        .into_diagnostic(RuleName::SuggestModulePaths, PAGE, 7, 26)
        .expect("reported");
    assert_eq!(
        diagnostic.message_text,
        "Cannot find module \"./HamsterKo1mbatPage.css\". Did you mean:\n  - ./HamsterKombatPage.css"
    );
}

struct ObjectOracle;

impl TypeOracle for ObjectOracle {
    type Type = ();

    fn properties_of_type(&self, _ty: &()) -> Result<Vec<String>, OracleError> {
        Ok(vec!["name".to_string(), "age".to_string()])
    }

    fn type_name(&self, _ty: &()) -> Option<String> {
        Some("{ name: string; age: number; }".to_string())
    }

    fn resolve_module_path(&self, _: &str, _: &str) -> Result<Option<String>, OracleError> {
        Err(OracleError::Unavailable)
    }

    fn exports_of_module(&self, _: &str, _: &str) -> Result<Vec<String>, OracleError> {
        Err(OracleError::Unavailable)
    }
}

#[test]
fn test_member_typo_suggests_existing_property() {
    let checker = SuggestionChecker::new(Arc::new(MemoryFileSystem::new()));
    let result = checker.symbols(&ObjectOracle).validate_member(&(), "nmae");

    assert!(result.is_invalid());
    assert!(result.suggestions().is_some_and(|s| s.contains_name("name")));
    assert!(
        checker
            .symbols(&ObjectOracle)
            .validate_import(
                ImportSite {
                    specifier: "./x",
                    containing_file: PAGE,
                    name: "y",
                },
                false,
            )
            .is_valid()
    );
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, content).expect("write fixture file");
}

#[test]
fn test_vendored_workspace_link_resolves_on_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    write(root, "package.json", r#"{ "dependencies": { "react": "18" } }"#);
    write(root, "src/main.ts", "");
    write(root, "node_modules/auth-admin/package.json", r#"{ "name": "auth-admin" }"#);

    let root = root.to_string_lossy().replace('\\', "/");
    let main = format!("{root}/src/main.ts");
    let options = IndexOptions::default();
    let resolver = NodeModulesResolver::new(Arc::new(OsFileSystem), options.clone());
    let unit = ProjectUnit::new(UnitId::new(9), root.as_str(), vec![main.clone()])
        .with_resolver(Arc::new(resolver));

    let mut checker = SuggestionChecker::with_options(
        Arc::new(OsFileSystem),
        Default::default(),
        options,
    );
    assert!(
        checker
            .check_module_path(&unit, "auth-admin/app/lib/auth-config", &main)
            .is_valid()
    );
    assert!(checker.check_module_path(&unit, "reactt", &main).is_invalid());
}
