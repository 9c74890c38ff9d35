use super::*;

#[test]
fn test_classify_relative() {
    for specifier in ["./a", "../a/b", "/abs/path", ".", ".."] {
        assert_eq!(classify_specifier(specifier), Some(SpecifierKind::Relative), "{specifier}");
    }
}

#[test]
fn test_classify_builtins_with_and_without_prefix() {
    assert_eq!(classify_specifier("fs"), Some(SpecifierKind::Builtin));
    assert_eq!(classify_specifier("node:fs"), Some(SpecifierKind::Builtin));
    assert_eq!(classify_specifier("fs/promises"), Some(SpecifierKind::Builtin));
    assert_eq!(classify_specifier("node:path/posix"), Some(SpecifierKind::Builtin));
}

#[test]
fn test_classify_protocols() {
    assert_eq!(classify_specifier("node:test"), Some(SpecifierKind::Protocol));
    assert_eq!(classify_specifier("bun:sqlite"), Some(SpecifierKind::Protocol));
    assert_eq!(classify_specifier("virtual:pwa-register"), Some(SpecifierKind::Protocol));
    assert_eq!(
        classify_specifier("https://esm.sh/react"),
        Some(SpecifierKind::Protocol)
    );
}

#[test]
fn test_single_letter_scheme_is_not_protocol() {
    assert_eq!(classify_specifier("C:/repo/a"), Some(SpecifierKind::Package));
}

#[test]
fn test_classify_subpath_and_package() {
    assert_eq!(classify_specifier("#internal/util"), Some(SpecifierKind::Subpath));
    assert_eq!(classify_specifier("lodash/fp"), Some(SpecifierKind::Package));
    assert_eq!(classify_specifier("@scope/pkg"), Some(SpecifierKind::Package));
}

#[test]
fn test_classify_empty() {
    assert_eq!(classify_specifier(""), None);
    assert_eq!(classify_specifier("   "), None);
}

#[test]
fn test_always_valid_kinds() {
    assert!(SpecifierKind::Builtin.is_always_valid());
    assert!(SpecifierKind::Protocol.is_always_valid());
    assert!(SpecifierKind::Subpath.is_always_valid());
    assert!(!SpecifierKind::Relative.is_always_valid());
    assert!(!SpecifierKind::Package.is_always_valid());
}

#[test]
fn test_split_package_specifier() {
    assert_eq!(split_package_specifier("lodash"), ("lodash", None));
    assert_eq!(split_package_specifier("lodash/fp"), ("lodash", Some("fp")));
    assert_eq!(split_package_specifier("@babel/core"), ("@babel/core", None));
    assert_eq!(
        split_package_specifier("@babel/core/transform"),
        ("@babel/core", Some("transform"))
    );
    assert_eq!(split_package_specifier("@scope"), ("@scope", None));
}

#[test]
fn test_extract_module_name() {
    assert_eq!(extract_module_name("auth-admin/app/lib/auth-config"), "auth-admin");
    assert_eq!(extract_module_name("@scope/pkg/sub/deep"), "@scope/pkg");
}

#[test]
fn test_types_package_mapping() {
    assert_eq!(types_package_target("@types/node").as_deref(), Some("node"));
    assert_eq!(types_package_target("@types/babel__core").as_deref(), Some("@babel/core"));
    assert_eq!(types_package_target("@types/"), None);
    assert_eq!(types_package_target("react"), None);
    assert_eq!(types_package_for("react"), "@types/react");
    assert_eq!(types_package_for("@babel/core"), "@types/babel__core");
}
