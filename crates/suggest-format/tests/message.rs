use super::*;
use suggest_ranking::SimilarityScore;

fn score() -> SimilarityScore {
    SimilarityScore::new(0.9).unwrap_or(SimilarityScore::EXACT)
}

fn named(names: &[&str]) -> SuggestionSet {
    SuggestionSet::from_ranked(
        names
            .iter()
            .map(|name| ScoredCandidate::named(*name, score()))
            .collect(),
    )
}

fn with_signature(name: &str, signature: &str) -> ScoredCandidate {
    ScoredCandidate {
        name: name.to_string(),
        signature: Some(signature.to_string()),
        score: score(),
    }
}

#[test]
fn test_export_message_in_module() {
    let message = format_export_message("useStae", "react", None, &named(&["useState"]));
    assert_eq!(
        message,
        "Export 'useStae' does not exist in module 'react'. Did you mean:\n  - useState"
    );
}

#[test]
fn test_import_message_on_type() {
    let message = format_import_message(
        "saveRe1f",
        "./hooks",
        Some("typeof import(\"./hooks\")"),
        &named(&["saveRef"]),
    );
    assert!(message.contains("Export 'saveRe1f' does not exist on type 'typeof import(\"./hooks\")'."));
    assert!(message.contains("  - saveRef"));
}

#[test]
fn test_empty_type_name_falls_back_to_module() {
    let message = format_import_message("x1", "./m", Some(""), &named(&["x"]));
    assert!(message.starts_with("Export 'x1' does not exist in module './m'."));
}

#[test]
fn test_overloaded_signatures_render_on_separate_lines() {
    let suggestions = SuggestionSet::from_ranked(vec![with_signature(
        "pipe",
        "{ <A>(a: A): A; <A, B = never>(a: A, ab: (a: A) => B): B; }",
    )]);
    let message = format_import_message(
        "p1ipe",
        "effect",
        Some("typeof import(\"effect\")"),
        &suggestions,
    );
    assert!(message.ends_with("Did you mean:\n  - pipe<A>\n  - pipe<A, B = never>"));
}

#[test]
fn test_member_message_with_signature() {
    let suggestions = SuggestionSet::from_ranked(vec![with_signature(
        "getItem",
        "(key: string) => string | null",
    )]);
    let message = format_member_message("get1Item", Some("Storage"), &suggestions);
    assert_eq!(
        message,
        "Property 'get1Item' does not exist on type 'Storage'. Did you mean:\n  - getItem(key: string): string | null"
    );
}

#[test]
fn test_member_message_without_type_name() {
    let message = format_member_message("nmae", None, &named(&["name"]));
    assert!(message.starts_with("Property 'nmae' does not exist. Did you mean:"));
}

#[test]
fn test_local_module_message() {
    let message = format_module_message(
        "./HamsterKo1mbatPage.css",
        ModuleKind::Local,
        &named(&["./HamsterKombatPage.css"]),
    );
    assert_eq!(
        message,
        "Cannot find module \"./HamsterKo1mbatPage.css\". Did you mean:\n  - ./HamsterKombatPage.css"
    );
}

#[test]
fn test_package_module_message_mentions_type_declarations() {
    let message = format_module_message("eff1ect", ModuleKind::Package, &named(&["effect"]));
    assert!(message.starts_with(
        "Cannot find module 'eff1ect' or its corresponding type declarations. Did you mean:"
    ));
    assert!(message.contains("  - effect"));
}

#[test]
fn test_module_message_ignores_signatures() {
    let suggestions = SuggestionSet::from_ranked(vec![with_signature("./util", "string")]);
    let message = format_module_message("./utl", ModuleKind::Local, &suggestions);
    assert!(message.ends_with("  - ./util"));
}

#[test]
fn test_missing_name_message() {
    let message = format_missing_name_message("formatGree1ting", &named(&["formatGreeting"]));
    assert_eq!(
        message,
        "Cannot find name 'formatGree1ting'. Did you mean:\n  - formatGreeting"
    );
    assert_eq!(
        format_missing_name_message("x", &SuggestionSet::empty()),
        "Cannot find name 'x'."
    );
}

#[test]
fn test_empty_suggestions_render_header_only() {
    let empty = SuggestionSet::empty();
    assert_eq!(
        format_member_message("a", Some("T"), &empty),
        "Property 'a' does not exist on type 'T'."
    );
    assert_eq!(
        format_module_message("./a", ModuleKind::Local, &empty),
        "Cannot find module \"./a\"."
    );
}

#[test]
fn test_repeated_lines_are_deduplicated() {
    let suggestions = SuggestionSet::from_ranked(vec![
        with_signature("kind", "(value: string) => string"),
        with_signature("kind", "(value: string) => string"),
    ]);
    let message = format_member_message("kin1d", Some("Variant"), &suggestions);
    assert_eq!(message.matches("- kind").count(), 1);
}

#[test]
fn test_suggestion_message() {
    assert_eq!(
        format_suggestion_message(&named(&["a", "b"])),
        "Did you mean:\n  - a\n  - b"
    );
    assert_eq!(
        format_suggestion_message(&SuggestionSet::empty()),
        "No similar suggestions found."
    );
}

#[test]
fn test_compose_message_dispatches_on_context() {
    let context = MessageContext::Member {
        property: "nmae".to_string(),
        type_name: Some("User".to_string()),
    };
    assert_eq!(context.query(), "nmae");
    assert!(context.includes_signatures());
    assert_eq!(
        compose_message(&context, &named(&["name"])),
        format_member_message("nmae", Some("User"), &named(&["name"]))
    );

    let module = MessageContext::Module {
        requested_path: "lodahs".to_string(),
        module_kind: ModuleKind::Package,
    };
    assert!(!module.includes_signatures());
    assert_eq!(
        compose_message(&module, &named(&["lodash"])),
        format_module_message("lodahs", ModuleKind::Package, &named(&["lodash"]))
    );
}

#[test]
fn test_message_context_serializes_tagged() {
    let context = MessageContext::Module {
        requested_path: "./a".to_string(),
        module_kind: ModuleKind::Local,
    };
    let json = serde_json::to_value(&context).unwrap();
    assert_eq!(json["kind"], "module");
    assert_eq!(json["requestedPath"], "./a");
    assert_eq!(json["moduleKind"], "local");
}
