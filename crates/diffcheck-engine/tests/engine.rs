//! End-to-end checks over the extraction -> diff -> summary pipeline

use diffcheck_engine::{
    build_summary, diff_lines, extract_functions, normalize_body, Marker,
};

const ORIGINAL: &str = r#"
/* header comment */
int add(int a, int b) {
    return a + b;
}

void greet() {
    hello();  // say hi
    goodbye();
}

void dropped() {
    cleanup();
}
"#;

const REVISED: &str = r#"
int add(int a, int b) {
    return a + b;
}

void greet() {
    goodbye();
    hello();
}

void fresh() {
    start();
}
"#;

#[test]
fn extraction_finds_all_functions() {
    let table = extract_functions(ORIGINAL);
    let names: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["add", "dropped", "greet"]);
}

#[test]
fn extraction_balance_on_nested_braces() {
    let code = "void outer() { if (a) { b(); } else { c(); } }";
    let table = extract_functions(code);
    assert_eq!(
        table.get("outer").unwrap().body,
        " if (a) { b(); } else { c(); } "
    );
}

#[test]
fn comments_are_gone_before_extraction() {
    let table = extract_functions(ORIGINAL);
    let greet = table.get("greet").unwrap();
    assert!(!greet.body.contains("say hi"));
    assert!(greet.body.contains("hello();"));
}

#[test]
fn unchanged_function_diffs_clean() {
    let orig = extract_functions(ORIGINAL);
    let news = extract_functions(REVISED);
    let rows = diff_lines(
        &orig.get("add").unwrap().body_lines,
        &news.get("add").unwrap().body_lines,
    );
    assert!(rows.iter().all(|r| r.marker == Marker::Unchanged));
}

#[test]
fn swapped_lines_show_the_reorder_marker() {
    let orig = extract_functions(ORIGINAL);
    let news = extract_functions(REVISED);
    let rows = diff_lines(
        &orig.get("greet").unwrap().body_lines,
        &news.get("greet").unwrap().body_lines,
    );
    assert!(rows.iter().any(|r| r.marker == Marker::Reordered));
    assert!(rows.iter().any(|r| r.marker == Marker::Removed));
    // The removed side of the pair stays removed
    let removed: Vec<_> = rows.iter().filter(|r| r.marker == Marker::Removed).collect();
    assert!(!removed.is_empty());
}

#[test]
fn diff_invariants_hold_for_every_matched_function() {
    let orig = extract_functions(ORIGINAL);
    let news = extract_functions(REVISED);
    for (name, block) in &orig {
        let Some(new_block) = news.get(name) else { continue };
        let rows = diff_lines(&block.body_lines, &new_block.body_lines);
        let unchanged = rows.iter().filter(|r| r.marker == Marker::Unchanged).count();
        let removed = rows.iter().filter(|r| r.marker == Marker::Removed).count();
        let added = rows.iter().filter(|r| r.marker == Marker::Added).count();
        let reordered = rows.iter().filter(|r| r.marker == Marker::Reordered).count();
        assert_eq!(unchanged + removed, block.body_lines.len(), "{}", name);
        assert_eq!(
            unchanged + added + reordered,
            new_block.body_lines.len(),
            "{}",
            name
        );
    }
}

#[test]
fn summary_reports_missing_new_and_changed() {
    let orig = extract_functions(ORIGINAL);
    let news = extract_functions(REVISED);
    let summary = build_summary(&orig, &news);
    assert!(summary.starts_with("=== Summary ==="));
    assert!(summary.contains("Missing functions in new (1):"));
    assert!(summary.contains(" - dropped"));
    assert!(summary.contains("New functions not in original (1):"));
    assert!(summary.contains(" + fresh"));
    // greet's lines were reordered, which changes the normalized body
    assert!(summary.contains("Changed function bodies (1):"));
    assert!(summary.contains(" * greet"));
}

#[test]
fn style_only_changes_are_not_changes() {
    let compact = "void f() { a(); b(); }";
    let spread = "void f()\n{\n\ta();\n\tb();\n}";
    let a = extract_functions(compact);
    let b = extract_functions(spread);
    assert_eq!(
        a.get("f").unwrap().normalized_body,
        b.get("f").unwrap().normalized_body
    );
    let summary = build_summary(&a, &b);
    assert!(summary.contains("Changed function bodies (0):"));
}

#[test]
fn normalization_is_idempotent_over_extracted_bodies() {
    for block in extract_functions(ORIGINAL).values() {
        assert_eq!(
            normalize_body(&block.normalized_body),
            block.normalized_body
        );
    }
}

#[test]
fn totality_on_empty_input() {
    assert!(extract_functions("").is_empty());
    assert!(diff_lines(&[], &[]).is_empty());
    let summary = build_summary(&Default::default(), &Default::default());
    assert_eq!(summary.lines().count(), 4);
}
