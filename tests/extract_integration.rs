//! Integration tests for the extraction pipeline.
//!
//! These tests run the full front end and pipeline against the fixtures in
//! `testdata/`.

use std::path::PathBuf;

use gofuncctx::extract::{extract_file, NoopObserver};
use gofuncctx::{ExtractConfig, ExtractError, FunctionRecord, NOT_EXIST};
use pretty_assertions::assert_eq;

fn testdata_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn extract(name: &str) -> Vec<FunctionRecord> {
    extract_file(&testdata_path(name), &ExtractConfig::default(), &mut NoopObserver)
        .expect("fixture should extract")
}

fn find<'a>(records: &'a [FunctionRecord], name: &str) -> &'a FunctionRecord {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no record named {}", name))
}

const CIRCLE_DEF: &str = "type Circle struct {\n\tR float64\n}";
const CIRCLE_METHODS: &str = "// Methods:\n- Area\n- String\n";

// =============================================================================
// Record shape
// =============================================================================

#[test]
fn test_one_record_per_declaration_in_order() {
    let records = extract("shapes.go");

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Area", "String", "NewCircle", "Describe", "TestCircleArea", "Total", "noop"]
    );
    assert!(records.windows(2).all(|w| w[0].start_line <= w[1].start_line));
    assert!(records.iter().all(|r| r.start_line <= r.end_line));
}

#[test]
fn test_import_list_identical_across_records() {
    let records = extract("shapes.go");
    for record in &records {
        assert_eq!(record.import_package, "\"fmt\"; \"math\"");
    }
}

#[test]
fn test_lines_and_doc() {
    let records = extract("shapes.go");
    let area = find(&records, "Area");

    assert_eq!(area.start_line, 18);
    assert_eq!(area.end_line, 20);
    assert_eq!(area.doc.as_deref(), Some("// Area returns the circle area."));
    assert_eq!(
        area.body,
        "func (c *Circle) Area() float64 {\n\treturn math.Pi * c.R * c.R\n}"
    );
}

// =============================================================================
// Type context
// =============================================================================

#[test]
fn test_receiver_replaced_by_declaration() {
    let records = extract("shapes.go");

    let expected = format!("{}\n\n{}", CIRCLE_DEF, CIRCLE_METHODS);
    assert_eq!(find(&records, "Area").receiver.as_deref(), Some(expected.as_str()));
    assert_eq!(find(&records, "String").receiver.as_deref(), Some(expected.as_str()));
    assert_eq!(find(&records, "NewCircle").receiver, None);
}

#[test]
fn test_params_and_returns_appended() {
    let records = extract("shapes.go");
    let expansion = format!(
        "\n\n// Type Circle definition:\n{}\n{}",
        CIRCLE_DEF, CIRCLE_METHODS
    );

    let describe = find(&records, "Describe");
    assert_eq!(describe.params, format!("(c Circle, label string){}", expansion));
    assert_eq!(describe.returns.as_deref(), Some("(string, error)"));
    assert_eq!(
        describe.signature,
        "func Describe((c Circle, label string)) ((string, error))"
    );

    let new_circle = find(&records, "NewCircle");
    assert_eq!(new_circle.params, "r float64");
    assert_eq!(
        new_circle.returns.as_deref(),
        Some(format!("*Circle{}", expansion).as_str())
    );
    assert_eq!(new_circle.signature, "func NewCircle(r float64) *Circle");
}

#[test]
fn test_params_sentinel_iff_no_parameters() {
    let records = extract("shapes.go");
    for record in &records {
        let parameterless = matches!(
            record.name.as_str(),
            "Area" | "String" | "TestCircleArea" | "noop"
        );
        assert_eq!(record.params == NOT_EXIST, parameterless, "{}", record.name);
    }
    assert_eq!(find(&records, "noop").returns, None);
    assert_eq!(find(&records, "Total").params, "shapes <variadic>");
}

// =============================================================================
// Bodies and windows
// =============================================================================

#[test]
fn test_test_function_has_no_body_and_is_not_context() {
    let records = extract("shapes.go");

    let test_fn = find(&records, "TestCircleArea");
    assert_eq!(test_fn.body, "");

    let noop = find(&records, "noop");
    assert_eq!(noop.before_funcs.len(), 4);
    assert!(noop.before_funcs.iter().all(|b| !b.contains("TestCircleArea")));
    assert_eq!(noop.after_funcs, vec![NOT_EXIST]);
}

#[test]
fn test_windows_never_contain_own_body() {
    let records = extract("shapes.go");
    for record in &records {
        assert!(record.before_funcs.len() <= 5);
        assert!(record.after_funcs.len() <= 5);
        if !record.body.is_empty() {
            assert!(!record.before_funcs.contains(&record.body));
            assert!(!record.after_funcs.contains(&record.body));
        }
    }

    let area = find(&records, "Area");
    assert_eq!(area.before_funcs, vec![NOT_EXIST]);
    assert_eq!(area.after_funcs.len(), 4);
    assert_eq!(area.after_funcs[0], find(&records, "String").body);
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_file_without_functions() {
    let records = extract("empty.go");
    assert!(records.is_empty());
}

#[test]
fn test_broken_file_is_parse_error() {
    let err = extract_file(
        &testdata_path("broken.go"),
        &ExtractConfig::default(),
        &mut NoopObserver,
    )
    .unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }), "{:?}", err);
}
