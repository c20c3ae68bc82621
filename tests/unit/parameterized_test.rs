//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use catmatch::core::models::{CatalogObject, Criterion, Pattern};
use test_case::test_case;

// =============================================================================
// Wildcard Pattern Tests (schema and name)
// =============================================================================

#[test_case("*", "anything", true ; "star matches anything")]
#[test_case("", "anything", true ; "empty pattern matches anything")]
#[test_case("   ", "anything", true ; "whitespace pattern matches anything")]
#[test_case("Emp*", "Employee", true ; "prefix matches")]
#[test_case("emp*", "EMPLOYEE", true ; "prefix ignores case")]
#[test_case("Emp*", "Emp", true ; "prefix matches stem itself")]
#[test_case("Emp*", "Customer", false ; "prefix rejects other")]
#[test_case("Employee*", "Emp", false ; "prefix rejects shorter value")]
#[test_case("dbo", "DBO", true ; "exact ignores case")]
#[test_case("dbo", "dbo2", false ; "exact rejects longer")]
#[test_case("dbo", "db", false ; "exact rejects shorter")]
#[test_case("*Employee", "xEmployee", false ; "leading star is literal")]
#[test_case("E*e", "Employee", false ; "inner star is literal")]
#[test_case("\u{00E9}cole*", "\u{00C9}COLES", true ; "non ascii prefix ignores case")]
#[test_case("stra\u{00DF}e", "STRA\u{00DF}E", true ; "sharp s compares as itself")]
#[test_case("i*", "\u{0130}stanbul", false ; "dotted capital i is not i")]
#[test_case("\u{0131}*", "Istanbul", true ; "dotless i uppercases to capital i")]
fn test_wildcard_pattern(pattern: &str, value: &str, expected: bool) {
    assert_eq!(
        Pattern::wildcard(Some(pattern)).matches(Some(value)),
        expected,
        "pattern={pattern:?} value={value:?}"
    );
}

// =============================================================================
// Literal Pattern Tests (type)
// =============================================================================

#[test_case("Table", "Table", true ; "same case")]
#[test_case("table", "TABLE", true ; "different case")]
#[test_case("Tab*", "Table", false ; "trailing star is literal")]
#[test_case("*", "Table", false ; "star is literal")]
#[test_case("View", "Table", false ; "different type")]
#[test_case("k", "\u{212A}", false ; "kelvin sign is not k")]
#[test_case("\u{212A}", "K", false ; "k is not kelvin sign")]
#[test_case("\u{00FC}ber", "\u{00DC}BER", true ; "non ascii type ignores case")]
fn test_literal_pattern(pattern: &str, value: &str, expected: bool) {
    assert_eq!(Pattern::literal(Some(pattern)).matches(Some(value)), expected);
}

// =============================================================================
// Criterion Tests
// =============================================================================

#[test_case(Criterion::any(), true ; "unconstrained")]
#[test_case(Criterion::any().with_type("TABLE"), true ; "type only")]
#[test_case(Criterion::any().with_schema("Human*"), true ; "schema prefix")]
#[test_case(Criterion::any().with_schema("Human"), false ; "schema exact mismatch")]
#[test_case(Criterion::any().with_type("Table").with_name("Dep*"), true ; "type and name")]
#[test_case(Criterion::any().with_type("View").with_name("Dep*"), false ; "one field fails")]
fn test_criterion_matches(criterion: Criterion, expected: bool) {
    let department = CatalogObject::new("Table", "HumanResources", "Department");
    assert_eq!(criterion.matches(&department), expected);
}

// =============================================================================
// Shorthand Parsing Tests
// =============================================================================

#[test_case("Table:dbo.Emp*", Some("Table"), Some("dbo"), Some("Emp*") ; "all parts")]
#[test_case("View:", Some("View"), None, None ; "type only")]
#[test_case("Sales.", None, Some("Sales"), None ; "schema only")]
#[test_case("Employee", None, None, Some("Employee") ; "name only")]
#[test_case(":dbo.*", None, Some("dbo"), Some("*") ; "empty type")]
#[test_case("Table:Employee", Some("Table"), None, Some("Employee") ; "type and name")]
fn test_parse_shorthand(
    input: &str,
    object_type: Option<&str>,
    schema: Option<&str>,
    name: Option<&str>,
) {
    let criterion: Criterion = input.parse().unwrap();
    assert_eq!(criterion, Criterion::new(object_type, schema, name));
}
