//! Tests for tool visibility.

use std::collections::BTreeSet;

use super::*;

const CATALOG: [&str; 4] = ["A", "B", "C", "D"];

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_enabled_list_wins_over_disabled() {
    let result = effective_set(CATALOG, &set(&["A", "C"]), &set(&["B"]));

    assert_eq!(result, set(&["A", "C"]));
}

#[test]
fn test_disabled_list_subtracts_from_catalog() {
    let result = effective_set(CATALOG, &set(&[]), &set(&["B", "D"]));

    assert_eq!(result, set(&["A", "C"]));
}

#[test]
fn test_empty_lists_keep_full_catalog() {
    let result = effective_set(CATALOG, &set(&[]), &set(&[]));

    assert_eq!(result, set(&CATALOG));
}

#[test]
fn test_unknown_enabled_names_are_ignored() {
    let result = effective_set(CATALOG, &set(&["A", "not_a_tool"]), &set(&[]));

    assert_eq!(result, set(&["A"]));
}

#[test]
fn test_unknown_disabled_names_are_ignored() {
    let result = effective_set(CATALOG, &set(&[]), &set(&["Z"]));

    assert_eq!(result, set(&CATALOG));
}

#[test]
fn test_enabled_names_outside_catalog_only_yield_empty_set() {
    let result = effective_set(CATALOG, &set(&["X", "Y"]), &set(&[]));

    assert!(result.is_empty());
}

#[test]
fn test_from_lists_parses_csv() {
    let visibility = ToolVisibility::from_lists(Some(" A, C ,,"), Some("B"));

    assert_eq!(visibility.enabled(), &set(&["A", "C"]));
    assert_eq!(visibility.disabled(), &set(&["B"]));
    assert_eq!(visibility.effective_set(CATALOG), set(&["A", "C"]));
}

#[test]
fn test_from_lists_with_nothing_is_all() {
    let visibility = ToolVisibility::from_lists(None, Some(""));

    assert_eq!(visibility, ToolVisibility::all());
    assert_eq!(visibility.effective_set(CATALOG), set(&CATALOG));
}

#[test]
fn test_result_is_deterministic() {
    let visibility = ToolVisibility::new(Vec::<String>::new(), vec!["C"]);

    let first = visibility.effective_set(["D", "C", "B", "A"]);
    let second = visibility.effective_set(CATALOG);

    assert_eq!(first, second);
}
