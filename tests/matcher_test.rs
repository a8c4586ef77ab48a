use remap::flatten::flatten;
use remap::matcher::{chain_matches, find_matches};
use serde_json::json;

fn chain(dotted: &str) -> Vec<String> {
    dotted.split('.').map(str::to_string).collect()
}

#[test]
fn test_exact_match() {
    assert!(chain_matches(&chain("a.b"), &chain("a.b")));
    assert!(!chain_matches(&chain("a.b"), &chain("a.c")));
}

#[test]
fn test_wildcard_matches_exactly_one_segment() {
    assert!(chain_matches(&chain("a.*"), &chain("a.b")));
    assert!(!chain_matches(&chain("a.*"), &chain("a")));
    assert!(!chain_matches(&chain("a.*"), &chain("a.b.c")));
}

#[test]
fn test_length_mismatch_never_matches() {
    assert!(!chain_matches(&chain("a"), &chain("a.b")));
    assert!(!chain_matches(&chain("a.b"), &chain("a")));
}

#[test]
fn test_find_matches_preserves_entry_order() {
    let src = json!({"c": {"a": 1, "b": 2}, "d": {"e": 3}});
    let entries = flatten(&src, 16).unwrap();
    let matched = find_matches(&entries, &chain("c.*"));
    let chains: Vec<String> = matched.iter().map(|entry| entry.chain.join(".")).collect();
    assert_eq!(chains, vec!["c.a", "c.b"]);
}

#[test]
fn test_find_matches_can_be_empty() {
    let src = json!({"a": 1});
    let entries = flatten(&src, 16).unwrap();
    assert!(find_matches(&entries, &chain("z")).is_empty());
}
