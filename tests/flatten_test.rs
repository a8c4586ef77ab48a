use remap::error::Error;
use remap::flatten::flatten;
use serde_json::json;

#[test]
fn test_every_key_yields_an_entry() {
    let src = json!({"a": 1, "c": {"x": 2}});
    let entries = flatten(&src, 16).unwrap();
    let chains: Vec<String> = entries.iter().map(|entry| entry.chain.join(".")).collect();
    assert_eq!(chains, vec!["a", "c.x", "c"]);
}

#[test]
fn test_children_precede_their_composite() {
    let src = json!({"c": {"a": 1, "b": {"d": 2}}});
    let entries = flatten(&src, 16).unwrap();
    let chains: Vec<String> = entries.iter().map(|entry| entry.chain.join(".")).collect();
    assert_eq!(chains, vec!["c.a", "c.b.d", "c.b", "c"]);
}

#[test]
fn test_array_indices_become_keys() {
    let src = json!({"d": [5, [6]]});
    let entries = flatten(&src, 16).unwrap();
    let chains: Vec<String> = entries.iter().map(|entry| entry.chain.join(".")).collect();
    assert_eq!(chains, vec!["d.0", "d.1.0", "d.1", "d"]);
}

#[test]
fn test_composite_entries_carry_the_container() {
    let src = json!({"c": {"a": 1}});
    let entries = flatten(&src, 16).unwrap();
    let composite = entries.iter().find(|entry| entry.chain == ["c"]).unwrap();
    assert_eq!(composite.value, &json!({"a": 1}));
}

#[test]
fn test_scalar_root_yields_no_entries() {
    assert!(flatten(&json!("leaf"), 16).unwrap().is_empty());
    assert!(flatten(&json!(42), 16).unwrap().is_empty());
}

#[test]
fn test_depth_limit() {
    let src = json!({"a": {"b": {"c": 1}}});
    assert!(flatten(&src, 8).is_ok());

    match flatten(&src, 2) {
        Err(Error::DepthLimitExceeded { depth }) => assert_eq!(depth, 2),
        other => panic!("Expected DepthLimitExceeded, got {:?}", other),
    }
}
