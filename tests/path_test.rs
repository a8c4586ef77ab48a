use remap::path::{parse_chain, wildcard_positions, TargetPath};

fn chain(dotted: &str) -> Vec<String> {
    dotted.split('.').map(str::to_string).collect()
}

#[test]
fn test_parse_chain_splits_segments() {
    assert_eq!(parse_chain("a.b.c").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(parse_chain("a").unwrap(), vec!["a"]);
}

#[test]
fn test_parse_chain_rejects_empty_segments() {
    assert!(parse_chain("").is_err());
    assert!(parse_chain("a..b").is_err());
    assert!(parse_chain(".a").is_err());
    assert!(parse_chain("a.").is_err());
}

#[test]
fn test_wildcard_positions() {
    assert_eq!(wildcard_positions(&chain("from.*.a")), vec![1]);
    assert_eq!(wildcard_positions(&chain("*.x.*")), vec![0, 2]);
    assert!(wildcard_positions(&chain("a.b")).is_empty());
}

#[test]
fn test_target_path_literal_split() {
    let target = TargetPath::parse("window.url:http://localhost").unwrap();
    assert_eq!(target.chain(), ["window", "url"]);
    assert_eq!(target.literal(), Some("http://localhost"));
}

#[test]
fn test_target_path_without_literal() {
    let target = TargetPath::parse("window.url").unwrap();
    assert_eq!(target.chain(), ["window", "url"]);
    assert_eq!(target.literal(), None);
}

#[test]
fn test_target_path_rejects_empty_key_in_front_of_literal() {
    assert!(TargetPath::parse("a.:value").is_err());
}

#[test]
fn test_resolve_binds_by_rule_ordinal() {
    // rule `from.*.a` holds its only wildcard at chain index 1
    let target = TargetPath::parse("a.*").unwrap();
    let matched = chain("from.0.a");
    assert_eq!(target.resolve(&[1], &matched), vec!["a", "0"]);
}

#[test]
fn test_resolve_reorders_wildcards() {
    // rule `*.x.*` maps its wildcards to chain indices 0 and 2
    let target = TargetPath::parse("out.*.*").unwrap();
    let matched = chain("alpha.x.beta");
    assert_eq!(target.resolve(&[0, 2], &matched), vec!["out", "alpha", "beta"]);
}

#[test]
fn test_resolve_without_rule_wildcard_keeps_star() {
    let target = TargetPath::parse("x.*").unwrap();
    let matched = chain("a");
    assert_eq!(target.resolve(&[], &matched), vec!["x", "*"]);
}

#[test]
fn test_resolve_leaves_literal_key_untouched() {
    // a final segment carrying a literal is a key, never a wildcard
    let target = TargetPath::parse("*:fixed").unwrap();
    let matched = chain("a");
    assert_eq!(target.resolve(&[0], &matched), vec!["*"]);
    assert_eq!(target.literal(), Some("fixed"));
}
