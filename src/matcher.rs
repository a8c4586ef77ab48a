//! Rule pattern matching over flattened entries.

use crate::constants::WILDCARD;
use crate::flatten::Entry;

/// Whether a rule chain selects a concrete chain.
///
/// The chains must be of equal length and every rule segment must either be
/// the wildcard token or equal the candidate segment exactly. A wildcard
/// spans exactly one segment, never zero or multiple.
pub fn chain_matches(pattern: &[String], chain: &[String]) -> bool {
    if pattern.len() != chain.len() {
        return false;
    }
    pattern
        .iter()
        .zip(chain)
        .all(|(rule, segment)| rule.as_str() == WILDCARD || rule == segment)
}

/// All entries whose chain the rule pattern selects, in flattening order.
/// A pattern may select many entries (a wildcard rule matching every sibling
/// under a composite) or none at all.
pub fn find_matches<'e, 'a>(entries: &'e [Entry<'a>], pattern: &[String]) -> Vec<&'e Entry<'a>> {
    entries
        .iter()
        .filter(|entry| chain_matches(pattern, &entry.chain))
        .collect()
}
