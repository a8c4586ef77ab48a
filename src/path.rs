//! Path chain parsing and wildcard resolution.
//! A pattern is a dotted string such as `window.location` or `from.*.a`.
//! Target patterns may additionally carry a `key:literal` form on their
//! final segment, e.g. `window.url:http://localhost`.

use crate::constants::{LITERAL_SEPARATOR, PATH_SEPARATOR, WILDCARD};
use crate::error::{Error, Result};

/// Splits a dotted pattern into its path chain.
///
/// # Errors
/// * `Error::PatternError` if the pattern is empty or contains an empty segment
pub fn parse_chain(pattern: &str) -> Result<Vec<String>> {
    let chain: Vec<String> = pattern.split(PATH_SEPARATOR).map(str::to_string).collect();
    if chain.iter().any(|segment| segment.is_empty()) {
        return Err(Error::PatternError {
            pattern: pattern.to_string(),
            reason: "empty path segment".to_string(),
        });
    }
    Ok(chain)
}

/// Returns the chain indices of every wildcard segment, in order.
///
/// The resulting table maps a wildcard's ordinal (its 0-based occurrence
/// count when scanning left to right) to its position in the chain, so the
/// n-th wildcard of a rule pattern sits at `table[n]`.
pub fn wildcard_positions(chain: &[String]) -> Vec<usize> {
    chain
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.as_str() == WILDCARD)
        .map(|(index, _)| index)
        .collect()
}

/// A parsed target pattern.
///
/// The final segment is split once at parse time: a plain key writes the
/// matched value through, while a `key:literal` segment writes the literal
/// string verbatim instead of the matched value.
#[derive(Debug, Clone)]
pub struct TargetPath {
    chain: Vec<String>,
    literal: Option<String>,
}

impl std::fmt::Display for TargetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self.chain.join(&PATH_SEPARATOR.to_string());
        match &self.literal {
            Some(literal) => write!(f, "{joined}{LITERAL_SEPARATOR}{literal}"),
            None => write!(f, "{joined}"),
        }
    }
}

impl TargetPath {
    /// Parses a target pattern, splitting an embedded literal off the final
    /// segment at the first `:`; everything after it is kept verbatim.
    ///
    /// # Errors
    /// * `Error::PatternError` if the pattern has an empty segment or an
    ///   empty key in front of a literal
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut chain = parse_chain(pattern)?;
        let literal = match chain.last_mut() {
            Some(last) => match last.find(LITERAL_SEPARATOR) {
                Some(index) => {
                    let literal = last[index + 1..].to_string();
                    let key = last[..index].to_string();
                    if key.is_empty() {
                        return Err(Error::PatternError {
                            pattern: pattern.to_string(),
                            reason: "empty key in front of a literal".to_string(),
                        });
                    }
                    *last = key;
                    Some(literal)
                }
                None => None,
            },
            None => None,
        };
        Ok(Self { chain, literal })
    }

    /// The target's path chain; for a literal target the final segment is
    /// the key in front of the separator.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// The embedded literal value, if the final segment carried one.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Substitutes every wildcard of the target chain, producing the concrete
    /// chain to write to.
    ///
    /// Correspondence is by wildcard ordinal on the rule side: the n-th
    /// wildcard of the target takes the segment of `matched_chain` found at
    /// `rule_wildcards[n]`, the position of the rule's n-th wildcard. This is
    /// what lets a target reorder or drop wildcards relative to its rule
    /// (`from.*.a` -> `a.*` binds the target's wildcard to rule position 1).
    /// A target wildcard with no rule counterpart is copied through verbatim
    /// and becomes a plain `*` segment. The key of a `key:literal` final
    /// segment is never substituted.
    pub fn resolve(&self, rule_wildcards: &[usize], matched_chain: &[String]) -> Vec<String> {
        let mut ordinal = 0;
        let last_index = self.chain.len().saturating_sub(1);
        self.chain
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                if self.literal.is_some() && index == last_index {
                    return segment.clone();
                }
                if segment.as_str() != WILDCARD {
                    return segment.clone();
                }
                let resolved = rule_wildcards
                    .get(ordinal)
                    .and_then(|position| matched_chain.get(*position))
                    .cloned()
                    .unwrap_or_else(|| segment.clone());
                ordinal += 1;
                resolved
            })
            .collect()
    }
}
