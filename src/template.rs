//! Template parsing and application.
//! A template is an ordered map from rule pattern to target pattern.
//! Applying it flattens the source once, then replays every rule against the
//! entry list in the map's insertion order.

use crate::accessor::set;
use crate::constants::{DEFAULT_MAX_DEPTH, PATH_SEPARATOR};
use crate::error::Result;
use crate::flatten::flatten;
use crate::matcher::find_matches;
use crate::path::{parse_chain, wildcard_positions, TargetPath};
use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

/// A single parsed template rule.
#[derive(Debug, Clone)]
struct Rule {
    pattern: Vec<String>,
    wildcards: Vec<usize>,
    target: TargetPath,
}

/// A parsed template, ready to apply to any number of sources.
#[derive(Debug, Clone)]
pub struct Template {
    rules: Vec<Rule>,
    max_depth: usize,
}

impl Template {
    /// Parses every rule of the mapping once: the rule chain, the table of
    /// its wildcard positions, and the target path with its optional
    /// embedded literal. Rules keep the map's insertion order; later rules
    /// overwrite earlier writes to the same target location.
    ///
    /// # Errors
    /// * `Error::PatternError` for an empty pattern or an empty path segment
    pub fn parse(rules: &IndexMap<String, String>) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|(rule_pattern, target_pattern)| {
                let pattern = parse_chain(rule_pattern)?;
                let wildcards = wildcard_positions(&pattern);
                let target = TargetPath::parse(target_pattern)?;
                Ok(Rule { pattern, wildcards, target })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules, max_depth: DEFAULT_MAX_DEPTH })
    }

    /// Replaces the default limit on source nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Applies the template to `source`, returning a freshly created object.
    /// An empty template produces an empty object.
    ///
    /// # Errors
    /// * `Error::DepthLimitExceeded` if the source nests too deeply
    pub fn apply(&self, source: &Value) -> Result<Value> {
        let mut target = Value::Object(Map::new());
        self.apply_into(source, &mut target)?;
        Ok(target)
    }

    /// Applies the template to `source`, writing into an existing `target`.
    ///
    /// The source is never mutated. The target is mutated in place with its
    /// unrelated properties left untouched, so repeated calls against the
    /// same target merge their results. A rule that matches no entry writes
    /// nothing, and a target wildcard the rule cannot bind is written as a
    /// plain `*` segment; neither is an error.
    ///
    /// # Errors
    /// * `Error::DepthLimitExceeded` if the source nests too deeply
    pub fn apply_into(&self, source: &Value, target: &mut Value) -> Result<()> {
        let entries = flatten(source, self.max_depth)?;
        debug!("flattened source into {} entries", entries.len());

        for rule in &self.rules {
            let matches = find_matches(&entries, &rule.pattern);
            debug!(
                "rule '{}' -> '{}' matched {} entries",
                rule.pattern.join(&PATH_SEPARATOR.to_string()),
                rule.target,
                matches.len()
            );

            for entry in matches {
                let chain = rule.target.resolve(&rule.wildcards, &entry.chain);
                let value = match rule.target.literal() {
                    Some(literal) => Value::String(literal.to_string()),
                    None => entry.value.clone(),
                };
                set(target, &chain, value);
            }
        }

        Ok(())
    }
}

/// One-shot form of [`Template::parse`] followed by [`Template::apply_into`].
///
/// # Errors
/// * `Error::PatternError` for an unparsable rule or target pattern
/// * `Error::DepthLimitExceeded` if the source nests too deeply
pub fn apply_template(
    rules: &IndexMap<String, String>,
    source: &Value,
    target: &mut Value,
) -> Result<()> {
    Template::parse(rules)?.apply_into(source, target)
}
