//! Source flattening.
//! Walks a nested value and produces one addressable entry per key at every
//! depth, composites included, with a composite's entry following the
//! entries of its descendants.

use crate::error::{Error, Result};
use serde_json::Value;

/// A flattened source entry: the path chain of a key and the value it holds.
#[derive(Debug)]
pub struct Entry<'a> {
    pub chain: Vec<String>,
    pub value: &'a Value,
}

enum Task<'a> {
    Visit(Vec<String>, &'a Value),
    Emit(Vec<String>, &'a Value),
}

/// Child keys of a container in iteration order. Array indices become
/// decimal string keys; leaves have no children.
fn children(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Object(map) => Some(map.iter().map(|(key, child)| (key.clone(), child)).collect()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, child)| (index.to_string(), child))
                .collect(),
        ),
        _ => None,
    }
}

/// Flattens `source` into an ordered entry list.
///
/// Keys are visited in iteration order, depth-first; the entry of a composite
/// value is appended after the entries of its children. The root itself
/// yields no entry, so a non-container source flattens to an empty list.
/// The source is never mutated.
///
/// Traversal runs on an explicit work stack so a cyclic or pathologically
/// deep source cannot exhaust the call stack: once a chain grows beyond
/// `max_depth` segments the walk stops.
///
/// # Errors
/// * `Error::DepthLimitExceeded` if the source nests deeper than `max_depth`
pub fn flatten(source: &Value, max_depth: usize) -> Result<Vec<Entry<'_>>> {
    let mut entries = Vec::new();
    let mut stack: Vec<Task> = Vec::new();

    if let Some(top) = children(source) {
        for (key, value) in top.into_iter().rev() {
            stack.push(Task::Visit(vec![key], value));
        }
    }

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(chain, value) => {
                if chain.len() > max_depth {
                    return Err(Error::DepthLimitExceeded { depth: max_depth });
                }
                stack.push(Task::Emit(chain.clone(), value));
                if let Some(pairs) = children(value) {
                    for (key, child) in pairs.into_iter().rev() {
                        let mut child_chain = chain.clone();
                        child_chain.push(key);
                        stack.push(Task::Visit(child_chain, child));
                    }
                }
            }
            Task::Emit(chain, value) => entries.push(Entry { chain, value }),
        }
    }

    Ok(entries)
}
