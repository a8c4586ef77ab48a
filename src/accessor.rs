//! Reading and writing values at a path chain.
//! The setter creates missing intermediate containers on the way down and
//! degrades silently instead of failing on paths it cannot write.

use serde_json::{Map, Value};

/// Reads the value at `chain`, or `None` when any segment along the way is
/// absent. Array containers are indexed by parsing the segment as a decimal
/// index; reading never fails.
pub fn get<'a>(value: &'a Value, chain: &[String]) -> Option<&'a Value> {
    let mut current = value;
    for segment in chain {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Writes `value` at `chain`, creating an empty object wherever an
/// intermediate key is absent and silently replacing any non-container found
/// along the way, the target root included. Last write wins.
///
/// A numeric segment against an existing array writes by index, extending
/// the array with `Null` up to an out-of-range index; a non-numeric segment
/// against an array is a no-op, as is an empty chain.
pub fn set(target: &mut Value, chain: &[String], value: Value) {
    let Some((last, intermediate)) = chain.split_last() else {
        return;
    };

    if !is_container(target) {
        *target = Value::Object(Map::new());
    }

    let mut current = target;
    for segment in intermediate {
        current = match current {
            Value::Object(map) => {
                let slot = map
                    .entry(segment.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !is_container(slot) {
                    *slot = Value::Object(Map::new());
                }
                slot
            }
            Value::Array(items) => {
                let Ok(index) = segment.parse::<usize>() else {
                    return;
                };
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                let slot = &mut items[index];
                if !is_container(slot) {
                    *slot = Value::Object(Map::new());
                }
                slot
            }
            _ => return,
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
        }
        Value::Array(items) => {
            let Ok(index) = last.parse::<usize>() else {
                return;
            };
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items[index] = value;
        }
        _ => {}
    }
}
