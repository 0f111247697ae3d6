//! Nested tree builder and sequence coercion — the store → document half of
//! the namespace mapping.

use crate::model::Parameter;
use crate::path;
use crate::value;
use serde_yaml::{Mapping, Value};

/// Build a nested mapping from flat store parameters under `prefix`.
///
/// Inserts are pre-sorted shallow-first then lexicographic so shallow
/// entries are established before deep ones and output key order is stable
/// across runs. Duplicate full paths are last-write-wins (the store keys
/// are unique, so this should not occur).
pub fn build(params: &[Parameter], prefix: &str) -> Mapping {
    let mut ordered: Vec<&Parameter> = params.iter().collect();
    ordered.sort_by(|a, b| path::cmp_depth_then_lex(&a.path, &b.path));

    let mut tree = Mapping::new();
    for param in ordered {
        let segments = path::to_segments(&param.path, prefix);
        if segments.is_empty() {
            // A value stored at the prefix itself has no key to hang from.
            log::debug!("skipping root-level parameter {}", param.path);
            continue;
        }
        insert(&mut tree, &segments, value::decode(&param.value));
    }
    tree
}

/// Descend `tree`, creating intermediate mappings for every segment except
/// the last, and write `val` at the final segment. An existing non-mapping
/// intermediate is replaced rather than panicking over.
pub fn insert(tree: &mut Mapping, segments: &[String], val: Value) {
    match segments {
        [] => {}
        [leaf] => {
            tree.insert(Value::String(leaf.clone()), val);
        }
        [head, rest @ ..] => {
            let key = Value::String(head.clone());
            if !matches!(tree.get(&key), Some(Value::Mapping(_))) {
                tree.insert(key.clone(), Value::Mapping(Mapping::new()));
            }
            if let Some(Value::Mapping(child)) = tree.get_mut(&key) {
                insert(child, rest, val);
            }
        }
    }
}

/// Convert numeric-keyed mappings into sequences, bottom-up.
///
/// A mapping becomes a sequence when, and only when, it is non-empty and
/// every key parses as a non-negative base-10 integer ("01" counts as 1).
/// The sequence spans `0..=max`, with nulls at absent indices. Empty
/// mappings stay mappings — an empty map and an empty list are
/// indistinguishable in the flat namespace, and the map reading wins.
pub fn coerce(node: Value) -> Value {
    match node {
        Value::Mapping(map) => {
            let coerced: Mapping = map.into_iter().map(|(k, v)| (k, coerce(v))).collect();
            coerce_mapping(coerced)
        }
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(coerce).collect()),
        scalar => scalar,
    }
}

fn coerce_mapping(map: Mapping) -> Value {
    let Some(indices) = numeric_indices(&map) else {
        return Value::Mapping(map);
    };
    let max = indices.iter().copied().max().unwrap_or(0);
    let Some(len) = max.checked_add(1) else {
        return Value::Mapping(map);
    };
    let mut sequence = vec![Value::Null; len];
    for (index, (_, child)) in indices.into_iter().zip(map) {
        sequence[index] = child;
    }
    Value::Sequence(sequence)
}

/// All keys parse as non-negative integers; `None` for empty mappings or any
/// non-numeric key.
fn numeric_indices(map: &Mapping) -> Option<Vec<usize>> {
    if map.is_empty() {
        return None;
    }
    map.keys()
        .map(|key| match key {
            Value::String(s) => s.parse::<usize>().ok(),
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            _ => None,
        })
        .collect()
}
