//! Document flattener — the document → store half of the namespace mapping,
//! and the inverse of [`crate::tree::build`].

use crate::value;
use serde_yaml::Value;

/// A scalar leaf of a document, addressed by its absolute store path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub path: String,
    pub value: Value,
}

/// Flatten a document into (absolute path, scalar) pairs under `prefix`.
///
/// Depth-first walk: mapping children are visited in lexicographic key order
/// (never the container's native order, so output is stable across runs),
/// sequence children by zero-based decimal index. Scalars and nulls
/// terminate the recursion and emit the accumulated path. Empty containers
/// emit nothing.
pub fn flatten(doc: &Value, prefix: &str) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    walk(doc, prefix.trim_end_matches('/'), &mut entries);
    entries
}

/// The key set a delete targets; value information is dropped.
pub fn flatten_paths(doc: &Value, prefix: &str) -> Vec<String> {
    flatten(doc, prefix)
        .into_iter()
        .map(|entry| entry.path)
        .collect()
}

fn walk(node: &Value, path: &str, out: &mut Vec<FlatEntry>) {
    match node {
        Value::Mapping(map) => {
            let mut children: Vec<(String, &Value)> = map
                .iter()
                .map(|(key, child)| (key_label(key), child))
                .collect();
            children.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, child) in children {
                walk(child, &format!("{path}/{key}"), out);
            }
        }
        Value::Sequence(seq) => {
            for (index, child) in seq.iter().enumerate() {
                walk(child, &format!("{path}/{index}"), out);
            }
        }
        Value::Tagged(tagged) => walk(&tagged.value, path, out),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            out.push(FlatEntry {
                path: path.to_string(),
                value: node.clone(),
            });
        }
    }
}

/// YAML permits non-string mapping keys; the namespace only has strings.
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => value::encode(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn flattens_nested_document_under_prefix() {
        let document = doc("a:\n  b: 1\n  c:\n    - true\n    - x\n");
        let paths = flatten_paths(&document, "/app");
        assert_eq!(paths, vec!["/app/a/b", "/app/a/c/0", "/app/a/c/1"]);
    }

    #[test]
    fn trailing_prefix_slash_is_collapsed() {
        let document = doc("a: 1\n");
        assert_eq!(flatten_paths(&document, "/app/"), vec!["/app/a"]);
    }

    #[test]
    fn mapping_keys_are_visited_lexicographically() {
        let document = doc("b: 1\na: 2\nc: 3\n");
        assert_eq!(
            flatten_paths(&document, "/p"),
            vec!["/p/a", "/p/b", "/p/c"]
        );
    }

    #[test]
    fn scalar_document_emits_the_prefix_itself() {
        let document = doc("5");
        let entries = flatten(&document, "/app");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/app");
    }

    #[test]
    fn nulls_are_leaves() {
        let document = doc("a: null\n");
        let entries = flatten(&document, "/app");
        assert_eq!(entries[0].value, Value::Null);
    }

    #[test]
    fn non_string_keys_are_stringified() {
        let document = doc("1: one\ntrue: yes\n");
        let paths = flatten_paths(&document, "/p");
        assert_eq!(paths, vec!["/p/1", "/p/true"]);
    }

    #[test]
    fn flatten_then_rebuild_is_identity() {
        let document = doc("a:\n  b: 1\n  c:\n    - true\n    - x\nd: hi\n");
        let entries = flatten(&document, "/app");

        let params: Vec<crate::model::Parameter> = entries
            .iter()
            .map(|entry| {
                crate::model::Parameter::new(
                    &entry.path,
                    crate::value::encode(&entry.value),
                    crate::model::Classification::Plain,
                )
            })
            .collect();
        let rebuilt = tree::coerce(Value::Mapping(tree::build(&params, "/app")));
        assert_eq!(rebuilt, document);
    }
}
