use crate::commands::CmdResult;
use crate::flatten;
use crate::render::{self, Annotation, RenderOptions};
use crate::sensitive;
use crate::value;
use serde_yaml::Value;
use std::collections::HashMap;

/// Render a parsed YAML document as a tree. Pure — no store involved.
///
/// Every node is classified by its path, so intermediate names like `auth`
/// carry the lock too; values only exist at scalar leaves.
pub fn run(doc: &Value, show_values: bool) -> CmdResult {
    let entries = flatten::flatten(doc, "");

    let leaf_values: HashMap<String, String> = entries
        .iter()
        .map(|entry| (entry.path.clone(), value::encode(&entry.value)))
        .collect();
    let paths: Vec<String> = entries.into_iter().map(|entry| entry.path).collect();

    let lines = render::render(
        &paths,
        "",
        |full_path| {
            Some(Annotation {
                secret: sensitive::is_sensitive(full_path),
                value: leaf_values.get(full_path).cloned(),
            })
        },
        RenderOptions { show_values },
    );

    CmdResult::default().with_tree_lines(lines)
}
