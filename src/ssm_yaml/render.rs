//! Box-drawing tree renderer for the flat namespace and for parsed YAML.
//!
//! The tree is reconstructed purely from the set of distinct relative paths,
//! so both the `tree` and `yaml-tree` commands share one renderer.

use crate::path;
use colored::Colorize;
use std::collections::BTreeMap;

/// Decoration for one node, looked up by full path.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub secret: bool,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub show_values: bool,
}

#[derive(Default)]
struct NameNode {
    children: BTreeMap<String, NameNode>,
}

/// Render relative "/"-delimited paths as an indented tree with connectors.
///
/// `annotate` is consulted with the full path (`root` joined with the node's
/// relative path) and may decorate any node, not just leaves. Siblings at
/// every level are ordered by the shared namespace comparator applied to the
/// immediate child name — equal depth, so effectively lexicographic.
pub fn render<F>(paths: &[String], root: &str, annotate: F, opts: RenderOptions) -> Vec<String>
where
    F: Fn(&str) -> Option<Annotation>,
{
    let mut tree = NameNode::default();
    for relative in paths {
        let mut node = &mut tree;
        for part in relative.trim_matches('/').split('/') {
            if part.is_empty() {
                continue;
            }
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    let mut lines = Vec::new();
    walk(
        &tree,
        "",
        root.trim_end_matches('/'),
        &annotate,
        opts,
        &mut lines,
    );
    lines
}

fn walk<F>(
    node: &NameNode,
    indent: &str,
    full_path: &str,
    annotate: &F,
    opts: RenderOptions,
    out: &mut Vec<String>,
) where
    F: Fn(&str) -> Option<Annotation>,
{
    let mut names: Vec<&String> = node.children.keys().collect();
    names.sort_by(|a, b| path::cmp_depth_then_lex(a.as_str(), b.as_str()));

    let count = names.len();
    for (position, name) in names.into_iter().enumerate() {
        let last = position + 1 == count;
        let connector = if last { "└── " } else { "├── " };

        let child_path = format!("{full_path}/{name}");
        let annotation = annotate(&child_path).unwrap_or_default();

        let is_index = name.parse::<usize>().is_ok();
        let mut line = format!(
            "{indent}{connector}{}",
            style_label(name, annotation.secret, is_index)
        );
        if annotation.secret {
            line.push_str(" 🔒");
        }
        if opts.show_values {
            if let Some(value) = &annotation.value {
                line.push_str(&format!(" = {}", value.bright_black()));
            }
        }
        out.push(line);

        let child_indent = format!("{indent}{}", if last { "    " } else { "│   " });
        walk(
            &node.children[name],
            &child_indent,
            &child_path,
            annotate,
            opts,
            out,
        );
    }
}

/// Pure label styling: secret names cyan, numeric sequence indices yellow,
/// everything else unstyled.
pub fn style_label(label: &str, is_secret: bool, is_numeric_index: bool) -> String {
    if is_secret {
        label.cyan().to_string()
    } else if is_numeric_index {
        label.yellow().to_string()
    } else {
        label.normal().to_string()
    }
}
