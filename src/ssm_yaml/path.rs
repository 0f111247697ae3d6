//! Path segment codec and the shared namespace ordering.

use std::cmp::Ordering;

/// Decompose an absolute path into segments relative to `prefix`.
///
/// The prefix is stripped, leading/trailing slashes trimmed, and the rest
/// split on "/". A path equal to the prefix yields zero segments — the root
/// value boundary, which callers must handle explicitly.
pub fn to_segments(path: &str, prefix: &str) -> Vec<String> {
    let relative = path.strip_prefix(prefix).unwrap_or(path);
    let relative = relative.trim_matches('/');
    if relative.is_empty() {
        return Vec::new();
    }
    relative.split('/').map(str::to_string).collect()
}

/// Rejoin segments under a prefix, collapsing the prefix's trailing slash.
pub fn join(segments: &[String], prefix: &str) -> String {
    let mut path = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// The single ordering used everywhere namespace keys are ranked: fewer
/// segments first, lexicographic within the same depth. The tree builder
/// pre-sorts inserts with it and the renderer orders siblings with it, so
/// numeric-index collisions resolve identically in both.
pub fn cmp_depth_then_lex(a: &str, b: &str) -> Ordering {
    let depth_a = a.split('/').count();
    let depth_b = b.split('/').count();
    depth_a.cmp(&depth_b).then_with(|| a.cmp(b))
}
