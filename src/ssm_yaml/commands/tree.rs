use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Parameter;
use crate::render::{self, Annotation, RenderOptions};
use crate::store::ParamStore;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub prefix: String,
    /// Ask the store to decrypt Secret values (needs IAM permission).
    pub decrypt: bool,
    pub show_values: bool,
}

/// Render the store namespace under the prefix as a tree. Only actual
/// parameters get annotations; intermediate path components are bare names.
pub fn run<S: ParamStore>(store: &S, opts: &TreeOptions) -> Result<CmdResult> {
    let params = store.get_by_path(&opts.prefix, opts.decrypt)?;

    let by_path: HashMap<&str, &Parameter> =
        params.iter().map(|param| (param.path.as_str(), param)).collect();

    let root = opts.prefix.trim_end_matches('/');
    let relative: Vec<String> = params
        .iter()
        .filter_map(|param| {
            let rel = param.path.strip_prefix(root).unwrap_or(&param.path);
            let rel = rel.trim_matches('/');
            (!rel.is_empty()).then(|| rel.to_string())
        })
        .collect();

    let lines = render::render(
        &relative,
        root,
        |full_path| {
            by_path.get(full_path).map(|param| Annotation {
                secret: param.classification.is_secret(),
                value: opts.show_values.then(|| param.value.clone()),
            })
        },
        RenderOptions {
            show_values: opts.show_values,
        },
    );

    Ok(CmdResult::default().with_tree_lines(lines))
}
