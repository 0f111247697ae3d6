use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::flatten;
use crate::model::{Classification, Parameter};
use crate::sensitive;
use crate::store::ParamStore;
use crate::value;
use serde_yaml::Value;

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub prefix: String,
    /// Upload everything as Secret.
    pub secure: bool,
    /// Auto-select Secret for sensitive-looking paths.
    pub auto_secure: bool,
    pub overwrite: bool,
    pub show_values: bool,
}

/// Flatten the document and write each scalar to the store.
///
/// Per-key failures become error messages and the loop continues; only
/// fatal errors (none today — the flattener is total) would abort.
pub fn run<S: ParamStore>(store: &mut S, doc: &Value, opts: &LoadOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for entry in flatten::flatten(doc, &opts.prefix) {
        let classification = if opts.secure
            || (opts.auto_secure && sensitive::is_sensitive(&entry.path))
        {
            Classification::Secret
        } else {
            Classification::Plain
        };

        let raw = value::encode(&entry.value);
        let lock = if classification.is_secret() { " 🔒" } else { "" };
        if opts.show_values {
            result.add_message(CmdMessage::info(format!(
                "Uploading {}{} = {}",
                entry.path, lock, raw
            )));
        } else {
            result.add_message(CmdMessage::info(format!("Uploading {}{}", entry.path, lock)));
        }

        let param = Parameter::new(&entry.path, raw, classification);
        if let Err(err) = store.put(&param, opts.overwrite) {
            result.add_message(CmdMessage::error(format!(
                "Failed to upload {}: {}",
                entry.path, err
            )));
        }
    }

    Ok(result)
}
