use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ParamStore;
use crate::tree;
use serde_yaml::Value;

#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    pub prefix: String,
    /// Skip sequence coercion: numeric-keyed mappings stay mappings.
    pub raw: bool,
}

/// Fetch everything under the prefix (decrypted) and rebuild the document.
pub fn run<S: ParamStore>(store: &S, opts: &SaveOptions) -> Result<CmdResult> {
    let params = store.get_by_path(&opts.prefix, true)?;
    let built = Value::Mapping(tree::build(&params, &opts.prefix));
    let document = if opts.raw { built } else { tree::coerce(built) };
    Ok(CmdResult::default().with_document(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn options(prefix: &str, raw: bool) -> SaveOptions {
        SaveOptions {
            prefix: prefix.to_string(),
            raw,
        }
    }

    #[test]
    fn rebuilds_the_document_with_sequences() {
        let fixture = StoreFixture::new()
            .with_param("/app/a/b", "1")
            .with_param("/app/a/c/0", "true")
            .with_param("/app/a/c/1", "x");

        let result = run(&fixture.store, &options("/app", false)).unwrap();
        let expected: Value =
            serde_yaml::from_str("a:\n  b: 1\n  c:\n    - true\n    - x\n").unwrap();
        assert_eq!(result.document, Some(expected));
    }

    #[test]
    fn raw_mode_keeps_numeric_keyed_mappings() {
        let fixture = StoreFixture::new()
            .with_param("/app/c/0", "a")
            .with_param("/app/c/1", "b");

        let result = run(&fixture.store, &options("/app", true)).unwrap();
        let expected: Value = serde_yaml::from_str("c:\n  \"0\": a\n  \"1\": b\n").unwrap();
        assert_eq!(result.document, Some(expected));
    }

    #[test]
    fn empty_namespace_yields_empty_mapping() {
        let fixture = StoreFixture::new().with_param("/other/a", "1");
        let result = run(&fixture.store, &options("/app", false)).unwrap();
        let document = result.document.unwrap();
        assert_eq!(document.as_mapping().map(|m| m.len()), Some(0));
    }
}
