use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::flatten;
use crate::store::ParamStore;
use serde_yaml::Value;

/// One key scheduled for deletion, with its classification for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedKey {
    pub path: String,
    pub secret: bool,
}

/// The keys a delete will target, derived from a YAML file. Built up front
/// so the CLI can show the list and ask for confirmation before anything
/// is removed.
#[derive(Debug, Clone, Default)]
pub struct DeletePlan {
    pub keys: Vec<PlannedKey>,
}

impl DeletePlan {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Flatten the document into its key set and look up each key's
/// classification. Lookup failures (key absent, no permission) are
/// non-fatal — the key is still planned, just without a lock marker.
pub fn plan<S: ParamStore>(store: &S, doc: &Value, prefix: &str) -> DeletePlan {
    let keys = flatten::flatten_paths(doc, prefix)
        .into_iter()
        .map(|path| {
            let secret = store
                .get(&path)
                .map(|param| param.classification.is_secret())
                .unwrap_or(false);
            PlannedKey { path, secret }
        })
        .collect();
    DeletePlan { keys }
}

/// Delete every planned key, one at a time. Per-key failures are reported
/// and the loop continues.
pub fn execute<S: ParamStore>(store: &mut S, plan: &DeletePlan) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for key in &plan.keys {
        match store.delete(&key.path) {
            Ok(()) => {
                result.add_message(CmdMessage::success(format!("✅ Deleted {}", key.path)));
            }
            Err(err) => {
                result.add_message(CmdMessage::error(format!(
                    "Failed to delete {}: {}",
                    key.path, err
                )));
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn plan_lists_flattened_keys_with_classification() {
        let fixture = StoreFixture::new()
            .with_secret("/app/db/password", "hunter2")
            .with_param("/app/db/host", "localhost");

        let document = doc("db:\n  password: x\n  host: y\n");
        let plan = plan(&fixture.store, &document, "/app");

        assert_eq!(
            plan.keys,
            vec![
                PlannedKey {
                    path: "/app/db/host".to_string(),
                    secret: false,
                },
                PlannedKey {
                    path: "/app/db/password".to_string(),
                    secret: true,
                },
            ]
        );
    }

    #[test]
    fn plan_tolerates_absent_keys() {
        let fixture = StoreFixture::new();
        let document = doc("a: 1\n");
        let plan = plan(&fixture.store, &document, "/app");
        assert_eq!(plan.keys.len(), 1);
        assert!(!plan.keys[0].secret);
    }

    #[test]
    fn execute_removes_keys_and_reports_each() {
        let mut fixture = StoreFixture::new()
            .with_param("/app/a", "1")
            .with_param("/app/b", "2");
        let document = doc("a: 1\nb: 2\n");

        let plan = plan(&fixture.store, &document, "/app");
        let result = execute(&mut fixture.store, &plan).unwrap();

        assert!(fixture.store.is_empty());
        assert_eq!(result.messages.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Success));
    }

    #[test]
    fn one_missing_key_does_not_abort_the_rest() {
        let mut fixture = StoreFixture::new().with_param("/app/b", "2");
        let document = doc("a: 1\nb: 2\n");

        let plan = plan(&fixture.store, &document, "/app");
        let result = execute(&mut fixture.store, &plan).unwrap();

        assert!(result.has_errors());
        assert!(fixture.store.is_empty());
        assert_eq!(result.messages[1].content, "✅ Deleted /app/b");
    }
}
