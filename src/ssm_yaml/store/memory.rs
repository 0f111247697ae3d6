use super::{ParamStore, StoreError, StoreResult};
use crate::model::{Classification, Parameter};
use std::collections::BTreeMap;

/// In-memory store for testing and development. Does NOT persist data; the
/// `decrypt` flag is accepted and ignored since nothing is encrypted.
#[derive(Default)]
pub struct InMemoryStore {
    params: BTreeMap<String, Parameter>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl ParamStore for InMemoryStore {
    fn get(&self, path: &str) -> StoreResult<Parameter> {
        self.params
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    fn get_by_path(&self, prefix: &str, _decrypt: bool) -> StoreResult<Vec<Parameter>> {
        let root = format!("{}/", prefix.trim_end_matches('/'));
        Ok(self
            .params
            .values()
            .filter(|param| param.path.starts_with(&root))
            .cloned()
            .collect())
    }

    fn put(&mut self, param: &Parameter, overwrite: bool) -> StoreResult<()> {
        if !overwrite && self.params.contains_key(&param.path) {
            return Err(StoreError::AlreadyExists(param.path.clone()));
        }
        self.params.insert(param.path.clone(), param.clone());
        Ok(())
    }

    fn delete(&mut self, path: &str) -> StoreResult<()> {
        if self.params.remove(path).is_none() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_param(mut self, path: &str, value: &str) -> Self {
            let param = Parameter::new(path, value, Classification::Plain);
            self.store.put(&param, true).unwrap();
            self
        }

        pub fn with_secret(mut self, path: &str, value: &str) -> Self {
            let param = Parameter::new(path, value, Classification::Secret);
            self.store.put(&param, true).unwrap();
            self
        }
    }
}
