//! Storage layer. The [`ParamStore`] trait abstracts the flat parameter
//! namespace so command logic can run against [`ssm::SsmStore`] in
//! production and [`memory::InMemoryStore`] in tests.

use crate::model::Parameter;
use thiserror::Error;

pub mod memory;
pub mod ssm;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("parameter already exists: {0}")]
    AlreadyExists(String),

    #[error("failed to reach the parameter store: {0}")]
    Connection(String),

    /// The store's native error code and message, kept verbatim.
    #[error("[{code}] {message}")]
    Api { code: String, message: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Abstract interface to the parameter namespace.
///
/// One attempt per call; no retries anywhere. Callers doing bulk work catch
/// per-key errors themselves so one bad key cannot abort the rest.
pub trait ParamStore {
    /// Fetch a single parameter by absolute path.
    fn get(&self, path: &str) -> StoreResult<Parameter>;

    /// Recursively fetch every parameter under `prefix`, paginating as
    /// needed. `decrypt` asks the store to return Secret values in clear.
    fn get_by_path(&self, prefix: &str, decrypt: bool) -> StoreResult<Vec<Parameter>>;

    /// Write one parameter. Refuses to replace an existing value unless
    /// `overwrite` is set (then: `StoreError::AlreadyExists`).
    fn put(&mut self, param: &Parameter, overwrite: bool) -> StoreResult<()>;

    /// Remove one parameter.
    fn delete(&mut self, path: &str) -> StoreResult<()>;
}
