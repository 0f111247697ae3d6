use crate::store::StoreError;
use thiserror::Error;

/// Fatal errors. Each of these aborts the current command; per-key store
/// failures during bulk operations are reported as messages instead and
/// never surface here.
#[derive(Error, Debug)]
pub enum SsmYamlError {
    #[error("{0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, SsmYamlError>;
