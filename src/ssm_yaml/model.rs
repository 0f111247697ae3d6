use serde::{Deserialize, Serialize};

/// At-rest handling of a stored value. `Secret` maps to SSM `SecureString`;
/// the encryption itself is opaque to this tool, only the tag travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Plain,
    Secret,
}

impl Classification {
    pub fn is_secret(self) -> bool {
        matches!(self, Classification::Secret)
    }
}

/// A single entry in the parameter store. The absolute "/"-delimited path is
/// the primary key; values are always stored as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub path: String,
    pub value: String,
    pub classification: Classification,
}

impl Parameter {
    pub fn new(
        path: impl Into<String>,
        value: impl Into<String>,
        classification: Classification,
    ) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            classification,
        }
    }
}
