//! Business logic for each subcommand. Command functions never touch
//! stdout/stderr; they return a [`CmdResult`] carrying data and ordered
//! messages for the CLI layer to print.

pub mod delete;
pub mod load;
pub mod save;
pub mod tree;
pub mod yaml_tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The rebuilt document, for `save`.
    pub document: Option<serde_yaml::Value>,
    /// Rendered tree lines, for `tree` and `yaml-tree`.
    pub tree_lines: Vec<String>,
    /// Ordered per-key progress and failure messages.
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_document(mut self, document: serde_yaml::Value) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_tree_lines(mut self, lines: Vec<String>) -> Self {
        self.tree_lines = lines;
        self
    }

    /// True when any per-key operation failed.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == MessageLevel::Error)
    }
}
