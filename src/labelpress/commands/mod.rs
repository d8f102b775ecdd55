use crate::model::CatalogRecord;
use std::path::PathBuf;

pub mod export;
pub mod helpers;
pub mod options;
pub mod preview;
pub mod resolve;

#[derive(Debug, Clone)]
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

/// Structured outcome of a command: data for the caller to present, never
/// anything written to a terminal from here.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub options: Vec<String>,
    pub record: Option<CatalogRecord>,
    pub artifact: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_record(mut self, record: CatalogRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_artifact(mut self, artifact: PathBuf) -> Self {
        self.artifact = Some(artifact);
        self
    }
}
