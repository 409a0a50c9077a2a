use crate::config::WisataConfig;
use crate::model::Attraction;
use crate::query::AttractionView;

pub mod config;
pub mod create;
pub mod delete;
pub mod find;
pub mod get;
pub mod import;
pub mod list;
pub mod nearest;
pub mod top;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

/// What a command hands back to the caller.
///
/// Queries fill `listed` with projected views; writes fill `affected` with
/// the full stored records.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Attraction>,
    pub listed: Vec<AttractionView>,
    pub config: Option<WisataConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Attraction>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, views: Vec<AttractionView>) -> Self {
        self.listed = views;
        self
    }

    pub fn with_config(mut self, config: WisataConfig) -> Self {
        self.config = Some(config);
        self
    }
}
