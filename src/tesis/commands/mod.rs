use crate::config::TesisConfig;
use crate::filters::ActiveFilter;
use crate::model::Record;
use crate::page::Page;
use crate::recent::RecentItems;

pub mod catalogs;
pub mod config;
pub mod preview;
pub mod search;

pub use catalogs::CatalogListing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

/// Structured outcome of a command. Each command fills the parts it produces
/// and leaves the rest empty.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub page: Option<Page<Record>>,
    pub related: Vec<Record>,
    pub active_filters: Vec<ActiveFilter>,
    pub listed_records: Vec<Record>,
    pub recent: RecentItems,
    pub catalog: Option<CatalogListing>,
    pub config: Option<TesisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_page(mut self, page: Page<Record>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_related(mut self, related: Vec<Record>) -> Self {
        self.related = related;
        self
    }

    pub fn with_active_filters(mut self, filters: Vec<ActiveFilter>) -> Self {
        self.active_filters = filters;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_recent(mut self, recent: RecentItems) -> Self {
        self.recent = recent;
        self
    }

    pub fn with_catalog(mut self, catalog: CatalogListing) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_config(mut self, config: TesisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Appends another result's records and messages, keeping the newest
    /// recent list. Used when a command runs once per id.
    pub fn merge(&mut self, other: CmdResult) {
        self.listed_records.extend(other.listed_records);
        self.messages.extend(other.messages);
        self.recent = other.recent;
    }
}
