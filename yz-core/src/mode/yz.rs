//! The Yz language mode

use super::{FoldStrategy, LanguageMode, ModeInfo};
use crate::kit::lexer::{ClassificationTables, LineTokens, ScanState};
use yz_config::TableConfig;

/// MIME names the host can declare buffers with
pub const YZ_MIME_TYPES: &[&str] = &["text/x-yz", "text/yz"];

static YZ_MODE_INFO: ModeInfo = ModeInfo {
    name: "yz",
    mime_types: YZ_MIME_TYPES,
    extensions: &["yz"],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    fold: FoldStrategy::Brace,
};

/// Yz mode: metadata plus the classification tables its scanner uses
#[derive(Debug, Clone, Default)]
pub struct YzMode {
    tables: ClassificationTables,
}

impl YzMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: ClassificationTables) -> Self {
        Self { tables }
    }

    /// Default tables extended with the configured vocabulary
    pub fn from_config(config: &TableConfig) -> Self {
        Self::with_tables(ClassificationTables::from_config(config))
    }
}

impl LanguageMode for YzMode {
    fn info(&self) -> &ModeInfo {
        &YZ_MODE_INFO
    }

    fn line_tokens<'a>(&'a self, line: &'a str, state: ScanState) -> LineTokens<'a, 'a> {
        LineTokens::new(line, state, &self.tables)
    }
}
