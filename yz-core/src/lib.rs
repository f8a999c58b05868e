//! Yz Core - line tokenizer and editor mode (pure logic, no IO)
//!
//! Contains the per-line scanner, the editor-facing language mode and an
//! incremental document cache. Only operates on in-memory strings.
//!
//! Cross-line state is passed explicitly as [`ScanState`], never held globally.

pub mod document;
pub mod kit;
pub mod mode;

// Re-export common types
pub use document::{Document, DocumentError, FoldRegion};
pub use kit::lexer::{scan_line, ClassificationTables, LineScan, ScanState, Token, TokenKind};
pub use mode::{LanguageMode, ModeInfo, ModeRegistry, YzMode};

// Re-export config types from yz-config
pub use yz_config::{Phase, TableConfig};
