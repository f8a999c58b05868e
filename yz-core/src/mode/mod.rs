//! Editor integration shell
//!
//! Wraps the line scanner with the contract an editor host expects:
//! a start state, whole-line and single-token scanning, and static metadata
//! (comment markers, fold strategy) the rendering layer reads.

pub mod registry;
pub mod yz;

pub use registry::{ModeRegistry, RegistryError};
pub use yz::YzMode;

use crate::kit::lexer::{LineScan, LineTokens, ScanState, Token, TokenKind};
use serde::Serialize;
use tracing::trace;

/// How the host computes collapsible regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldStrategy {
    /// Regions delimited by matching `{` … `}` punctuation
    Brace,
}

impl FoldStrategy {
    /// Opening and closing delimiter texts
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            FoldStrategy::Brace => ("{", "}"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FoldStrategy::Brace => "brace",
        }
    }
}

/// Static metadata consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeInfo {
    pub name: &'static str,
    pub mime_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    pub fold: FoldStrategy,
}

/// A language mode the host can drive line by line
///
/// Implementations are immutable; every bit of cross-line state travels
/// through the [`ScanState`] values passed in and returned.
pub trait LanguageMode: Send + Sync + std::fmt::Debug {
    /// Static metadata
    fn info(&self) -> &ModeInfo;

    /// Lazy token iterator over one line
    fn line_tokens<'a>(&'a self, line: &'a str, state: ScanState) -> LineTokens<'a, 'a>;

    /// State at the start of a document
    fn start_state(&self) -> ScanState {
        ScanState::Base
    }

    /// Scan a whole line, returning its tokens and the next line's start state
    fn scan_line(&self, line: &str, state: ScanState) -> LineScan {
        let mut iter = self.line_tokens(line, state);
        let tokens: Vec<_> = iter.by_ref().collect();
        LineScan {
            tokens,
            next_state: iter.state(),
        }
    }

    /// Scan one token from `rest` (the unconsumed remainder of a line)
    ///
    /// Returns the token and the state for whatever follows it. When the token
    /// reaches the end of `rest`, that state already has the end-of-line rules
    /// applied. Spans are relative to `rest`. `None` means `rest` is empty.
    fn token(&self, rest: &str, state: ScanState) -> Option<(Token<TokenKind>, ScanState)> {
        let mut iter = self.line_tokens(rest, state);
        let token = iter.next()?;
        trace!(target: "yz::mode", kind = ?token.kind, next = ?iter.state(), "Single token scan");
        Some((token, iter.state()))
    }
}
