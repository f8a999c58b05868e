//! 文档级缓存
//!
//! 每行缓存起始状态、token 和结束状态。编辑后从被改动的第一行重新扫描，
//! 越过编辑区之后，一旦某行的新起始状态与缓存一致就停止（收敛）。

pub mod fold;

pub use fold::{compute_folds, FoldRegion};

use crate::kit::lexer::{LexerError, ScanState, Token, TokenKind};
use crate::mode::LanguageMode;
use std::ops::Range;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("line range {start}..{end} out of bounds for document with {len} lines")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("line {line} out of bounds for document with {len} lines")]
    LineOutOfBounds { line: usize, len: usize },
}

pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Debug, Clone)]
struct CachedLine {
    text: String,
    start: ScanState,
    tokens: Vec<Token<TokenKind>>,
    end: ScanState,
}

impl CachedLine {
    fn pending(text: String) -> Self {
        Self {
            text,
            start: ScanState::Base,
            tokens: Vec::new(),
            end: ScanState::Base,
        }
    }
}

/// 带增量重扫的文档
///
/// 文档至少有一行；空文本对应一个空行。
#[derive(Debug, Clone)]
pub struct Document {
    mode: Arc<dyn LanguageMode>,
    lines: Vec<CachedLine>,
}

impl Document {
    /// 按 `'\n'` 切分文本并扫描全部行
    pub fn new(mode: Arc<dyn LanguageMode>, text: &str) -> Self {
        let lines: Vec<CachedLine> = text
            .split('\n')
            .map(|l| CachedLine::pending(l.to_string()))
            .collect();
        let mut doc = Self { mode, lines };
        let count = doc.lines.len();
        doc.rescan(0, count);
        debug!(target: "yz::document", lines = count, end = ?doc.end_state(), "Document created");
        doc
    }

    pub fn mode(&self) -> &Arc<dyn LanguageMode> {
        &self.mode
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.text.as_str())
    }

    /// 缓存的某行 token
    pub fn tokens(&self, index: usize) -> Option<&[Token<TokenKind>]> {
        self.lines.get(index).map(|l| l.tokens.as_slice())
    }

    /// 某行开始时的状态
    pub fn state_before(&self, index: usize) -> Option<ScanState> {
        self.lines.get(index).map(|l| l.start)
    }

    /// 某行结束后（已做行尾归一化）的状态
    pub fn state_after(&self, index: usize) -> Option<ScanState> {
        self.lines.get(index).map(|l| l.end)
    }

    /// 最后一行结束后的状态
    pub fn end_state(&self) -> ScanState {
        self.lines
            .last()
            .map(|l| l.end)
            .unwrap_or_else(|| self.mode.start_state())
    }

    /// 用 `'\n'` 重新拼接全文
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 所有行及其 token
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token<TokenKind>])> {
        self.lines.iter().map(|l| (l.text.as_str(), l.tokens.as_slice()))
    }

    /// 用 `replacement` 替换 `range` 内的行，返回实际重新扫描的行范围（新行号）
    ///
    /// 新插入的行总会被扫描；之后的行只在起始状态变化时才重扫。
    pub fn edit<I, S>(
        &mut self,
        range: Range<usize>,
        replacement: I,
    ) -> DocumentResult<Range<usize>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let len = self.lines.len();
        if range.start > range.end || range.end > len {
            return Err(DocumentError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }

        let start = range.start;
        let removed = range.len();
        self.lines.splice(
            range,
            replacement
                .into_iter()
                .map(|s| CachedLine::pending(s.into())),
        );
        let mut inserted = self.lines.len() + removed - len;

        // 保持至少一行
        if self.lines.is_empty() {
            self.lines.push(CachedLine::pending(String::new()));
            inserted = 1;
        }

        let rescanned = self.rescan(start, start + inserted);
        debug!(
            target: "yz::document",
            start,
            removed,
            inserted,
            rescanned = rescanned.len(),
            "Applied edit"
        );
        Ok(rescanned)
    }

    /// 替换一行
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) -> DocumentResult<Range<usize>> {
        self.check_line(index)?;
        self.edit(index..index + 1, [text.into()])
    }

    /// 在 `index` 之前插入一行（`index == line_count()` 时追加到末尾）
    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) -> DocumentResult<Range<usize>> {
        if index > self.lines.len() {
            return Err(DocumentError::LineOutOfBounds {
                line: index,
                len: self.lines.len(),
            });
        }
        self.edit(index..index, [text.into()])
    }

    /// 删除一行；删掉唯一的一行会留下一个空行
    pub fn remove_line(&mut self, index: usize) -> DocumentResult<Range<usize>> {
        self.check_line(index)?;
        self.edit(index..index + 1, std::iter::empty::<String>())
    }

    /// 整体替换文本
    pub fn set_text(&mut self, text: &str) -> Range<usize> {
        let all = 0..self.lines.len();
        self.lines.splice(all, text.split('\n').map(|l| CachedLine::pending(l.to_string())));
        let count = self.lines.len();
        self.rescan(0, count)
    }

    /// 所有无法识别字符的诊断，附带行号（0-based）
    pub fn diagnostics(&self) -> Vec<(usize, LexerError)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| {
                line.tokens
                    .iter()
                    .filter_map(LexerError::from_token)
                    .map(move |err| (index, err))
            })
            .collect()
    }

    /// 折叠区域
    pub fn fold_regions(&self) -> Vec<FoldRegion> {
        compute_folds(
            self.lines.iter().map(|l| l.tokens.as_slice()),
            self.mode.info().fold,
        )
    }

    /// 从 `line` 开始的折叠区域；同一行有多个时取最靠右的那个
    pub fn fold_at(&self, line: usize) -> Option<FoldRegion> {
        self.fold_regions()
            .into_iter()
            .filter(|r| r.start_line == line)
            .max_by_key(|r| r.open_column)
    }

    fn check_line(&self, index: usize) -> DocumentResult<()> {
        if index >= self.lines.len() {
            return Err(DocumentError::LineOutOfBounds {
                line: index,
                len: self.lines.len(),
            });
        }
        Ok(())
    }

    /// 从 `from` 开始重扫；`[from, dirty_end)` 内的行必扫，之后直到收敛
    fn rescan(&mut self, from: usize, dirty_end: usize) -> Range<usize> {
        let mut state = match from {
            0 => self.mode.start_state(),
            n => self.lines[n - 1].end,
        };

        let mut index = from;
        while index < self.lines.len() {
            let line = &mut self.lines[index];
            if index >= dirty_end && line.start == state {
                trace!(target: "yz::document", line = index, ?state, "Converged");
                break;
            }
            let scan = self.mode.scan_line(&line.text, state);
            line.start = state;
            line.tokens = scan.tokens;
            line.end = scan.next_state;
            state = scan.next_state;
            index += 1;
        }
        from..index
    }
}
