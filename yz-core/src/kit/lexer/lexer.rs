//! 行扫描驱动
//!
//! 把 [`YzScanner`] 和 [`LineStream`] 组合成编辑器需要的两种接口：
//! - [`LineTokens`]：惰性迭代，调用方可以提前停止（例如只高亮可见区域）
//! - [`scan_line`]：一次扫完整行，返回全部 token 和下一行的起始状态
//!
//! # 示例
//!
//! ```
//! use yz_core::kit::lexer::{scan_line, ClassificationTables, ScanState, TokenKind};
//!
//! let scan = scan_line("`hello", ScanState::Base, ClassificationTables::yz());
//! assert_eq!(scan.tokens[0].kind, TokenKind::String);
//! assert_eq!(scan.next_state, ScanState::InRawString);
//! ```

use super::core::LineStream;
use super::error::LexerError;
use super::scanner::{ScanResult, Scanner, Token};
use super::tables::ClassificationTables;
use super::types::{ScanState, TokenKind};
use super::yz::YzScanner;

use serde::Serialize;
use tracing::debug;

/// 单行 token 迭代器
///
/// `state()` 在迭代结束前返回"行内剩余部分"的状态；
/// 只有整行消费完毕后它才等于下一行的起始状态。
#[derive(Debug, Clone)]
pub struct LineTokens<'a, 't> {
    scanner: YzScanner<'t>,
    stream: LineStream<'a>,
    finished: bool,
}

impl<'a, 't> LineTokens<'a, 't> {
    pub fn new(line: &'a str, state: ScanState, tables: &'t ClassificationTables) -> Self {
        let mut tokens = Self {
            scanner: YzScanner::with_mode(tables, state),
            stream: LineStream::new(line),
            finished: false,
        };
        // 空行也要做行尾归一化
        if tokens.stream.is_eol() {
            tokens.finish_line();
        }
        tokens
    }

    /// 当前状态
    pub fn state(&self) -> ScanState {
        self.scanner.current_mode()
    }

    /// 整行是否已消费完毕
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// 消费剩余 token，返回下一行的起始状态
    pub fn finish(mut self) -> ScanState {
        for _ in self.by_ref() {}
        self.state()
    }

    fn finish_line(&mut self) {
        self.scanner.end_line();
        self.finished = true;
    }
}

impl Iterator for LineTokens<'_, '_> {
    type Item = Token<TokenKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scanner.next_token(&mut self.stream) {
            ScanResult::Token(token) => {
                // 最后一个 token 之后立即归一化，保证 state() 随即可用
                if self.stream.is_eol() {
                    self.finish_line();
                }
                Some(token)
            }
            ScanResult::Eol => {
                self.finish_line();
                None
            }
        }
    }
}

/// 整行扫描结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineScan {
    pub tokens: Vec<Token<TokenKind>>,
    pub next_state: ScanState,
}

impl LineScan {
    /// 需要着色的 token（跳过空白）
    pub fn highlighted(&self) -> impl Iterator<Item = &Token<TokenKind>> {
        self.tokens.iter().filter(|t| t.kind.style().is_some())
    }

    /// 把 `Error` token 转成诊断
    pub fn diagnostics(&self) -> Vec<LexerError> {
        self.tokens.iter().filter_map(LexerError::from_token).collect()
    }

    /// 按序拼接所有 token 文本（等于原行）
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// 扫描一整行
///
/// `line` 不能包含换行符。相同的 `line` 与 `state` 总是得到相同结果。
pub fn scan_line(line: &str, state: ScanState, tables: &ClassificationTables) -> LineScan {
    let mut iter = LineTokens::new(line, state, tables);
    let tokens: Vec<_> = iter.by_ref().collect();
    let next_state = iter.state();
    debug!(
        target: "yz::lexer",
        ?state,
        ?next_state,
        tokens = tokens.len(),
        "Scanned line"
    );
    LineScan { tokens, next_state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::ErrorKind;
    use pretty_assertions::assert_eq;

    fn scan(line: &str, state: ScanState) -> LineScan {
        scan_line(line, state, ClassificationTables::yz())
    }

    #[test]
    fn test_scan_line_reconstructs_text() {
        let line = r#"  func main() { x := "hi" + 0x1F; } // done"#;
        let result = scan(line, ScanState::Base);
        assert_eq!(result.text(), line);
        assert_eq!(result.next_state, ScanState::Base);
    }

    #[test]
    fn test_empty_line_keeps_carrying_state() {
        assert_eq!(scan("", ScanState::InBlockComment).next_state, ScanState::InBlockComment);
        assert_eq!(scan("", ScanState::InRawString).next_state, ScanState::InRawString);
        assert_eq!(scan("", ScanState::InString).next_state, ScanState::Base);
        assert!(scan("", ScanState::Base).tokens.is_empty());
    }

    #[test]
    fn test_line_tokens_state_after_last_token() {
        let mut iter = LineTokens::new("x \"abc", ScanState::Base, ClassificationTables::yz());
        let kinds: Vec<_> = iter.by_ref().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Whitespace, TokenKind::String]);
        assert!(iter.is_finished());
        assert_eq!(iter.state(), ScanState::Base);
    }

    #[test]
    fn test_line_tokens_early_stop() {
        let mut iter = LineTokens::new("a /* b", ScanState::Base, ClassificationTables::yz());
        let first = iter.next().map(|t| t.text);
        assert_eq!(first.as_deref(), Some("a"));
        assert!(!iter.is_finished());
        // 剩余部分消费完后状态才可靠
        assert_eq!(iter.finish(), ScanState::InBlockComment);
    }

    #[test]
    fn test_highlighted_skips_whitespace() {
        let result = scan("a  b", ScanState::Base);
        assert_eq!(result.tokens.len(), 3);
        let texts: Vec<_> = result.highlighted().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_diagnostics() {
        let result = scan("x @ #", ScanState::Base);
        let errors = result.diagnostics();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ErrorKind::UnrecognizedCharacter('@'));
        assert_eq!(errors[0].column(), 3);
        assert_eq!(errors[1].kind, ErrorKind::UnrecognizedCharacter('#'));
    }

    #[test]
    fn test_spans_are_contiguous() {
        let result = scan("var s = `中文` + 1", ScanState::Base);
        let mut expected_start = 0;
        for token in &result.tokens {
            assert_eq!(token.span.start.byte_offset, expected_start);
            assert_eq!(&"var s = `中文` + 1"[token.span.bytes()], token.text);
            expected_start = token.span.end.byte_offset;
        }
    }
}
