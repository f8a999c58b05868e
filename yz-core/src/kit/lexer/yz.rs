//! Yz 语言 Scanner 实现
//!
//! 按行扫描，支持：
//! - 关键字、内建函数、标识符
//! - 运算符（单字符和双字符复合）
//! - 数字（十六进制、八进制、二进制、浮点、指数）
//! - 字符串、字符、反引号原始字符串
//! - 行注释、块注释
//!
//! Base 模式下规则的尝试顺序是固定的，调整顺序会改变结果
//! （例如把注释检测放到运算符之后，`//` 会被切成两个 `/`）。

use super::core::{LinePosition, LineStream, Span};
use super::scanner::{is_identifier_continue, is_identifier_start, ScanResult, Scanner, Token};
use super::tables::ClassificationTables;
use super::types::{ScanState, TokenKind};

use tracing::{debug, trace};

/// 运算符字符集
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];

/// 标点
const PUNCTUATION_CHARS: &[char] = &['{', '}', '[', ']', '(', ')', ';', ',', '.'];

/// Yz 扫描器
///
/// 只持有当前模式和词表引用；跨行状态由调用方通过 [`ScanState`] 显式传递。
#[derive(Debug, Clone)]
pub struct YzScanner<'t> {
    mode: ScanState,
    tables: &'t ClassificationTables,
}

impl<'t> YzScanner<'t> {
    pub fn with_mode(tables: &'t ClassificationTables, mode: ScanState) -> Self {
        Self { mode, tables }
    }

    fn switch(&mut self, mode: ScanState) {
        if self.mode != mode {
            debug!(target: "yz::lexer", from = ?self.mode, to = ?mode, "Switching scanner mode");
            self.mode = mode;
        }
    }
}

impl Scanner for YzScanner<'_> {
    type TokenKind = TokenKind;
    type Mode = ScanState;

    fn set_mode(&mut self, mode: Self::Mode) {
        self.switch(mode);
    }

    fn current_mode(&self) -> Self::Mode {
        self.mode
    }

    fn next_token(&mut self, stream: &mut LineStream<'_>) -> ScanResult<Token<TokenKind>> {
        if stream.is_eol() {
            return ScanResult::Eol;
        }

        let start = stream.position();
        trace!(target: "yz::lexer", mode = ?self.mode, column = start.column, "Scanning next token");

        let kind = match self.mode {
            ScanState::Base => self.scan_base(stream, start),
            ScanState::InString => self.scan_quoted(stream, '"'),
            ScanState::InChar => self.scan_quoted(stream, '\''),
            ScanState::InRawString => self.scan_raw_string(stream),
            ScanState::InBlockComment => self.scan_block_comment(stream),
        };

        let token = Token::new(
            kind,
            Span::range(start, stream.position()),
            stream.slice_from(start),
        );
        trace!(target: "yz::lexer", kind = ?token.kind, text = %token.text, "Produced token");
        ScanResult::Token(token)
    }

    fn end_line(&mut self) -> Self::Mode {
        self.switch(self.mode.at_line_end());
        self.mode
    }
}

impl YzScanner<'_> {
    /// 默认模式扫描，按优先级依次尝试
    fn scan_base(&mut self, stream: &mut LineStream<'_>, start: LinePosition) -> TokenKind {
        // 空白
        if stream.eat_while(char::is_whitespace) > 0 {
            return TokenKind::Whitespace;
        }

        // 注释
        if stream.match_str("//") {
            stream.skip_to_end();
            return TokenKind::Comment;
        }
        if stream.match_str("/*") {
            self.switch(ScanState::InBlockComment);
            return self.scan_block_comment(stream);
        }

        // 字符串
        if stream.match_char('"') {
            self.switch(ScanState::InString);
            return self.scan_quoted(stream, '"');
        }
        if stream.match_char('\'') {
            self.switch(ScanState::InChar);
            return self.scan_quoted(stream, '\'');
        }
        if stream.match_char('`') {
            self.switch(ScanState::InRawString);
            return self.scan_raw_string(stream);
        }

        // 数字
        if let Some(len) = match_number(stream.rest()) {
            stream.advance_by(len);
            return TokenKind::Number;
        }

        // 运算符：先尝试双字符复合运算符
        if let Some(c) = stream.try_peek(0).filter(|c| OPERATOR_CHARS.contains(c)) {
            let compound = stream
                .try_peek(1)
                .is_some_and(|next| is_compound_operator(c, next));
            stream.advance_by(if compound { 2 } else { 1 });
            return TokenKind::Operator;
        }

        // 标点
        if stream.check_in(PUNCTUATION_CHARS) {
            let _ = stream.try_advance();
            return TokenKind::Punctuation;
        }

        // 标识符/关键字
        if stream.try_peek(0).is_some_and(is_identifier_start) {
            stream.eat_while(is_identifier_continue);
            return self.tables.classify(stream.slice_from(start));
        }

        // 兜底：消费一个字符，保证前进
        if let Some(c) = stream.try_advance() {
            debug!(target: "yz::lexer", ch = ?c, column = start.column, "Unrecognized character");
        }
        TokenKind::Error
    }

    /// 引号字符串 / 字符（开头引号已消费）
    ///
    /// 反斜杠转义下一个字符。转义状态只在本次扫描内有效。
    fn scan_quoted(&mut self, stream: &mut LineStream<'_>, quote: char) -> TokenKind {
        let mut escaped = false;
        while let Some(c) = stream.try_advance() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                self.switch(ScanState::Base);
                break;
            }
        }
        TokenKind::String
    }

    /// 反引号原始字符串，无转义
    fn scan_raw_string(&mut self, stream: &mut LineStream<'_>) -> TokenKind {
        while let Some(c) = stream.try_advance() {
            if c == '`' {
                self.switch(ScanState::Base);
                break;
            }
        }
        TokenKind::String
    }

    /// 块注释，扫描到 `*/` 或行尾
    fn scan_block_comment(&mut self, stream: &mut LineStream<'_>) -> TokenKind {
        loop {
            if stream.match_str("*/") {
                self.switch(ScanState::Base);
                break;
            }
            if stream.try_advance().is_none() {
                break;
            }
        }
        TokenKind::Comment
    }
}

fn is_compound_operator(first: char, second: char) -> bool {
    second == '='
        || matches!(
            (first, second),
            ('&', '&') | ('|', '|') | ('<', '<') | ('>', '>') | ('+', '+') | ('-', '-')
        )
}

/// 匹配数字字面量，返回最长匹配的长度（数字均为 ASCII，字节数即字符数）
fn match_number(rest: &str) -> Option<usize> {
    let b = rest.as_bytes();
    if !b.first()?.is_ascii_digit() {
        return None;
    }

    let decimal = count_while(b, 0, |c| c.is_ascii_digit());
    [
        radix_literal(b, b"xX", |c| c.is_ascii_hexdigit()),
        octal_literal(b),
        radix_literal(b, b"bB", |c| matches!(c, b'0' | b'1')),
        float_literal(b, decimal),
        exponent_part(b, decimal).map(|exp| decimal + exp),
        Some(decimal),
    ]
    .into_iter()
    .flatten()
    .max()
}

fn count_while(b: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    b.iter().skip(from).take_while(|&&c| pred(c)).count()
}

/// `0x1F` / `0b101`
fn radix_literal(b: &[u8], markers: &[u8], digit: impl Fn(u8) -> bool) -> Option<usize> {
    if b.first() != Some(&b'0') || !markers.contains(b.get(1)?) {
        return None;
    }
    let n = count_while(b, 2, digit);
    (n > 0).then_some(2 + n)
}

/// `0755`
fn octal_literal(b: &[u8]) -> Option<usize> {
    if b.first() != Some(&b'0') {
        return None;
    }
    let n = count_while(b, 1, |c| (b'0'..=b'7').contains(&c));
    (n > 0).then_some(1 + n)
}

/// `3.14` / `3.14e-2`，小数点后必须有数字
fn float_literal(b: &[u8], int_len: usize) -> Option<usize> {
    if b.get(int_len) != Some(&b'.') {
        return None;
    }
    let frac = count_while(b, int_len + 1, |c| c.is_ascii_digit());
    if frac == 0 {
        return None;
    }
    let end = int_len + 1 + frac;
    Some(end + exponent_part(b, end).unwrap_or(0))
}

/// `e10` / `E+3` / `e-2`，从 `at` 开始，返回长度
fn exponent_part(b: &[u8], at: usize) -> Option<usize> {
    if !matches!(b.get(at), Some(b'e' | b'E')) {
        return None;
    }
    let mut i = at + 1;
    if matches!(b.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    let n = count_while(b, i, |c| c.is_ascii_digit());
    (n > 0).then_some(i + n - at)
}
