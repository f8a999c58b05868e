//! Scanner trait 定义
//!
//! 语言扫描器都需实现此 trait；驱动层（[`super::lexer`]）只依赖这里的接口。

use super::core::{LinePosition, LineStream, Span};
use serde::Serialize;

/// 词法扫描器 trait
pub trait Scanner {
    /// Token 类型
    type TokenKind: Clone + PartialEq + std::fmt::Debug;
    /// 扫描模式（跨行延续的子扫描器状态）
    type Mode: Copy + PartialEq + std::fmt::Debug;

    /// 设置扫描模式
    fn set_mode(&mut self, mode: Self::Mode);

    /// 获取当前模式
    fn current_mode(&self) -> Self::Mode;

    /// 扫描下一个 token
    ///
    /// 这是核心方法，驱动字符流并生成 token。
    /// 每次调用至少消费一个字符，行尾返回 [`ScanResult::Eol`]。
    fn next_token(&mut self, stream: &mut LineStream<'_>) -> ScanResult<Token<Self::TokenKind>>;

    /// 行尾处理，返回下一行应使用的模式
    ///
    /// 默认实现原样延续当前模式
    fn end_line(&mut self) -> Self::Mode {
        self.current_mode()
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<K> {
    pub kind: K,
    pub span: Span,
    /// 原始文本；一行内所有 token 的文本按序拼接即为原行
    pub text: String,
}

impl<K> Token<K> {
    pub fn new(kind: K, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// 获取 token 的起始位置
    pub fn start(&self) -> LinePosition {
        self.span.start
    }

    /// 获取 token 的结束位置
    pub fn end(&self) -> LinePosition {
        self.span.end
    }
}

/// 扫描结果
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult<T> {
    /// 成功扫描到 token
    Token(T),
    /// 已到行尾
    Eol,
}

/// 辅助函数：检查字符是否为标识符起始字符
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// 辅助函数：检查字符是否为标识符延续字符
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
