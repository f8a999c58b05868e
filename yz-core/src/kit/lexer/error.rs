//! Lexer 诊断类型
//!
//! 扫描器本身从不返回错误：无法识别的字符以 `Error` token 的形式出现在结果中。
//! 需要文字说明的宿主可以把这些 token 转成 [`LexerError`]。

use super::core::LinePosition;
use super::scanner::Token;
use super::types::TokenKind;
use thiserror::Error;

/// 错误类型（目前只有一种）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// 非法字符
    UnrecognizedCharacter(char),
}

/// 词法诊断，包含结构化信息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexerError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的行内位置
    pub position: LinePosition,
    /// 详细错误消息
    pub message: String,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: LinePosition) -> Self {
        let message = Self::format_message(&kind, position);
        Self {
            kind,
            position,
            message,
        }
    }

    /// `Error` token 对应的诊断，其它 token 返回 `None`
    pub fn from_token(token: &Token<TokenKind>) -> Option<Self> {
        if token.kind != TokenKind::Error {
            return None;
        }
        let ch = token.text.chars().next()?;
        Some(Self::at(ErrorKind::UnrecognizedCharacter(ch), token.start()))
    }

    /// 列号（1-based，用于显示）
    pub fn column(&self) -> usize {
        self.position.column + 1
    }

    fn format_message(kind: &ErrorKind, position: LinePosition) -> String {
        match kind {
            ErrorKind::UnrecognizedCharacter(ch) => {
                format!("Unrecognized character '{}' at column {}", ch, position.column + 1)
            }
        }
    }
}
