//! Token 分类与扫描状态

use serde::Serialize;

/// Token 类别（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Builtin,
    Identifier,
    Number,
    String,
    Operator,
    Punctuation,
    Comment,
    /// 无法识别的单个字符
    Error,
    /// 空白，只为保证覆盖完整，不参与高亮
    Whitespace,
}

impl TokenKind {
    /// 编辑器宿主使用的样式名，空白返回 None
    pub fn style(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Builtin => Some("builtin"),
            TokenKind::Identifier => Some("variable"),
            TokenKind::Number => Some("number"),
            TokenKind::String => Some("string"),
            TokenKind::Operator => Some("operator"),
            TokenKind::Punctuation => Some("punctuation"),
            TokenKind::Comment => Some("comment"),
            TokenKind::Error => Some("error"),
            TokenKind::Whitespace => None,
        }
    }
}

/// 扫描状态：当前激活的子扫描器
///
/// 纯值类型。每行扫描以上一行的结束状态为输入，并产出本行的结束状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    #[default]
    Base,
    InString,
    InChar,
    InRawString,
    InBlockComment,
}

impl ScanState {
    /// 该状态能否延续到下一行
    ///
    /// 引号字符串/字符的转义追踪只在单次扫描内有效，因此它们不跨行；
    /// 反引号原始字符串和块注释可以跨行。
    pub fn carries_across_lines(self) -> bool {
        !matches!(self, ScanState::InString | ScanState::InChar)
    }

    /// 行尾归一化：不能跨行的状态回到 Base
    pub fn at_line_end(self) -> Self {
        if self.carries_across_lines() {
            self
        } else {
            ScanState::Base
        }
    }
}
