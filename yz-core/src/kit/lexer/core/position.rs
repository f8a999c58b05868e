//! 行内位置追踪
//!
//! 每次扫描只处理一行，所以位置都是行内偏移（0-based）：
//! - column: Unicode 码点计数，用于显示
//! - byte_offset: UTF-8 字节偏移，用于切片
//! - utf16_column: UTF-16 单元偏移，供编辑器宿主（JS 侧）使用

use serde::Serialize;

/// 行内位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LinePosition {
    /// 码点列号，0-based
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
    /// UTF-16 列号，0-based
    pub utf16_column: usize,
}

impl LinePosition {
    pub fn new(column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 行首
    pub fn start() -> Self {
        Self::default()
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        self.column += 1;
        self.byte_offset += c.len_utf8();
        self.utf16_column += c.len_utf16();
    }
}

/// 行内区间，左闭右开
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: LinePosition,
    pub end: LinePosition,
}

impl Span {
    pub fn range(start: LinePosition, end: LinePosition) -> Self {
        Self { start, end }
    }

    /// 字节范围，可直接用于切片原始行
    pub fn bytes(&self) -> std::ops::Range<usize> {
        self.start.byte_offset..self.end.byte_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.byte_offset == self.end.byte_offset
    }
}
