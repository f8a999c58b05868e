//! 关键字 / 内建函数分类表

use super::types::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::debug;
use yz_config::TableConfig;

/// Yz 保留字
static YZ_KEYWORDS: &[&str] = &[
    "func", "main", "var", "const", "if", "else", "for", "while", "return", "break",
    "continue", "struct", "interface", "type", "import", "package", "defer", "go", "select",
    "case", "default", "switch", "fallthrough", "range", "map", "chan", "bool", "int", "int8",
    "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
    "float32", "float64", "complex64", "complex128", "string", "byte", "rune", "error", "true",
    "false", "nil", "iota",
];

/// Yz 内建函数
///
/// 内建函数名不出现在保留字里，两张表互不相交：`println`、`len` 等着色为
/// `builtin` 而不是 `keyword`。
static YZ_BUILTINS: &[&str] = &[
    "println", "print", "len", "cap", "append", "make", "new", "delete", "panic", "recover",
    "close", "copy", "complex", "real", "imag",
];

static YZ_TABLES: Lazy<ClassificationTables> =
    Lazy::new(|| ClassificationTables::new(YZ_KEYWORDS.iter().copied(), YZ_BUILTINS.iter().copied()));

/// 分类表：构造后不可变，按标识符原文精确匹配（区分大小写）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTables {
    keywords: HashSet<String>,
    builtins: HashSet<String>,
}

impl ClassificationTables {
    pub fn new<K, B>(keywords: K, builtins: B) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            builtins: builtins.into_iter().map(Into::into).collect(),
        }
    }

    /// 默认的 Yz 词表（全局共享）
    pub fn yz() -> &'static ClassificationTables {
        &YZ_TABLES
    }

    /// 在当前词表基础上追加词汇，返回新表
    pub fn extended<K, B>(&self, extra_keywords: K, extra_builtins: B) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let mut tables = self.clone();
        tables.keywords.extend(extra_keywords.into_iter().map(Into::into));
        tables.builtins.extend(extra_builtins.into_iter().map(Into::into));
        tables
    }

    /// 默认 Yz 词表 + 配置中的额外词汇
    pub fn from_config(config: &TableConfig) -> Self {
        debug!(
            target: "yz::lexer",
            extra_keywords = config.extra_keywords.len(),
            extra_builtins = config.extra_builtins.len(),
            "Building classification tables from config"
        );
        Self::yz().extended(
            config.extra_keywords.iter().cloned(),
            config.extra_builtins.iter().cloned(),
        )
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    pub fn is_builtin(&self, text: &str) -> bool {
        self.builtins.contains(text)
    }

    /// 标识符分类：关键字优先于内建函数
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.is_keyword(word) {
            TokenKind::Keyword
        } else if self.is_builtin(word) {
            TokenKind::Builtin
        } else {
            TokenKind::Identifier
        }
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::yz().clone()
    }
}
