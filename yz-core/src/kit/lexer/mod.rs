//! Yz 行词法分析器
//!
//! 面向编辑器高亮的按行扫描器，设计目标：
//! - 确定性：相同的行文本与起始状态总是得到相同结果
//! - 完整覆盖：token 文本按序拼接即为原行
//! - 增量友好：跨行状态只有一个 [`ScanState`]，由调用方显式传递
//! - 永不失败：无法识别的字符降级为单字符 `Error` token

pub mod core;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod tables;
pub mod types;
pub mod yz;

pub use self::core::{LinePosition, LineStream, Span};
pub use error::{ErrorKind, LexerError};
pub use lexer::{scan_line, LineScan, LineTokens};
pub use scanner::{ScanResult, Scanner, Token};
pub use tables::ClassificationTables;
pub use types::{ScanState, TokenKind};
pub use yz::YzScanner;
