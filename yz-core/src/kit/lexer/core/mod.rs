//! 词法分析底层设施：行字符流与位置

pub mod position;
pub mod stream;

pub use position::{LinePosition, Span};
pub use stream::LineStream;
