//! 行字符流
//!
//! 编辑器按行投喂文本，这里把一行 `&str` 包装成可预读的字符游标，
//! 同时维护行内位置。不会跨越行边界。

use super::position::LinePosition;

/// 单行字符流
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    /// 当前行文本（不含换行符）
    line: &'a str,
    /// 当前位置
    position: LinePosition,
}

impl<'a> LineStream<'a> {
    /// 创建新的行字符流
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            position: LinePosition::start(),
        }
    }

    /// 获取当前位置
    pub fn position(&self) -> LinePosition {
        self.position
    }

    /// 尚未消费的部分
    pub fn rest(&self) -> &'a str {
        &self.line[self.position.byte_offset..]
    }

    /// 从 `start` 到当前位置的文本
    pub fn slice_from(&self, start: LinePosition) -> &'a str {
        &self.line[start.byte_offset..self.position.byte_offset]
    }

    /// 是否已到行尾
    pub fn is_eol(&self) -> bool {
        self.position.byte_offset >= self.line.len()
    }

    /// 预读第 n 个字符（不消费）
    pub fn try_peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// 读取并消费一个字符
    pub fn try_advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.position.advance(c);
        Some(c)
    }

    /// 检查当前字符是否匹配（不消费）
    pub fn check(&self, expected: char) -> bool {
        self.try_peek(0) == Some(expected)
    }

    /// 检查当前字符是否在集合中（不消费）
    pub fn check_in(&self, chars: &[char]) -> bool {
        matches!(self.try_peek(0), Some(c) if chars.contains(&c))
    }

    /// 消费当前字符如果匹配
    ///
    /// Returns true if matched and consumed
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.check(expected) {
            let _ = self.try_advance();
            true
        } else {
            false
        }
    }

    /// 消费前缀 `s` 如果匹配
    pub fn match_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            for _ in s.chars() {
                let _ = self.try_advance();
            }
            true
        } else {
            false
        }
    }

    /// 连续消费满足谓词的字符，返回消费的字符数
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.try_peek(0) {
            if !pred(c) {
                break;
            }
            let _ = self.try_advance();
            count += 1;
        }
        count
    }

    /// 消费 n 个字符（不足时停在行尾）
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.try_advance().is_none() {
                break;
            }
        }
    }

    /// 消费到行尾
    pub fn skip_to_end(&mut self) {
        while self.try_advance().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_ascii() {
        let mut stream = LineStream::new("abc");

        assert!(stream.check('a'));
        assert_eq!(stream.try_advance(), Some('a'));
        assert_eq!(stream.try_advance(), Some('b'));
        assert_eq!(stream.try_advance(), Some('c'));
        assert_eq!(stream.try_advance(), None);
        assert!(stream.is_eol());
    }

    #[test]
    fn test_stream_cjk() {
        let mut stream = LineStream::new("中文字");

        assert_eq!(stream.try_peek(2), Some('字'));
        assert_eq!(stream.try_advance(), Some('中'));
        assert_eq!(stream.position(), LinePosition::new(1, 3, 1));
        assert_eq!(stream.rest(), "文字");
    }

    #[test]
    fn test_stream_match_char() {
        let mut stream = LineStream::new("abc");

        assert!(stream.match_char('a'));
        assert!(!stream.match_char('a')); // 已经消费了
        assert!(stream.match_char('b'));
    }

    #[test]
    fn test_stream_match_str_and_slice() {
        let mut stream = LineStream::new("/* x */");
        let start = stream.position();

        assert!(!stream.match_str("//"));
        assert!(stream.match_str("/*"));
        assert_eq!(stream.slice_from(start), "/*");
    }

    #[test]
    fn test_stream_eat_while() {
        let mut stream = LineStream::new("   x");

        assert_eq!(stream.eat_while(char::is_whitespace), 3);
        assert!(stream.check('x'));
        assert_eq!(stream.eat_while(char::is_whitespace), 0);
    }

    #[test]
    fn test_stream_advance_by_stops_at_eol() {
        let mut stream = LineStream::new("ab");
        stream.advance_by(5);
        assert!(stream.is_eol());
        assert_eq!(stream.position().column, 2);
    }
}
