//! 测试辅助工具

#![allow(dead_code)]

use yz_core::{scan_line, ClassificationTables, ScanState, TokenKind};

/// 在 `Base` 状态下扫描一行，返回 (kind, text) 列表
pub fn kinds(line: &str) -> Vec<(TokenKind, String)> {
    kinds_from(line, ScanState::Base)
}

/// 在给定状态下扫描一行，返回 (kind, text) 列表
pub fn kinds_from(line: &str, state: ScanState) -> Vec<(TokenKind, String)> {
    scan_line(line, state, ClassificationTables::yz())
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// 同 [`kinds`]，但跳过空白
pub fn significant(line: &str) -> Vec<(TokenKind, String)> {
    kinds(line)
        .into_iter()
        .filter(|(kind, _)| *kind != TokenKind::Whitespace)
        .collect()
}

/// 逐行扫描多行文本，返回每行结束后的状态
pub fn states(source: &str) -> Vec<ScanState> {
    let mut state = ScanState::Base;
    source
        .split('\n')
        .map(|line| {
            state = scan_line(line, state, ClassificationTables::yz()).next_state;
            state
        })
        .collect()
}

pub fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}
