//! Fold regions
//!
//! Only punctuation tokens count as delimiters, so braces inside strings and
//! comments never open or close a region.

use crate::kit::lexer::{Token, TokenKind};
use crate::mode::FoldStrategy;
use serde::Serialize;

/// A collapsible region, from an opening delimiter to its match on a later line
///
/// Columns are 0-based char columns of the delimiters themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldRegion {
    pub start_line: usize,
    pub open_column: usize,
    pub end_line: usize,
    pub close_column: usize,
}

impl FoldRegion {
    /// Number of lines hidden when folded
    pub fn hidden_lines(&self) -> usize {
        self.end_line - self.start_line
    }
}

/// Match delimiters across lines with a stack
///
/// Regions opening and closing on the same line are not foldable and are
/// dropped; unmatched delimiters are ignored. The result is sorted by
/// start position.
pub fn compute_folds<'a, I>(lines: I, strategy: FoldStrategy) -> Vec<FoldRegion>
where
    I: IntoIterator<Item = &'a [Token<TokenKind>]>,
{
    let (open, close) = strategy.delimiters();
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut regions = Vec::new();

    for (line, tokens) in lines.into_iter().enumerate() {
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Punctuation) {
            if token.text == open {
                stack.push((line, token.start().column));
            } else if token.text == close {
                let Some((start_line, open_column)) = stack.pop() else {
                    continue;
                };
                if start_line < line {
                    regions.push(FoldRegion {
                        start_line,
                        open_column,
                        end_line: line,
                        close_column: token.start().column,
                    });
                }
            }
        }
    }

    regions.sort_by_key(|r| (r.start_line, r.open_column));
    regions
}
