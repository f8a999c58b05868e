//! CLI 格式化输出
//!
//! 把 [`Document`] 渲染成彩色终端文本、`[style:text]` 标记或 JSON，
//! 并提供带源码上下文的诊断打印。

use crate::error::CliResult;
use colored::{Color, Colorize};
use serde::Serialize;
use std::io::Write;
use yz_config::{OutputConfig, OutputFormat, ThemeConfig};
use yz_core::kit::lexer::{LexerError, ScanState, Token};
use yz_core::{Document, FoldRegion, ModeInfo, TokenKind};

/// JSON 输出中的一行
#[derive(Serialize)]
struct JsonLine<'a> {
    line: usize,
    text: &'a str,
    state_before: ScanState,
    state_after: ScanState,
    tokens: &'a [Token<TokenKind>],
}

/// 按配置的格式渲染整个文档
pub fn render<W: Write>(
    doc: &Document,
    output: &OutputConfig,
    theme: &ThemeConfig,
    out: &mut W,
) -> CliResult<()> {
    match output.format {
        OutputFormat::Ansi => render_ansi(doc, theme, output.line_numbers, out),
        OutputFormat::Tagged => render_tagged(doc, output.line_numbers, out),
        OutputFormat::Json => render_json(doc, out),
    }
}

fn render_ansi<W: Write>(
    doc: &Document,
    theme: &ThemeConfig,
    line_numbers: bool,
    out: &mut W,
) -> CliResult<()> {
    let width = doc.line_count().to_string().len();
    for (index, (_, tokens)) in doc.iter().enumerate() {
        if line_numbers {
            write!(out, "{} ", format!("{:>width$} |", index + 1).dimmed())?;
        }
        for token in tokens {
            write!(out, "{}", paint(token, theme))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// 按主题给 token 上色；主题里没有或无法解析的颜色按原文输出
fn paint(token: &Token<TokenKind>, theme: &ThemeConfig) -> String {
    let color = token
        .kind
        .style()
        .and_then(|style| theme.color_for(style))
        .and_then(|name| name.parse::<Color>().ok());
    match (color, token.kind) {
        (Some(color), TokenKind::Keyword) => token.text.color(color).bold().to_string(),
        (Some(color), TokenKind::Error) => token.text.color(color).underline().to_string(),
        (Some(color), _) => token.text.color(color).to_string(),
        (None, _) => token.text.clone(),
    }
}

fn render_tagged<W: Write>(doc: &Document, line_numbers: bool, out: &mut W) -> CliResult<()> {
    for (index, (_, tokens)) in doc.iter().enumerate() {
        if line_numbers {
            write!(out, "{:>4} | ", index + 1)?;
        }
        for token in tokens {
            match token.kind.style() {
                Some(style) => write!(out, "[{}:{}]", style, token.text)?,
                None => write!(out, "{}", token.text)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_json<W: Write>(doc: &Document, out: &mut W) -> CliResult<()> {
    let lines: Vec<JsonLine<'_>> = doc
        .iter()
        .enumerate()
        .map(|(index, (text, tokens))| JsonLine {
            line: index,
            text,
            state_before: doc.state_before(index).unwrap_or_default(),
            state_after: doc.state_after(index).unwrap_or_default(),
            tokens,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &lines)?;
    writeln!(out)?;
    Ok(())
}

/// 打印折叠区域（行号 1-based）
pub fn render_folds<W: Write>(folds: &[FoldRegion], out: &mut W) -> CliResult<()> {
    writeln!(out, "[Folds]")?;
    for region in folds {
        writeln!(
            out,
            "{}:{} - {}:{} ({} lines)",
            region.start_line + 1,
            region.open_column + 1,
            region.end_line + 1,
            region.close_column + 1,
            region.hidden_lines()
        )?;
    }
    Ok(())
}

/// 以 JSON 打印模式元数据
pub fn render_info<W: Write>(info: &ModeInfo, out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, info)?;
    writeln!(out)?;
    Ok(())
}

/// 打印诊断并显示源代码上下文
pub fn print_diagnostics<W: Write>(doc: &Document, label: &str, out: &mut W) -> CliResult<()> {
    for (line, err) in doc.diagnostics() {
        writeln!(out, "{} {}:{}: {}", "warning:".yellow().bold(), label, line + 1, err)?;
        print_source_context(doc, line, &err, out)?;
    }
    Ok(())
}

/// 打印源代码上下文（显示诊断行前后几行）
fn print_source_context<W: Write>(
    doc: &Document,
    error_line: usize,
    err: &LexerError,
    out: &mut W,
) -> CliResult<()> {
    const CONTEXT_LINES: usize = 2;

    let start_line = error_line.saturating_sub(CONTEXT_LINES);
    let end_line = (error_line + CONTEXT_LINES).min(doc.line_count().saturating_sub(1));
    let width = (end_line + 1).to_string().len();

    for index in start_line..=end_line {
        let content = doc.line(index).unwrap_or_default();
        writeln!(out, "{:>width$} | {}", index + 1, content)?;
        if index == error_line {
            let marker = caret_padding(content, err.position.column);
            writeln!(out, "{:>width$} | {}{}", "", marker, "^".red().bold())?;
        }
    }
    Ok(())
}

/// 标记前的缩进：保留制表符，其余字符换成空格
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}
