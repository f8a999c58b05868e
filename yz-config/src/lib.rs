//! Yz Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Yz crates.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Top-level highlighting configuration (the shape of `yz.json`)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Logging configuration
    pub log: LogConfig,
    /// Extra vocabulary merged into the classification tables
    pub tables: TableConfig,
    /// Output configuration for renderers
    pub output: OutputConfig,
    /// Style name -> color name
    pub theme: ThemeConfig,
}

/// Log level, independent of any logging backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; "silent" maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-phase logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default level for every target
    pub global: LogLevel,
    /// Lexer level (None means `global`)
    pub lexer: Option<LogLevel>,
    /// Mode registry / integration shell level
    pub mode: Option<LogLevel>,
    /// Document cache level
    pub document: Option<LogLevel>,
}

impl LogConfig {
    /// Effective level for a phase: the specific one if set, else `global`
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Mode => self.mode,
            Phase::Document => self.document,
            Phase::Cli => None,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            mode: None,
            document: None,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Mode,
    Document,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Lexer, Phase::Mode, Phase::Document, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Mode => "mode",
            Phase::Document => "document",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("yz::{}", self.as_str())
    }
}

/// Extra keywords / builtins appended to the default Yz tables
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub extra_keywords: Vec<String>,
    pub extra_builtins: Vec<String>,
}

/// Renderer output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored terminal output
    #[default]
    Ansi,
    /// Per-line tokens as JSON
    Json,
    /// `[style:text]` markup
    Tagged,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Prefix each rendered line with its number
    pub line_numbers: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ansi,
            line_numbers: true,
        }
    }
}

/// Theme: maps a token style name (`keyword`, `string`, ...) to a color name
///
/// Configured entries are merged over the default palette; a color name that
/// does not parse (e.g. `"none"`) leaves that style uncolored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "merge_default_colors")]
    pub colors: BTreeMap<String, String>,
}

fn merge_default_colors<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut colors = ThemeConfig::default().colors;
    colors.extend(overrides);
    Ok(colors)
}

impl ThemeConfig {
    /// Color name for a style, if the theme defines one
    pub fn color_for(&self, style: &str) -> Option<&str> {
        self.colors.get(style).map(String::as_str)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let colors = [
            ("keyword", "magenta"),
            ("builtin", "cyan"),
            ("number", "yellow"),
            ("string", "green"),
            ("comment", "bright black"),
            ("operator", "white"),
            ("error", "red"),
        ]
        .into_iter()
        .map(|(style, color)| (style.to_string(), color.to_string()))
        .collect();
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.global, LogLevel::Warn);
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Warn);
    }

    #[test]
    fn test_level_for_phase_override() {
        let cfg = LogConfig {
            lexer: Some(LogLevel::Trace),
            ..Default::default()
        };
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Document), LogLevel::Warn);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Warn);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Document.target(), "yz::document");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{
            "log": { "global": "info", "lexer": "trace" },
            "tables": { "extra_builtins": ["sprintf"] },
            "output": { "format": "tagged" }
        }"#;
        let cfg: HighlightConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.log.global, LogLevel::Info);
        assert_eq!(cfg.log.lexer, Some(LogLevel::Trace));
        assert_eq!(cfg.tables.extra_builtins, vec!["sprintf".to_string()]);
        assert!(cfg.tables.extra_keywords.is_empty());
        assert_eq!(cfg.output.format, OutputFormat::Tagged);
        assert!(cfg.output.line_numbers);
        assert_eq!(cfg.theme.color_for("keyword"), Some("magenta"));
    }

    #[test]
    fn test_theme_overrides_merge_with_defaults() {
        let json = r#"{ "theme": { "colors": { "keyword": "blue", "variable": "white" } } }"#;
        let cfg: HighlightConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.theme.color_for("keyword"), Some("blue"));
        assert_eq!(cfg.theme.color_for("variable"), Some("white"));
        assert_eq!(cfg.theme.color_for("string"), Some("green"));
        assert_eq!(cfg.theme.color_for("comment"), Some("bright black"));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let cfg: HighlightConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, HighlightConfig::default());
    }
}
