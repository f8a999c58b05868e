//! CLI 配置
//!
//! 读取 `yz.json`（或 `--config` 指定的文件），并把配置层的日志级别映射到 tracing。

use crate::error::{CliError, CliResult};
use std::path::Path;
use tracing::Level;
use yz_config::{HighlightConfig, LogLevel};

/// 未指定 `--config` 时在当前目录查找的文件
pub const DEFAULT_CONFIG_FILE: &str = "yz.json";

/// 加载配置
///
/// 显式给出的路径必须存在；默认文件不存在时使用默认配置。
pub fn load(path: Option<&Path>) -> CliResult<HighlightConfig> {
    match path {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config(default)
            } else {
                Ok(HighlightConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> CliResult<HighlightConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// 解析 JSON 配置文本
pub fn parse(content: &str, path: &Path) -> CliResult<HighlightConfig> {
    serde_json::from_str(content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// 解析 `--log-level`
pub fn parse_log_level(s: &str) -> CliResult<LogLevel> {
    LogLevel::parse(s).ok_or_else(|| CliError::LogLevel(s.to_string()))
}

/// 配置层级别 -> tracing 级别
pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
