//! Yz CLI - Command line syntax highlighter
//!
//! Reads a Yz source file (or stdin), tokenizes it line by line and prints it
//! highlighted. Settings come from `yz.json`; flags override them.

use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{debug, warn};

mod config;
mod error;
mod logging;
mod platform;

use crate::error::{CliError, CliResult};
use crate::logging::LogFormat;
use yz_config::{HighlightConfig, OutputFormat};
use yz_core::{Document, LanguageMode, ModeRegistry, YzMode};

/// 默认 MIME 类型
const DEFAULT_MIME: &str = "text/x-yz";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Ansi,
    Json,
    Tagged,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ansi => OutputFormat::Ansi,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Tagged => OutputFormat::Tagged,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "yz-highlight",
    about = "Yz syntax highlighter - line-oriented tokenizer for terminals and tools",
    version
)]
struct Cli {
    /// Source file; reads stdin when absent or `-`
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Select the mode by MIME type (default: by extension, else text/x-yz)
    #[arg(long, value_name = "MIME")]
    mime: Option<String>,

    /// Output format (overrides `output.format`)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Do not prefix lines with their number
    #[arg(long)]
    no_line_numbers: bool,

    /// Print fold regions after the source
    #[arg(long)]
    folds: bool,

    /// Print unrecognized characters with source context to stderr
    #[arg(long)]
    diagnostics: bool,

    /// Print the mode metadata as JSON and exit
    #[arg(long)]
    info: bool,

    /// Configuration file (default: ./yz.json when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut cfg = config::load(cli.config.as_deref())?;
    apply_overrides(&mut cfg, &cli)?;

    logging::init_with_file(&cfg.log, cli.log_format, cli.log_file.as_deref())?;
    debug!(target: "yz::cli", ?cfg, "Configuration loaded");

    let mut registry = ModeRegistry::new();
    registry.register(Arc::new(YzMode::from_config(&cfg.tables)));
    let mode = select_mode(&registry, &cli)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.info {
        platform::render_info(mode.info(), &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let (label, source) = read_source(cli.path.as_deref())?;
    let doc = Document::new(mode, &source);
    debug!(target: "yz::cli", lines = doc.line_count(), "Document scanned");

    platform::render(&doc, &cfg.output, &cfg.theme, &mut out)?;
    if cli.folds {
        platform::render_folds(&doc.fold_regions(), &mut out)?;
    }
    out.flush()?;

    if cli.diagnostics {
        platform::print_diagnostics(&doc, &label, &mut io::stderr().lock())?;
    }
    Ok(())
}

/// 命令行参数覆盖配置文件
fn apply_overrides(cfg: &mut HighlightConfig, cli: &Cli) -> CliResult<()> {
    if let Some(level) = &cli.log_level {
        cfg.log.global = config::parse_log_level(level)?;
    }
    if let Some(format) = cli.format {
        cfg.output.format = format.into();
    }
    if cli.no_line_numbers {
        cfg.output.line_numbers = false;
    }
    Ok(())
}

/// `--mime` 优先，其次按扩展名，最后回退到默认 MIME
fn select_mode(registry: &ModeRegistry, cli: &Cli) -> CliResult<Arc<dyn LanguageMode>> {
    if let Some(mime) = &cli.mime {
        return Ok(registry.for_mime(mime)?);
    }
    if let Some(path) = cli.path.as_deref().filter(|p| *p != Path::new("-")) {
        match registry.for_path(path) {
            Ok(mode) => return Ok(mode),
            Err(e) => warn!(target: "yz::cli", "{}; falling back to {}", e, DEFAULT_MIME),
        }
    }
    Ok(registry.for_mime(DEFAULT_MIME)?)
}

/// 读取源文件或 stdin，返回（显示名，内容）
fn read_source(path: Option<&Path>) -> CliResult<(String, String)> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok((path.display().to_string(), source))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yz_config::LogLevel;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "yz-highlight",
            "main.yz",
            "--format",
            "tagged",
            "--folds",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("main.yz")));
        assert_eq!(cli.format, Some(FormatArg::Tagged));
        assert!(cli.folds);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let cli = Cli::try_parse_from([
            "yz-highlight",
            "--format",
            "json",
            "--no-line-numbers",
            "--log-level",
            "trace",
        ])
        .unwrap();
        let mut cfg = HighlightConfig::default();
        apply_overrides(&mut cfg, &cli).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.line_numbers);
        assert_eq!(cfg.log.global, LogLevel::Trace);
    }

    #[test]
    fn test_invalid_log_level() {
        let cli = Cli::try_parse_from(["yz-highlight", "--log-level", "loud"]).unwrap();
        let mut cfg = HighlightConfig::default();
        assert!(matches!(
            apply_overrides(&mut cfg, &cli),
            Err(CliError::LogLevel(_))
        ));
    }

    #[test]
    fn test_select_mode() {
        let registry = ModeRegistry::with_defaults();

        let cli = Cli::try_parse_from(["yz-highlight", "--mime", "text/yz"]).unwrap();
        assert_eq!(select_mode(&registry, &cli).unwrap().info().name, "yz");

        let cli = Cli::try_parse_from(["yz-highlight", "notes.txt"]).unwrap();
        assert_eq!(select_mode(&registry, &cli).unwrap().info().name, "yz");

        let cli = Cli::try_parse_from(["yz-highlight", "--mime", "text/x-c"]).unwrap();
        assert!(matches!(
            select_mode(&registry, &cli),
            Err(CliError::Registry(_))
        ));
    }
}
