//! 终端平台层：渲染与诊断输出

pub mod cli;

pub use cli::{print_diagnostics, render, render_folds, render_info};
