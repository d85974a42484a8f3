//! pinvin 命令行：导入词典、逐行转换、查询与切分调试。
//!
//! 日志写到 stderr，级别由 `PINVIN_LOG` 控制（默认 `warn`）。

mod args;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load_optional(cli.config.as_deref())?;
    commands::execute(cli.command, &config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PINVIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
