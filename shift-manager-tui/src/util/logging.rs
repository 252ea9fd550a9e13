//! 日志初始化
//!
//! stdout 属于终端 UI，所以日志按天滚动写入配置目录下的 `logs/`。
//! 核心库通过 `log` 门面输出，由 tracing-log 桥接进来。
//! 默认级别 `info`，可用 `RUST_LOG` 覆盖。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "shift-manager-tui.log";

/// 安装全局订阅器，返回的 guard 需要保持到程序退出
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}
