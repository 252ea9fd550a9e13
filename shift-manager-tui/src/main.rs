//! Shift Manager TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Shift Manager TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Args::parse()           // clap 解析 --config
//!     load config             // backend/config_service.rs
//!     init_logging()          // 日志写入配置目录，stdout 留给终端 UI
//!     CoreService::new()      // 后台 tokio 运行时 + 查询缓存
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use backend::{ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "shift-manager-tui", version, about = "值班管理终端控制台", long_about = None)]
struct Args {
    /// 配置文件路径（默认 <config_dir>/shift-manager/config.toml）
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 1. 读取配置
    let args = Args::parse();
    let config_service = match args.config {
        Some(path) => LocalConfigService::with_path(path),
        None => LocalConfigService::new()?,
    };
    let config = config_service.load()?;

    // 2. 日志（guard 必须活到程序结束，否则缓冲的日志会丢失）
    let _log_guard = init_logging(&config_service.log_dir())?;
    tracing::info!(
        "Starting Shift Manager TUI (api: {}, config: {})",
        config.api_base_url,
        config_service.path().display()
    );

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    // 3. 后台服务
    let mut backend = CoreService::new(&config)?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config.calendar_domain.clone());
    update::init(&mut app);
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Main loop exited with error: {e:#}");
    }
    result
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn config_flag_accepts_short_and_long_forms() {
        let args = Args::try_parse_from(["shift-manager-tui"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["shift-manager-tui", "--config", "/tmp/a.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/a.toml")));

        let args = Args::try_parse_from(["shift-manager-tui", "-c", "b.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("b.toml")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["shift-manager-tui", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
