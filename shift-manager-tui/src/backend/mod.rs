//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌──────────┐  BackendCommand   ┌─────────────┐   tokio::spawn           │
//！│   │  Update  │ ────────────────▶ │ CoreService │ ──────────────┐          │
//！│   │    层    │                   │  (runtime)  │               ▼          │
//！│   └──────────┘                   └─────────────┘      ┌────────────────┐  │
//！│        ▲                                ▲             │ shift-manager- │  │
//！│        │ AppMessage::Backend            │ channel     │     core       │  │
//！│        │                                │             └───────┬────────┘  │
//！│   ┌──────────┐    try_recv()     ┌─────────────┐              │           │
//！│   │  主循环  │ ◀──────────────── │ BackendEvent│ ◀────────────┘           │
//！│   └──────────┘                   └─────────────┘                          │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。UI 线程从不等待网络请求，
//! 所有请求都在 CoreService 持有的 tokio 运行时里执行，结果通过 channel 送回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;               // 核心服务入口（运行时 + 查询缓存）
//!         mod config_service;             // 配置文件（TOML）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         创建流程：
//!             1. 由配置生成 HttpClientConfig
//!             2. 创建 HttpApiClient
//!             3. 组装 ServiceContext（查询缓存挂在上面）
//!             4. 启动多线程 tokio 运行时
//!
//!         提供的方法：
//!             - dispatch(command)     把命令派发为后台任务
//!             - try_recv()            非阻塞地取回一个结果
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/shift-manager/config.toml
//!         日志目录：~/.config/shift-manager/logs/
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在删除弹窗中确认
//!         ↓
//!     Update 层推入 BackendCommand::DeleteTemplate
//!         ↓
//!     主循环调用 CoreService::dispatch
//!         ↓
//!     ScheduleTemplateService 调用后端 API 并使缓存失效
//!         ↓
//!     BackendEvent::TemplateDeleted 进入 channel
//!         ↓
//!     Update 层更新 Model 状态（toast、关闭弹窗、重新拉取列表）
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
