//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作、后台结果和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod backend;        // 后台命令（出）与后台事件（入）
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     后台往返：
//!         update 把 BackendCommand 放进 app.pending_commands
//!             ↓
//!         主循环交给 CoreService，在 tokio 运行时上执行
//!             ↓
//!         结果以 BackendEvent 送回主循环
//!             ↓
//!         包装成 AppMessage::Backend 再次进入 update

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendCommand, BackendEvent};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
