//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 删除确认弹窗打开时，交给 handle_delete_keys
//!                 - 模板详情弹窗打开时，交给 handle_detail_keys
//!                 - 帮助弹窗打开时，交给 handle_help_keys
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     模板详情：
//!         ←/→ 或 h/l   → ModalMessage::PrevTab / NextTab
//!         Enter / Esc  → 关闭
//!
//!     删除确认：
//!         Tab / ←/→    → ModalMessage::ToggleDeleteFocus
//!         Enter        → ModalMessage::Confirm（按当前焦点按钮）
//!         Esc          → 关闭
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
