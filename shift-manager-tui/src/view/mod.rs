//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         pub mod theme;          // 主题与常用样式
//!         mod components;         // 导航栏、状态栏、弹窗、toast、链接等组件
//!         mod pages;              // 各页面内容
//!
//!
//!     绘制顺序（后绘制的在上层）：
//!         标题栏 → 导航 → 页面 → 状态栏 → 弹窗 → toast
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
