//! 视图模型
//!
//! 从远程资源组装出宿主直接渲染的纯数据结构，不含任何 UI 依赖。

mod subscription;
mod template_detail;

pub use subscription::subscription_url;
pub use template_detail::{DayTab, DescriptionView, ShiftRow, ShiftRowKey, TemplateDetailView};
