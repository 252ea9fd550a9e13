//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构与简单的状态操作，不发起任何 I/O。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面、弹窗、toast 的数据状态
//!
//!     Page 是门牌号，只标识当前位置；State 是房间里的内容（查询三态、选中项、挂载令牌）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     两个业务弹窗各自持有一个 `ModalStore`（来自 shift-manager-core），
//!     作为 App 的普通字段显式传递，不存在全局状态：
//!         - template_detail.store: ModalStore<i64>                       // 模板 ID
//!         - delete_template.store: ModalStore<ScheduleTemplateSummary>   // 待删除的模板
//!
//!     帮助弹窗沿用 ModalState { active: Option<Modal> }。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 挂载周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     页面可见或弹窗打开时调用 `Mount::begin()` 得到一个 CancellationToken，
//!     随后台命令一起发出；离开页面或关闭弹窗时 `Mount::end()` 取消它，
//!     在途请求的最后一个等待者离开后请求被中止。

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{
    DeleteFocus, DeleteTemplateState, HomeState, ModalState, TemplateDetailState, TemplatesState,
    ToastKind, ToastState,
};
