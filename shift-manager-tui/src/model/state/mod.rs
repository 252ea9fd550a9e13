//! 页面状态模块
//!
//! 定义各个页面与弹窗的状态数据结构

mod delete_template;
mod home;
mod modal;
mod mount;
mod template_detail;
mod templates;
mod toast;

pub use delete_template::{DeleteFocus, DeleteTemplateState};
pub use home::HomeState;
pub use modal::ModalState;
pub use mount::Mount;
pub use template_detail::TemplateDetailState;
pub use templates::TemplatesState;
pub use toast::{ToastKind, ToastState};
