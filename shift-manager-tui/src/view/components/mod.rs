//! 可复用的界面组件

pub mod hyperlink;
pub mod modal;
pub mod navigation;
pub mod resource;
pub mod statusbar;
pub mod toast;
