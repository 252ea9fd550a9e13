//! 页面内容

pub mod home;
pub mod templates;
