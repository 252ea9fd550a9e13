//! 页面状态定义

use super::NavItemId;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（订阅链接）
    #[default]
    Home,
    /// 排班模板列表
    Templates,
}

impl From<NavItemId> for Page {
    fn from(id: NavItemId) -> Self {
        match id {
            NavItemId::Home => Page::Home,
            NavItemId::Templates => Page::Templates,
        }
    }
}
